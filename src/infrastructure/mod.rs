pub mod database;
pub mod logging;
pub mod repositories;
pub mod retry;
pub mod time;
pub mod util;
