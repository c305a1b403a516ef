// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const UNIQUE_VIOLATION: &str = "23505";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return DomainError::Storage("article already exists".into());
            }
            DomainError::Storage(db_err.message().to_string())
        }
        _ => DomainError::Storage(err.to_string()),
    }
}

pub fn map_redis(err: redis::RedisError) -> DomainError {
    DomainError::Storage(format!("redis: {err}"))
}

pub fn map_pool(err: deadpool_redis::PoolError) -> DomainError {
    DomainError::Storage(format!("redis pool: {err}"))
}
