use std::time::Duration;

use sqlx::{
    Connection, PgPool,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};

use crate::config::DatabaseConfig;
use crate::infrastructure::retry::{RetryPolicy, retry_with_delay};

pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    let ssl_mode = if config.require_tls() {
        PgSslMode::Require
    } else {
        PgSslMode::Disable
    };

    PgConnectOptions::new()
        .host(config.host())
        .port(config.port())
        .username(config.user())
        .password(config.password())
        .database(config.name())
        .ssl_mode(ssl_mode)
}

/// Opens the pool and pings one connection, retrying per `policy` while the
/// server is not accepting connections yet.
pub async fn init_pool(config: &DatabaseConfig, policy: RetryPolicy) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(config);
    retry_with_delay(policy, "postgres", || {
        let options = options.clone();
        async move {
            let pool = PgPoolOptions::new()
                .max_connections(16)
                .acquire_timeout(Duration::from_secs(5))
                .connect_with(options)
                .await?;
            ping(&pool).await?;
            Ok(pool)
        }
    })
    .await
}

pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await
}

pub fn create_table_sql(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            article_id VARCHAR(255) PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            subtitle VARCHAR(255),
            introduction TEXT,
            body TEXT NOT NULL,
            tags TEXT[],
            publish_date TIMESTAMPTZ NOT NULL,
            updated_date TIMESTAMPTZ NOT NULL,
            author JSONB NOT NULL,
            author_id VARCHAR(255) NOT NULL,
            likes INT,
            dislikes INT
        )"
    )
}

pub fn create_author_index_sql(table: &str) -> String {
    format!("CREATE INDEX IF NOT EXISTS {table}_author_id_idx ON {table} (author_id)")
}

/// Idempotent: safe to run against an already initialised database.
/// `table` must already be a validated identifier.
pub async fn ensure_schema(pool: &PgPool, table: &str) -> Result<(), sqlx::Error> {
    sqlx::query(&create_table_sql(table)).execute(pool).await?;
    sqlx::query(&create_author_index_sql(table))
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_statements_are_idempotent_and_target_the_table() {
        let create = create_table_sql("dev_articles");
        assert!(create.starts_with("CREATE TABLE IF NOT EXISTS dev_articles ("));
        assert!(create.contains("article_id VARCHAR(255) PRIMARY KEY"));
        assert!(create.contains("tags TEXT[]"));
        assert!(create.contains("author JSONB NOT NULL"));

        let index = create_author_index_sql("dev_articles");
        assert_eq!(
            index,
            "CREATE INDEX IF NOT EXISTS dev_articles_author_id_idx ON dev_articles (author_id)"
        );
    }
}
