// src/infrastructure/repositories/postgres_article.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, types::Json};

use super::{documents::AuthorDocument, error::map_sqlx};
use crate::config::is_valid_identifier;
use crate::domain::article::{
    Article, ArticleBody, ArticleChanges, ArticleId, ArticleRepository, ArticleTitle, AuthorId,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::database::ensure_schema;

const COLUMNS: &str = "article_id, title, subtitle, introduction, body, tags, publish_date, \
                       updated_date, author, likes, dislikes";

/// Statements are built once per repository because the table name is
/// configuration, not a bind parameter.
#[derive(Debug, Clone)]
struct Statements {
    insert: String,
    select_by_id: String,
    select_by_author: String,
    select_by_tag: String,
    select_all: String,
    update: String,
    delete: String,
    count: String,
    delete_all: String,
}

impl Statements {
    fn for_table(table: &str) -> Self {
        Self {
            insert: format!(
                "INSERT INTO {table} (article_id, title, subtitle, introduction, body, tags, \
                 publish_date, updated_date, author, author_id, likes, dislikes)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                 RETURNING {COLUMNS}"
            ),
            select_by_id: format!("SELECT {COLUMNS} FROM {table} WHERE article_id = $1"),
            select_by_author: format!("SELECT {COLUMNS} FROM {table} WHERE author_id = $1"),
            select_by_tag: format!("SELECT {COLUMNS} FROM {table} WHERE $1 = ANY(tags)"),
            select_all: format!("SELECT {COLUMNS} FROM {table}"),
            update: format!(
                "UPDATE {table} SET title = $2, subtitle = $3, introduction = $4, body = $5, \
                 tags = $6, updated_date = $7, author = $8, author_id = $9, likes = $10, \
                 dislikes = $11
                 WHERE article_id = $1
                 RETURNING {COLUMNS}"
            ),
            delete: format!("DELETE FROM {table} WHERE article_id = $1"),
            count: format!("SELECT COUNT(*) FROM {table}"),
            delete_all: format!("DELETE FROM {table}"),
        }
    }
}

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
    sql: Statements,
}

impl PostgresArticleRepository {
    /// Validates the table name and creates the table and its author index
    /// when missing.
    pub async fn bootstrap(pool: PgPool, table: &str) -> DomainResult<Self> {
        if !is_valid_identifier(table) {
            return Err(DomainError::Validation(format!(
                "`{table}` is not a valid table name"
            )));
        }
        ensure_schema(&pool, table).await.map_err(map_sqlx)?;
        tracing::info!(table, "article table ready");

        Ok(Self {
            pool,
            sql: Statements::for_table(table),
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: String,
    title: String,
    subtitle: Option<String>,
    introduction: Option<String>,
    body: String,
    tags: Option<Vec<String>>,
    publish_date: DateTime<Utc>,
    updated_date: DateTime<Utc>,
    author: Json<AuthorDocument>,
    likes: Option<i32>,
    dislikes: Option<i32>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.article_id)?,
            title: ArticleTitle::new(row.title)?,
            subtitle: row.subtitle.unwrap_or_default(),
            introduction: row.introduction.unwrap_or_default(),
            body: ArticleBody::new(row.body)?,
            tags: row.tags.unwrap_or_default(),
            publish_date: row.publish_date,
            updated_date: row.updated_date,
            author: row.author.0.into(),
            likes: row.likes.unwrap_or_default(),
            dislikes: row.dislikes.unwrap_or_default(),
        })
    }
}

fn collect(rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    rows.into_iter().map(Article::try_from).collect()
}

fn not_found(id: &ArticleId) -> DomainError {
    DomainError::NotFound(format!("article {id} not found"))
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn create(&self, article: Article) -> DomainResult<Article> {
        let author = AuthorDocument::from(&article.author);
        let author_id = author.author_id.clone();
        let Article {
            id,
            title,
            subtitle,
            introduction,
            body,
            tags,
            publish_date,
            updated_date,
            likes,
            dislikes,
            ..
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&self.sql.insert)
            .bind(id.into_inner())
            .bind(title.into_inner())
            .bind(subtitle)
            .bind(introduction)
            .bind(body.into_inner())
            .bind(tags)
            .bind(publish_date)
            .bind(updated_date)
            .bind(Json(author))
            .bind(author_id)
            .bind(likes)
            .bind(dislikes)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn get_by_id(&self, id: &ArticleId) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(&self.sql.select_by_id)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from)
            .transpose()?
            .ok_or_else(|| not_found(id))
    }

    async fn get_by_author(&self, author_id: &AuthorId) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&self.sql.select_by_author)
            .bind(author_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        collect(rows)
    }

    async fn get_by_tag(&self, tag: &str) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&self.sql.select_by_tag)
            .bind(tag)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        collect(rows)
    }

    async fn get_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&self.sql.select_all)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        collect(rows)
    }

    async fn update(&self, id: &ArticleId, changes: ArticleChanges) -> DomainResult<Article> {
        let mut article = self.get_by_id(id).await?;
        article.apply(changes);

        let author = AuthorDocument::from(&article.author);
        let author_id = author.author_id.clone();

        let row = sqlx::query_as::<_, ArticleRow>(&self.sql.update)
            .bind(id.as_str())
            .bind(article.title.as_str())
            .bind(&article.subtitle)
            .bind(&article.introduction)
            .bind(article.body.as_str())
            .bind(&article.tags)
            .bind(article.updated_date)
            .bind(Json(author))
            .bind(author_id)
            .bind(article.likes)
            .bind(article.dislikes)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        // Deleted between the read and the write.
        row.map(Article::try_from)
            .transpose()?
            .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<()> {
        let result = sqlx::query(&self.sql.delete)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn delete_all(&self) -> DomainResult<()> {
        let count: i64 = sqlx::query_scalar(&self.sql.count)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if count == 0 {
            return Err(DomainError::EmptyCollection(
                "there are no articles to delete".into(),
            ));
        }

        sqlx::query(&self.sql.delete_all)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_interpolate_the_configured_table() {
        let sql = Statements::for_table("test_articles");
        assert_eq!(
            sql.select_by_tag,
            format!("SELECT {COLUMNS} FROM test_articles WHERE $1 = ANY(tags)")
        );
        assert!(sql.insert.starts_with("INSERT INTO test_articles ("));
        assert!(sql.update.contains("WHERE article_id = $1"));
        assert!(!sql.update.contains("publish_date ="));
        assert_eq!(sql.count, "SELECT COUNT(*) FROM test_articles");
    }
}
