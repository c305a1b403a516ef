// src/infrastructure/repositories/redis_article.rs
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;

use super::{
    documents::ArticleDocument,
    error::{map_pool, map_redis},
};
use crate::config::is_valid_identifier;
use crate::domain::article::{Article, ArticleChanges, ArticleId, ArticleRepository, AuthorId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::retry::{RetryPolicy, retry_with_delay};

/// Key layout under a configurable prefix:
/// `<prefix>:article:<id>` holds the JSON document, `<prefix>:ids` the set
/// of all ids and `<prefix>:author:<author_id>` the ids per author.
#[derive(Debug, Clone)]
struct Keys {
    prefix: String,
}

impl Keys {
    fn article(&self, id: &str) -> String {
        format!("{}:article:{id}", self.prefix)
    }

    fn ids(&self) -> String {
        format!("{}:ids", self.prefix)
    }

    fn author(&self, author_id: &str) -> String {
        format!("{}{author_id}", self.author_prefix())
    }

    /// Scripts derive author set keys from the stored document, so they get
    /// the prefix rather than a finished key.
    fn author_prefix(&self) -> String {
        format!("{}:author:", self.prefix)
    }

    fn article_prefix(&self) -> String {
        format!("{}:article:", self.prefix)
    }
}

// Every write touches the document and its index sets in one script so a
// concurrent writer never observes, or leaves behind, a half-indexed article.

// KEYS: article, ids, author set. ARGV: json, id.
const CREATE_SCRIPT: &str = r"
    if not redis.call('SET', KEYS[1], ARGV[1], 'NX') then
        return 0
    end
    redis.call('SADD', KEYS[2], ARGV[2])
    redis.call('SADD', KEYS[3], ARGV[2])
    return 1
";

// KEYS: article, new author set. ARGV: json, id, author key prefix.
// Returns 0 without writing when the article no longer exists.
const REPLACE_SCRIPT: &str = r"
    local current = redis.call('GET', KEYS[1])
    if not current then
        return 0
    end
    local author = cjson.decode(current)['author']
    if type(author) == 'table' and type(author['author_id']) == 'string' then
        redis.call('SREM', ARGV[3] .. author['author_id'], ARGV[2])
    end
    redis.call('SET', KEYS[1], ARGV[1])
    redis.call('SADD', KEYS[2], ARGV[2])
    return 1
";

// KEYS: article, ids. ARGV: id, author key prefix.
const DELETE_SCRIPT: &str = r"
    local current = redis.call('GET', KEYS[1])
    if not current then
        return 0
    end
    local author = cjson.decode(current)['author']
    if type(author) == 'table' and type(author['author_id']) == 'string' then
        redis.call('SREM', ARGV[2] .. author['author_id'], ARGV[1])
    end
    redis.call('DEL', KEYS[1])
    redis.call('SREM', KEYS[2], ARGV[1])
    return 1
";

// KEYS: ids. ARGV: article key prefix, author key prefix.
// Returns the number of ids removed; 0 means the store was already empty.
const DELETE_ALL_SCRIPT: &str = r"
    local ids = redis.call('SMEMBERS', KEYS[1])
    if #ids == 0 then
        return 0
    end
    for _, id in ipairs(ids) do
        local current = redis.call('GET', ARGV[1] .. id)
        if current then
            local author = cjson.decode(current)['author']
            if type(author) == 'table' and type(author['author_id']) == 'string' then
                redis.call('DEL', ARGV[2] .. author['author_id'])
            end
            redis.call('DEL', ARGV[1] .. id)
        end
    end
    redis.call('DEL', KEYS[1])
    return #ids
";

#[derive(Clone)]
pub struct RedisArticleRepository {
    pool: Pool,
    keys: Keys,
}

impl RedisArticleRepository {
    /// Builds the pool and waits for the server to answer `PING`.
    pub async fn connect(url: &str, prefix: &str, policy: RetryPolicy) -> DomainResult<Self> {
        if !is_valid_identifier(prefix) {
            return Err(DomainError::Validation(format!(
                "`{prefix}` is not a valid key prefix"
            )));
        }

        let pool = DeadpoolConfig::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| DomainError::Storage(format!("redis pool: {err}")))?;

        let repo = Self {
            pool,
            keys: Keys {
                prefix: prefix.to_owned(),
            },
        };
        retry_with_delay(policy, "redis", || repo.ping()).await?;
        tracing::info!(prefix, "redis article store ready");
        Ok(repo)
    }

    async fn ping(&self) -> DomainResult<()> {
        let mut conn = self.conn().await?;
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(map_redis)?;
        Ok(())
    }

    async fn conn(&self) -> DomainResult<Connection> {
        self.pool.get().await.map_err(map_pool)
    }

    async fn load(&self, conn: &mut Connection, id: &ArticleId) -> DomainResult<Article> {
        let raw: Option<String> = conn
            .get(self.keys.article(id.as_str()))
            .await
            .map_err(map_redis)?;
        let raw = raw.ok_or_else(|| not_found(id))?;
        ArticleDocument::from_json(&raw)?.try_into()
    }

    /// Fetches documents for `ids` in one round trip. Ids whose document
    /// vanished in the meantime are skipped.
    async fn load_many(&self, conn: &mut Connection, ids: &[String]) -> DomainResult<Vec<Article>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut pipe = redis::pipe();
        for id in ids {
            pipe.get(self.keys.article(id));
        }
        let docs: Vec<Option<String>> = pipe.query_async(conn).await.map_err(map_redis)?;

        docs.into_iter()
            .flatten()
            .map(|raw| ArticleDocument::from_json(&raw).and_then(Article::try_from))
            .collect()
    }

    async fn all_ids(&self, conn: &mut Connection) -> DomainResult<Vec<String>> {
        conn.smembers(self.keys.ids()).await.map_err(map_redis)
    }

    /// Overwrites the stored document of `article` and moves its id to the
    /// current author's set. Fails with `NotFound` instead of recreating a
    /// document that was deleted after it was read.
    async fn replace(&self, conn: &mut Connection, article: &Article) -> DomainResult<()> {
        let id = article.id.as_str();
        let json = ArticleDocument::from(article).to_json()?;

        let replaced: i64 = redis::cmd("EVAL")
            .arg(REPLACE_SCRIPT)
            .arg(2)
            .arg(self.keys.article(id))
            .arg(self.keys.author(article.author_id().as_str()))
            .arg(json)
            .arg(id)
            .arg(self.keys.author_prefix())
            .query_async(conn)
            .await
            .map_err(map_redis)?;

        if replaced == 0 {
            return Err(not_found(&article.id));
        }
        Ok(())
    }
}

fn not_found(id: &ArticleId) -> DomainError {
    DomainError::NotFound(format!("article {id} not found"))
}

#[async_trait]
impl ArticleRepository for RedisArticleRepository {
    async fn create(&self, article: Article) -> DomainResult<Article> {
        let mut conn = self.conn().await?;
        let id = article.id.as_str();
        let json = ArticleDocument::from(&article).to_json()?;

        let created: i64 = redis::cmd("EVAL")
            .arg(CREATE_SCRIPT)
            .arg(3)
            .arg(self.keys.article(id))
            .arg(self.keys.ids())
            .arg(self.keys.author(article.author_id().as_str()))
            .arg(json)
            .arg(id)
            .query_async(&mut conn)
            .await
            .map_err(map_redis)?;

        if created == 0 {
            return Err(DomainError::Storage("article already exists".into()));
        }
        Ok(article)
    }

    async fn get_by_id(&self, id: &ArticleId) -> DomainResult<Article> {
        let mut conn = self.conn().await?;
        self.load(&mut conn, id).await
    }

    async fn get_by_author(&self, author_id: &AuthorId) -> DomainResult<Vec<Article>> {
        let mut conn = self.conn().await?;
        let ids: Vec<String> = conn
            .smembers(self.keys.author(author_id.as_str()))
            .await
            .map_err(map_redis)?;
        self.load_many(&mut conn, &ids).await
    }

    async fn get_by_tag(&self, tag: &str) -> DomainResult<Vec<Article>> {
        let mut articles = self.get_all().await?;
        articles.retain(|a| a.tags.iter().any(|t| t == tag));
        Ok(articles)
    }

    async fn get_all(&self) -> DomainResult<Vec<Article>> {
        let mut conn = self.conn().await?;
        let ids = self.all_ids(&mut conn).await?;
        self.load_many(&mut conn, &ids).await
    }

    async fn update(&self, id: &ArticleId, changes: ArticleChanges) -> DomainResult<Article> {
        let mut conn = self.conn().await?;
        let mut article = self.load(&mut conn, id).await?;
        article.apply(changes);
        self.replace(&mut conn, &article).await?;
        Ok(article)
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<()> {
        let mut conn = self.conn().await?;

        let deleted: i64 = redis::cmd("EVAL")
            .arg(DELETE_SCRIPT)
            .arg(2)
            .arg(self.keys.article(id.as_str()))
            .arg(self.keys.ids())
            .arg(id.as_str())
            .arg(self.keys.author_prefix())
            .query_async(&mut conn)
            .await
            .map_err(map_redis)?;

        if deleted == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn delete_all(&self) -> DomainResult<()> {
        let mut conn = self.conn().await?;

        let removed: i64 = redis::cmd("EVAL")
            .arg(DELETE_ALL_SCRIPT)
            .arg(1)
            .arg(self.keys.ids())
            .arg(self.keys.article_prefix())
            .arg(self.keys.author_prefix())
            .query_async(&mut conn)
            .await
            .map_err(map_redis)?;

        if removed == 0 {
            return Err(DomainError::EmptyCollection(
                "there are no articles to delete".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleBody, ArticleTitle, Author};
    use chrono::Utc;

    #[test]
    fn keys_are_namespaced_by_prefix() {
        let keys = Keys {
            prefix: "dev_articles".into(),
        };
        assert_eq!(keys.article("42"), "dev_articles:article:42");
        assert_eq!(keys.ids(), "dev_articles:ids");
        assert_eq!(keys.author("u1"), "dev_articles:author:u1");
        assert_eq!(keys.author_prefix(), "dev_articles:author:");
        assert_eq!(keys.article_prefix(), "dev_articles:article:");
    }

    // Needs a live server; skipped unless TEST_REDIS_URL is set.
    #[tokio::test]
    async fn replacing_a_vanished_article_does_not_recreate_it() {
        let Ok(url) = std::env::var("TEST_REDIS_URL") else {
            return;
        };
        let prefix = format!("unit_articles_{}", uuid::Uuid::new_v4().simple());
        let repo = RedisArticleRepository::connect(&url, &prefix, RetryPolicy::no_retry())
            .await
            .unwrap();

        let now = Utc::now();
        let article = Article {
            id: ArticleId::new("gone").unwrap(),
            title: ArticleTitle::new("t").unwrap(),
            subtitle: String::new(),
            introduction: String::new(),
            body: ArticleBody::new("b").unwrap(),
            tags: Vec::new(),
            publish_date: now,
            updated_date: now,
            author: Author {
                author_id: AuthorId::new("u1"),
                ..Author::default()
            },
            likes: 0,
            dislikes: 0,
        };

        // Same state an update sees when a delete lands between its read and
        // its write.
        let mut conn = repo.conn().await.unwrap();
        let err = repo.replace(&mut conn, &article).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));

        assert!(matches!(
            repo.get_by_id(&article.id).await,
            Err(DomainError::NotFound(_))
        ));
        assert!(
            repo.get_by_author(&AuthorId::new("u1"))
                .await
                .unwrap()
                .is_empty()
        );
    }
}
