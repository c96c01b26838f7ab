//! The [`ArticleStore`] seam between request handlers and persistence.
//!
//! Handlers hold an `Arc<dyn ArticleStore>` so the same router runs against
//! PostgreSQL in production and [`crate::MemoryArticleStore`] elsewhere.

use async_trait::async_trait;
use quill_core::types::DbId;

use crate::models::article::{Article, CreateArticle, UpdateArticle};
use crate::repositories::ArticleRepo;
use crate::DbPool;

/// Create/find/update/delete access to articles by identifier.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// All articles, ordered by id ascending.
    async fn list(&self) -> Result<Vec<Article>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Article>, sqlx::Error>;

    /// Persist a new article; the store assigns its id and timestamps.
    async fn create(&self, input: &CreateArticle) -> Result<Article, sqlx::Error>;

    /// Apply the supplied fields. `None` when the article does not exist.
    async fn update(
        &self,
        id: DbId,
        input: &UpdateArticle,
    ) -> Result<Option<Article>, sqlx::Error>;

    /// Remove an article. `false` when it did not exist.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Whether the backing store is reachable.
    async fn is_healthy(&self) -> bool;
}

/// [`ArticleStore`] backed by the `articles` table.
#[derive(Clone)]
pub struct PgArticleStore {
    pool: DbPool,
}

impl PgArticleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn list(&self) -> Result<Vec<Article>, sqlx::Error> {
        ArticleRepo::list(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        ArticleRepo::find_by_id(&self.pool, id).await
    }

    async fn create(&self, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        ArticleRepo::create(&self.pool, input).await
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        ArticleRepo::update(&self.pool, id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        ArticleRepo::delete(&self.pool, id).await
    }

    async fn is_healthy(&self) -> bool {
        match crate::health_check(&self.pool).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Database health check failed");
                false
            }
        }
    }
}
