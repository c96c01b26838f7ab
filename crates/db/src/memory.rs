//! In-process [`ArticleStore`] for local runs without PostgreSQL and for
//! handler tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use quill_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::article::{Article, CreateArticle, UpdateArticle};
use crate::store::ArticleStore;

struct Inner {
    rows: BTreeMap<DbId, Article>,
    /// Next id to hand out; ids are never reused, matching BIGSERIAL.
    next_id: DbId,
}

/// Articles kept in a `BTreeMap` behind a tokio `RwLock`.
pub struct MemoryArticleStore {
    inner: RwLock<Inner>,
}

impl MemoryArticleStore {
    /// Create an empty store whose first id is 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored articles.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleStore for MemoryArticleStore {
    async fn list(&self) -> Result<Vec<Article>, sqlx::Error> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let now = chrono::Utc::now();
        let article = Article {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(id, article.clone());
        Ok(article)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        let mut inner = self.inner.write().await;
        let Some(article) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(title) = &input.title {
            article.title = title.clone();
        }
        if let Some(description) = &input.description {
            article.description = Some(description.clone());
        }
        article.updated_at = chrono::Utc::now();
        Ok(Some(article.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn is_healthy(&self) -> bool {
        true
    }
}
