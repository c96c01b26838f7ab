//! Article row model and DTOs.

use quill_core::article::ArticleParams;
use quill_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `articles` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Article {
    /// The stored fields, in the shape used for overlaying submitted params.
    pub fn params(&self) -> ArticleParams {
        ArticleParams {
            title: Some(self.title.clone()),
            description: self.description.clone(),
        }
    }
}

/// DTO for inserting a validated article.
#[derive(Debug, Clone)]
pub struct CreateArticle {
    pub title: String,
    pub description: Option<String>,
}

impl CreateArticle {
    /// Build an insert from a title that has already passed validation.
    pub fn new(title: String, description: Option<String>) -> Self {
        Self { title, description }
    }
}

/// DTO for updating an article. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl From<ArticleParams> for UpdateArticle {
    fn from(params: ArticleParams) -> Self {
        Self {
            title: params.title,
            description: params.description,
        }
    }
}
