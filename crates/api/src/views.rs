//! View-models handed to the render step.
//!
//! Each template receives one explicit, serializable struct instead of
//! whatever state a handler happens to hold.

use quill_core::article::{ArticleParams, FieldError};
use quill_core::types::DbId;
use quill_db::models::article::Article;
use serde::Serialize;

pub const INDEX_TEMPLATE: &str = "articles/index";
pub const SHOW_TEMPLATE: &str = "articles/show";
pub const NEW_TEMPLATE: &str = "articles/new";
pub const EDIT_TEMPLATE: &str = "articles/edit";

/// `articles/index`: every article.
#[derive(Debug, Serialize)]
pub struct IndexView {
    pub articles: Vec<Article>,
}

/// `articles/show`: the requested article, or `null` when it does not exist.
#[derive(Debug, Serialize)]
pub struct ShowView {
    pub article: Option<Article>,
}

/// Form-backing instance for `articles/new` and `articles/edit`.
///
/// `id` is `None` for an unsaved article.
#[derive(Debug, Default, Serialize)]
pub struct ArticleForm {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl ArticleForm {
    /// Unsaved instance echoing submitted values.
    pub fn unsaved(params: ArticleParams) -> Self {
        Self::with_id(None, params)
    }

    pub fn with_id(id: Option<DbId>, params: ArticleParams) -> Self {
        Self {
            id,
            title: params.title,
            description: params.description,
        }
    }
}

impl From<&Article> for ArticleForm {
    fn from(article: &Article) -> Self {
        Self::with_id(Some(article.id), article.params())
    }
}

/// `articles/new` and `articles/edit`: the form instance plus rejected fields.
#[derive(Debug, Default, Serialize)]
pub struct FormView {
    pub article: ArticleForm,
    pub errors: Vec<FieldError>,
}

impl FormView {
    /// A form with no validation errors.
    pub fn clean(article: ArticleForm) -> Self {
        Self {
            article,
            errors: Vec::new(),
        }
    }
}
