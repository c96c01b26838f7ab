//! Route definitions for the article resource.

use axum::routing::get;
use axum::Router;
use quill_core::types::DbId;

use crate::handlers::articles;
use crate::state::AppState;

/// Article routes.
///
/// ```text
/// GET    /articles              index
/// POST   /articles              create
/// GET    /articles/new          new_form
/// GET    /articles/{id}         show
/// PATCH  /articles/{id}         update
/// PUT    /articles/{id}         update
/// DELETE /articles/{id}         destroy
/// GET    /articles/{id}/edit    edit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/articles", get(articles::index).post(articles::create))
        .route("/articles/new", get(articles::new_form))
        .route(
            "/articles/{id}",
            get(articles::show)
                .patch(articles::update)
                .put(articles::update)
                .delete(articles::destroy),
        )
        .route("/articles/{id}/edit", get(articles::edit))
}

/// Path of the article collection.
pub fn articles_path() -> String {
    "/articles".to_string()
}

/// Path of a single article.
pub fn article_path(id: DbId) -> String {
    format!("/articles/{id}")
}
