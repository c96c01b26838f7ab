//! Handlers for the `/articles` resource.
//!
//! Seven conventional actions: index, show, new, create, edit, update and
//! destroy. Reads render a view; successful writes redirect with a notice;
//! rejected writes re-render the originating form with the submitted values.
//! Every rendered view, form re-renders included, consumes a pending notice.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use quill_core::article::{
    self, ArticleParams, ENTITY, NOTICE_CREATED, NOTICE_DESTROYED, NOTICE_UPDATED,
};
use quill_core::error::CoreError;
use quill_core::types::DbId;
use quill_db::models::article::{Article, CreateArticle, UpdateArticle};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::flash::Flash;
use crate::response::{FlashRedirect, View};
use crate::routes::articles::{article_path, articles_path};
use crate::state::AppState;
use crate::views::{
    ArticleForm, FormView, IndexView, ShowView, EDIT_TEMPLATE, INDEX_TEMPLATE, NEW_TEMPLATE,
    SHOW_TEMPLATE,
};

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// Fetch an article by id or return 404.
async fn ensure_article(state: &AppState, id: DbId) -> AppResult<Article> {
    state.store.find_by_id(id).await?.ok_or_else(|| not_found(id))
}

/// Apply the allow-list to a submitted body.
fn permit_params(body: &Value) -> AppResult<ArticleParams> {
    let ignored = article::unpermitted_keys(body);
    if !ignored.is_empty() {
        tracing::debug!(keys = ?ignored, "Unpermitted article parameters ignored");
    }
    Ok(article::permit(body)?)
}

/* --------------------------------------------------------------------------
Reads
-------------------------------------------------------------------------- */

/// GET /articles
pub async fn index(State(state): State<AppState>, flash: Flash) -> AppResult<View<IndexView>> {
    let articles = state.store.list().await?;
    Ok(View::new(INDEX_TEMPLATE, IndexView { articles }).with_flash(flash))
}

/// GET /articles/{id}
///
/// A missing article renders the show view with `article: null`.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    flash: Flash,
) -> AppResult<View<ShowView>> {
    let article = state.store.find_by_id(id).await?;
    if article.is_none() {
        tracing::debug!(article_id = id, "Article not found, rendering empty show view");
    }
    Ok(View::new(SHOW_TEMPLATE, ShowView { article }).with_flash(flash))
}

/// GET /articles/new
pub async fn new_form(flash: Flash) -> View<FormView> {
    View::new(NEW_TEMPLATE, FormView::default()).with_flash(flash)
}

/// GET /articles/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    flash: Flash,
) -> AppResult<View<FormView>> {
    let article = ensure_article(&state, id).await?;
    let form = FormView::clean(ArticleForm::from(&article));
    Ok(View::new(EDIT_TEMPLATE, form).with_flash(flash))
}

/* --------------------------------------------------------------------------
Writes
-------------------------------------------------------------------------- */

/// POST /articles
///
/// Body: `{"article": {"title": ..., "description": ...}}`.
pub async fn create(
    State(state): State<AppState>,
    flash: Flash,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    let params = permit_params(&body)?;

    let errors = article::validate(&params);
    let (title, description) = match params {
        ArticleParams {
            title: Some(title),
            description,
        } if errors.is_empty() => (title, description),
        params => {
            tracing::debug!(?errors, "Article rejected by validation");
            let form = FormView {
                article: ArticleForm::unsaved(params),
                errors,
            };
            return Ok(View::new(NEW_TEMPLATE, form)
                .with_flash(flash)
                .into_response());
        }
    };

    let article = state
        .store
        .create(&CreateArticle::new(title, description))
        .await?;

    tracing::info!(article_id = article.id, title = %article.title, "Article created");

    Ok(FlashRedirect::to(article_path(article.id))
        .with_notice(NOTICE_CREATED)
        .into_response())
}

/// PATCH|PUT /articles/{id}
///
/// Fields absent from the body keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    flash: Flash,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    let existing = ensure_article(&state, id).await?;
    let params = permit_params(&body)?;

    let candidate = params.clone().overlay_on(existing.params());
    let errors = article::validate(&candidate);
    if !errors.is_empty() {
        tracing::debug!(article_id = id, ?errors, "Article update rejected by validation");
        let form = FormView {
            article: ArticleForm::with_id(Some(id), candidate),
            errors,
        };
        return Ok(View::new(EDIT_TEMPLATE, form)
            .with_flash(flash)
            .into_response());
    }

    let article = state
        .store
        .update(id, &UpdateArticle::from(params))
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(article_id = article.id, "Article updated");

    Ok(FlashRedirect::to(article_path(article.id))
        .with_notice(NOTICE_UPDATED)
        .into_response())
}

/// DELETE /articles/{id}
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<FlashRedirect> {
    if !state.store.delete(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(article_id = id, "Article destroyed");

    Ok(FlashRedirect::to(articles_path()).with_notice(NOTICE_DESTROYED))
}
