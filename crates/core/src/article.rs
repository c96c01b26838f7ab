//! Article input rules: the mass-assignment allow-list, field validation,
//! and the notices shown after successful mutations.
//!
//! Lives in `core` (no I/O) so the HTTP layer and any future tooling apply
//! exactly the same rules before anything reaches the store.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in not-found errors.
pub const ENTITY: &str = "Article";

/// Key under which submitted article fields are nested.
pub const PARAM_KEY: &str = "article";

pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESCRIPTION: &str = "description";

/// The only fields a client may assign through create or update.
pub const PERMITTED_FIELDS: &[&str] = &[FIELD_TITLE, FIELD_DESCRIPTION];

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 255;

pub const NOTICE_CREATED: &str = "Article was successfully created.";
pub const NOTICE_UPDATED: &str = "Article was successfully updated.";
pub const NOTICE_DESTROYED: &str = "Article was successfully destroyed.";

// ---------------------------------------------------------------------------
// Permitted params
// ---------------------------------------------------------------------------

/// Article fields that survived the allow-list.
///
/// `None` means the client did not supply the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleParams {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl ArticleParams {
    /// Fill every field the client did not supply from `base`.
    pub fn overlay_on(self, base: ArticleParams) -> ArticleParams {
        ArticleParams {
            title: self.title.or(base.title),
            description: self.description.or(base.description),
        }
    }
}

/// Extract the permitted article fields from a request body.
///
/// The body must carry a non-empty object under [`PARAM_KEY`]. Keys outside
/// [`PERMITTED_FIELDS`] are dropped. Strings are taken as given, numbers and
/// booleans are converted to text, and `null`, arrays or objects are treated
/// as absent.
pub fn permit(body: &Value) -> Result<ArticleParams, CoreError> {
    let fields = nested_fields(body)?;
    Ok(ArticleParams {
        title: fields.get(FIELD_TITLE).and_then(scalar_to_string),
        description: fields.get(FIELD_DESCRIPTION).and_then(scalar_to_string),
    })
}

/// Keys under [`PARAM_KEY`] that the allow-list drops, sorted.
///
/// Returns an empty list when the nested object is missing.
pub fn unpermitted_keys(body: &Value) -> Vec<String> {
    let Ok(fields) = nested_fields(body) else {
        return Vec::new();
    };
    let mut keys: Vec<String> = fields
        .keys()
        .filter(|k| !PERMITTED_FIELDS.contains(&k.as_str()))
        .cloned()
        .collect();
    keys.sort();
    keys
}

fn nested_fields(body: &Value) -> Result<&Map<String, Value>, CoreError> {
    body.get(PARAM_KEY)
        .and_then(Value::as_object)
        .filter(|m| !m.is_empty())
        .ok_or(CoreError::MissingParameter(PARAM_KEY))
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A single rejected field with a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a candidate article. An empty result means it may be persisted.
///
/// Rules: the title is required and must not be blank, and is at most
/// [`MAX_TITLE_LEN`] characters. The description is unconstrained.
pub fn validate(params: &ArticleParams) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match params.title.as_deref() {
        Some(title) if !title.trim().is_empty() => {
            if title.chars().count() > MAX_TITLE_LEN {
                errors.push(FieldError::new(
                    FIELD_TITLE,
                    format!("Title is too long (maximum is {MAX_TITLE_LEN} characters)"),
                ));
            }
        }
        _ => errors.push(FieldError::new(FIELD_TITLE, "Title can't be blank")),
    }

    errors
}
