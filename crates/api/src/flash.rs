//! One-shot notices carried from a redirect to the next rendered view.
//!
//! A redirect sets the `quill_flash` cookie with the percent-encoded notice.
//! The [`Flash`] extractor reads it on the following request, and the view
//! that displays it clears the cookie so the notice is shown once.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

/// Name of the cookie holding a pending notice.
pub const FLASH_COOKIE: &str = "quill_flash";

/// `Set-Cookie` value that expires the flash cookie.
pub const CLEAR_FLASH_COOKIE: &str = "quill_flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

/// The notice pending for this request, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    notice: Option<String>,
}

impl Flash {
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let notice = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|header| header.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .and_then(|(_, value)| decode_notice(value));

        Ok(Flash { notice })
    }
}

/// `Set-Cookie` value carrying `notice` to the next request.
pub fn set_cookie(notice: &str) -> String {
    format!(
        "{FLASH_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
        utf8_percent_encode(notice, NON_ALPHANUMERIC)
    )
}

/// Decode a cookie value. Empty or non-UTF-8 values carry no notice.
pub fn decode_notice(value: &str) -> Option<String> {
    percent_decode_str(value)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
        .filter(|notice| !notice.is_empty())
}

/// Extract the notice from a `Set-Cookie` header value, if it is the flash cookie.
pub fn notice_from_set_cookie(header: &str) -> Option<String> {
    let pair = header.split(';').next()?;
    let (name, value) = pair.trim().split_once('=')?;
    if name != FLASH_COOKIE {
        return None;
    }
    decode_notice(value)
}
