//! Response types returned by resource handlers.
//!
//! A handler either renders a [`View`] (a named template plus an explicit
//! view-model, serialized as JSON) or answers with a [`FlashRedirect`].

use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::flash::{self, Flash, CLEAR_FLASH_COOKIE};

/// Response header echoing the rendered template name.
pub const TEMPLATE_HEADER: &str = "x-template";

/// A rendered view: `{ "template": ..., "notice": ..., "data": T }` with HTTP 200.
#[derive(Debug)]
pub struct View<T> {
    template: &'static str,
    model: T,
    flash: Flash,
}

#[derive(Serialize)]
struct ViewBody<'a, T> {
    template: &'a str,
    notice: Option<&'a str>,
    data: &'a T,
}

impl<T: Serialize> View<T> {
    pub fn new(template: &'static str, model: T) -> Self {
        Self {
            template,
            model,
            flash: Flash::default(),
        }
    }

    /// Display the pending notice and consume it.
    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flash = flash;
        self
    }
}

impl<T: Serialize> IntoResponse for View<T> {
    fn into_response(self) -> Response {
        let body = ViewBody {
            template: self.template,
            notice: self.flash.notice(),
            data: &self.model,
        };
        let mut response = (
            StatusCode::OK,
            [(TEMPLATE_HEADER, self.template)],
            Json(body),
        )
            .into_response();

        if self.flash.notice().is_some() {
            response
                .headers_mut()
                .append(SET_COOKIE, HeaderValue::from_static(CLEAR_FLASH_COOKIE));
        }
        response
    }
}

/// HTTP 302 to `location`, optionally carrying a one-shot notice.
#[derive(Debug)]
pub struct FlashRedirect {
    location: String,
    notice: Option<&'static str>,
}

impl FlashRedirect {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: &'static str) -> Self {
        self.notice = Some(notice);
        self
    }
}

impl IntoResponse for FlashRedirect {
    fn into_response(self) -> Response {
        match self.notice {
            Some(notice) => (
                StatusCode::FOUND,
                [
                    (LOCATION, self.location),
                    (SET_COOKIE, flash::set_cookie(notice)),
                ],
            )
                .into_response(),
            None => (StatusCode::FOUND, [(LOCATION, self.location)]).into_response(),
        }
    }
}
