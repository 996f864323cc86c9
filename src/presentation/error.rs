use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use serde_json::json;
use thiserror::Error;

use crate::domain::error::DomainError;
use crate::presentation::templates::ErrorTemplate;

/// Failure on an HTML route. Answers 500 with the rendered error view.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PageError {
    message: &'static str,
    #[source]
    source: DomainError,
}

impl PageError {
    pub fn new(message: &'static str, source: DomainError) -> Self {
        Self { message, source }
    }
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        let page = ErrorTemplate {
            message: self.message,
            error: self.source.to_string(),
        };
        match page.render() {
            Ok(body) => HttpResponse::build(self.status_code())
                .content_type(ContentType::html())
                .body(body),
            // The error page itself failed to render; fall back to text.
            Err(_) => HttpResponse::build(self.status_code()).body(self.message),
        }
    }
}

/// Failure on a JSON route. Answers 500 with `{message, error}`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    message: &'static str,
    #[source]
    source: DomainError,
}

impl ApiError {
    pub fn new(message: &'static str, source: DomainError) -> Self {
        Self { message, source }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.message,
            "error": self.source.to_string(),
        }))
    }
}

/// Emitted by the admin middleware when Basic credentials are absent or
/// wrong. The challenge header lets a browser prompt for them.
#[derive(Debug, Error)]
#[error("admin credentials required")]
pub struct AdminAuthRequired;

impl ResponseError for AdminAuthRequired {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(("WWW-Authenticate", "Basic realm=\"quotewall admin\""))
            .body("admin credentials required")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_error_renders_the_error_view() {
        let err = PageError::new(
            "Error fetching posts",
            DomainError::Storage("connection refused".into()),
        );
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn api_error_reports_message_and_detail() {
        let err = ApiError::new(
            "Error fetching approved posts",
            DomainError::Storage("connection refused".into()),
        );
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(err.to_string(), "Error fetching approved posts");
    }

    #[test]
    fn auth_challenge_is_unauthorized() {
        let resp = AdminAuthRequired.error_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(resp.headers().contains_key("WWW-Authenticate"));
    }
}
