//! Problem documents (`application/problem+json`).
//!
//! Validation failures are flattened under a single `"product"` key: one
//! message per failed rule, in rule order, duplicates kept.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use shopfront_core::FieldError;

pub const PROBLEM_JSON: &str = "application/problem+json";

/// Key every validation message is filed under.
pub const ERRORS_KEY: &str = "product";

const BAD_REQUEST_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.1";
const UNSUPPORTED_MEDIA_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.16";
const INTERNAL_ERROR_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.6.1";

pub fn problem(
    status: StatusCode,
    kind: &'static str,
    title: &'static str,
    messages: Option<Vec<String>>,
) -> Response {
    let mut body = json!({
        "type": kind,
        "title": title,
        "status": status.as_u16(),
    });
    if let Some(messages) = messages {
        body["errors"] = json!({ ERRORS_KEY: messages });
    }

    let mut res = (status, axum::Json(body)).into_response();
    res.headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));
    res
}

pub fn validation_problem(errors: &[FieldError]) -> Response {
    problem(
        StatusCode::BAD_REQUEST,
        BAD_REQUEST_TYPE,
        "One or more validation errors occurred.",
        Some(errors.iter().map(|e| e.message.clone()).collect()),
    )
}

pub fn malformed_body(detail: impl Into<String>) -> Response {
    problem(
        StatusCode::BAD_REQUEST,
        BAD_REQUEST_TYPE,
        "The request body could not be parsed.",
        Some(vec![detail.into()]),
    )
}

pub fn unsupported_media_type() -> Response {
    problem(
        StatusCode::UNSUPPORTED_MEDIA_TYPE,
        UNSUPPORTED_MEDIA_TYPE,
        "Unsupported Media Type",
        None,
    )
}

pub fn unhandled_fault() -> Response {
    problem(
        StatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_ERROR_TYPE,
        "An error occurred while processing your request.",
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_problem_sets_status_and_content_type() {
        let res = validation_problem(&[
            FieldError::new("id", "Id must be a positive number"),
            FieldError::new("stock", "Stock cannot be negative"),
        ]);

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(res.headers()[header::CONTENT_TYPE], PROBLEM_JSON);
    }

    #[test]
    fn fault_problem_has_no_errors_member() {
        let res = unhandled_fault();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.headers()[header::CONTENT_TYPE], PROBLEM_JSON);
    }
}
