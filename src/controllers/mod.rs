//! Framework-neutral request handlers.
//!
//! A controller method takes the raw pieces of an HTTP request (path id,
//! query values, JSON body) and returns a [`ControllerResponse`]. Binding the
//! methods to routes is left to whichever HTTP server hosts them.

pub mod car_controller;
pub mod product_controller;

use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::responses::{ErrorResponse, SuccessResponse};
use crate::services::ServiceError;

/// Status code and JSON body produced by a handler.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ControllerResponse {
    /// Success envelope without a payload.
    pub fn message(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            body: serde_json::to_value(SuccessResponse::new(message)).unwrap_or_default(),
        }
    }

    pub fn error(status: StatusCode, message: &str, error: Option<String>) -> Self {
        Self {
            status,
            body: serde_json::to_value(ErrorResponse::new(message, error)).unwrap_or_default(),
        }
    }
}

type HandlerResult = Result<ControllerResponse, ControllerResponse>;

/// Collapse a handler body written with `?` into its response.
fn respond<F>(handler: F) -> ControllerResponse
where
    F: FnOnce() -> HandlerResult,
{
    handler().unwrap_or_else(|failure| failure)
}

/// Success envelope carrying `data`.
fn success<T: Serialize>(status: StatusCode, message: &str, data: &T) -> HandlerResult {
    let data = serde_json::to_value(data).map_err(|err| {
        ControllerResponse::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to encode response",
            Some(err.to_string()),
        )
    })?;
    Ok(ControllerResponse {
        status,
        body: serde_json::to_value(SuccessResponse::with_data(message, data)).unwrap_or_default(),
    })
}

/// Parse a path id, answering 400 "Invalid <entity> ID" when it is not a number.
pub fn parse_id(raw: &str, entity: &str) -> Result<u32, ControllerResponse> {
    raw.trim().parse::<u32>().map_err(|err| {
        ControllerResponse::error(
            StatusCode::BAD_REQUEST,
            &format!("Invalid {entity} ID"),
            Some(err.to_string()),
        )
    })
}

/// Decode a JSON body and run its validation rules.
pub fn bind_and_validate<T>(body: &str) -> Result<T, ControllerResponse>
where
    T: DeserializeOwned + Validate,
{
    let request: T = serde_json::from_str(body).map_err(|err| {
        ControllerResponse::error(
            StatusCode::BAD_REQUEST,
            "Invalid JSON format",
            Some(err.to_string()),
        )
    })?;

    if let Err(errors) = request.validate() {
        let messages = validation_messages(&errors);
        return Err(ControllerResponse::error(
            StatusCode::BAD_REQUEST,
            "Validation failed",
            Some(format!("Invalid input data: {}", messages.join(", "))),
        ));
    }
    Ok(request)
}

/// Readable messages for every failed rule, ordered by field name.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut messages = Vec::new();
    for (field, failures) in fields {
        for failure in failures.iter() {
            let min = failure.params.get("min");
            let max = failure.params.get("max");
            let message = match (failure.code.as_ref(), min, max) {
                ("length", Some(min), Some(max)) => {
                    format!("{field} must be between {min} and {max} characters long")
                }
                ("length", Some(min), None) => {
                    format!("{field} must be at least {min} characters long")
                }
                ("length", None, Some(max)) => {
                    format!("{field} must be at most {max} characters long")
                }
                ("range", Some(min), Some(max)) => format!("{field} must be between {min} and {max}"),
                ("range", Some(min), None) => format!("{field} must be at least {min}"),
                ("range", None, Some(max)) => format!("{field} must be at most {max}"),
                _ => format!("{field} is invalid"),
            };
            messages.push(message);
        }
    }
    messages
}

/// Map a service failure onto a status code.
///
/// `name` is the capitalised entity name used in the 404 message and
/// `failure` the message used for anything unexpected.
fn service_failure(err: ServiceError, name: &str, failure: &str) -> ControllerResponse {
    match err {
        ServiceError::NotFound { .. } => ControllerResponse::error(
            StatusCode::NOT_FOUND,
            &format!("{name} not found"),
            Some(err.to_string()),
        ),
        ServiceError::InvalidId { entity } => ControllerResponse::error(
            StatusCode::BAD_REQUEST,
            &format!("Invalid {entity} ID"),
            Some(err.to_string()),
        ),
        ServiceError::Store(_) => ControllerResponse::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            failure,
            Some(err.to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::requests::product::CreateProductRequest;
    use crate::store::StoreError;
    use serde_json::json;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12", "product").unwrap(), 12);
        let failure = parse_id("abc", "product").unwrap_err();
        assert_eq!(failure.status, StatusCode::BAD_REQUEST);
        assert_eq!(failure.body["message"], "Invalid product ID");
        assert_eq!(failure.body["success"], false);
        assert!(parse_id("-1", "car").is_err());
    }

    #[test]
    fn test_bind_rejects_malformed_json() {
        let failure = bind_and_validate::<CreateProductRequest>("{not json").unwrap_err();
        assert_eq!(failure.status, StatusCode::BAD_REQUEST);
        assert_eq!(failure.body["message"], "Invalid JSON format");
    }

    #[test]
    fn test_bind_reports_every_failed_rule() {
        let body = json!({ "name": "ab", "description": "short" }).to_string();
        let failure = bind_and_validate::<CreateProductRequest>(&body).unwrap_err();
        assert_eq!(failure.body["message"], "Validation failed");
        assert_eq!(
            failure.body["error"],
            "Invalid input data: description must be between 10 and 500 characters long, \
             name must be between 3 and 100 characters long"
        );
    }

    #[test]
    fn test_bind_accepts_valid_body() {
        let body = json!({ "name": "Widget", "description": "A useful widget" }).to_string();
        let request = bind_and_validate::<CreateProductRequest>(&body).unwrap();
        assert_eq!(request.name, "Widget");
    }

    #[test]
    fn test_service_failure_statuses() {
        let not_found = service_failure(ServiceError::NotFound { entity: "car" }, "Car", "x");
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.body["message"], "Car not found");

        let invalid = service_failure(ServiceError::InvalidId { entity: "car" }, "Car", "x");
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.body["message"], "Invalid car ID");

        let broken = service_failure(
            ServiceError::Store(StoreError::Poisoned("cars")),
            "Car",
            "Failed to fetch car",
        );
        assert_eq!(broken.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(broken.body["message"], "Failed to fetch car");
    }
}
