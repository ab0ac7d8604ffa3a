//! Domain-error → HTTP response mapping.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockbook_inventory::DomainError;

/// Map a domain rejection to a status code without reinterpreting it.
/// Errors that carry a last-known-valid value surface it in `data`.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    tracing::debug!(error = %err, "operation rejected");

    let (status, data) = match &err {
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, None),
        DomainError::NotFound => (StatusCode::NOT_FOUND, None),
        DomainError::Conflict(_) => (StatusCode::CONFLICT, None),
        DomainError::InsufficientQuantity { available } => {
            (StatusCode::UNPROCESSABLE_ENTITY, Some(json!(available)))
        }
        DomainError::InvalidPrice { current } => (StatusCode::BAD_REQUEST, Some(json!(current))),
        DomainError::Overflow => (StatusCode::UNPROCESSABLE_ENTITY, None),
    };

    (
        status,
        axum::Json(json!({
            "success": false,
            "message": err.to_string(),
            "data": data,
        })),
    )
        .into_response()
}
