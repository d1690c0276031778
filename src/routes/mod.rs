use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpRequest, HttpResponse};

use crate::dto::api::ErrorResponse;
use crate::services::ServiceError;

pub mod clients;
pub mod orders;

/// HTTP status reported for a service failure.
pub fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::MissingClientId
        | ServiceError::UnknownClient(_)
        | ServiceError::MissingStatus
        | ServiceError::InvalidStatus(_)
        | ServiceError::MissingOrderId
        | ServiceError::Form(_)
        | ServiceError::TypeConstraint(_) => StatusCode::BAD_REQUEST,
        ServiceError::UnknownOrder(_) | ServiceError::ClientNotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Renders a service failure as a JSON error body.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let status = status_for(err);
    // Store details stay in the log.
    let message = match err {
        ServiceError::StoreUnavailable(_) => "store unavailable".to_string(),
        other => other.to_string(),
    };
    HttpResponse::build(status).json(ErrorResponse::new(message))
}

/// Rejects malformed query strings with the same JSON shape as service errors.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

/// Rejects malformed JSON bodies with the same JSON shape as service errors.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

/// Rejects unparsable path segments with the same JSON shape as service errors.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;
    use crate::domain::types::OrderId;

    #[test]
    fn validation_errors_are_bad_requests() {
        for err in [
            ServiceError::MissingClientId,
            ServiceError::UnknownClient(3),
            ServiceError::MissingStatus,
            ServiceError::InvalidStatus("x".into()),
            ServiceError::MissingOrderId,
        ] {
            assert_eq!(status_for(&err), StatusCode::BAD_REQUEST, "{err}");
        }
    }

    #[test]
    fn lookups_and_store_failures_have_distinct_statuses() {
        assert_eq!(
            status_for(&ServiceError::UnknownOrder(OrderId::new())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&ServiceError::StoreUnavailable("down".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for(&ServiceError::Conflict("dup".into())),
            StatusCode::CONFLICT
        );
    }

    #[actix_web::test]
    async fn store_failures_hide_the_underlying_message() {
        let response = error_response(&ServiceError::StoreUnavailable(
            "database is locked at /var/lib/orders.db".into(),
        ));
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = to_bytes(response.into_body()).await.unwrap();
        let body = std::str::from_utf8(&body).unwrap();
        assert_eq!(body, r#"{"error":"store unavailable"}"#);
        assert!(!body.contains("locked"));
    }

    #[actix_web::test]
    async fn caller_errors_keep_their_message() {
        let response = error_response(&ServiceError::InvalidStatus("lost".into()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"invalid status: lost"}"#);
    }
}
