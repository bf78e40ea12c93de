//! Actix handlers for the HTTP surface.

use actix_web::HttpResponse;

use crate::dto::Detail;
use crate::services::ServiceError;

pub mod ai;
pub mod sales_reps;

/// Maps a service failure onto the HTTP error contract: validation failures
/// answer 400, everything else 500, both with a `{ "detail": ... }` body.
pub(crate) fn error_response(err: &ServiceError) -> HttpResponse {
    let body = Detail {
        detail: err.to_string(),
    };

    match err {
        ServiceError::Validation(_) => HttpResponse::BadRequest().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}
