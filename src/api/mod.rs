pub mod diagnostics;
pub mod info;
pub mod leads;
pub mod products;

// Re-export all route functions
pub use diagnostics::*;
pub use info::*;
pub use leads::*;
pub use products::*;

use rocket::catch;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use serde::Serialize;

/// Flattened error shape for all caller-visible failures: `fields` is present
/// only for validation errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

pub fn internal_error(
    e: Box<dyn std::error::Error + Send + Sync>,
) -> Custom<Json<ErrorResponse>> {
    Custom(
        Status::InternalServerError,
        Json(ErrorResponse {
            error: e.to_string(),
            fields: None,
        }),
    )
}

// Rocket rejects a syntactically broken JSON body before any handler runs;
// these catchers keep that rejection in the same flattened error shape as
// handler-level validation failures.
#[catch(400)]
pub fn malformed_request() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: "malformed request body".to_string(),
        fields: None,
    })
}

#[catch(422)]
pub fn unprocessable_request() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: "validation failed".to_string(),
        fields: None,
    })
}
