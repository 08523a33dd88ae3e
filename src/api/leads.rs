use crate::api::{internal_error, ErrorResponse};
use crate::database;
use crate::schemas::Lead;
use crate::server::ServerState;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::{post, serde::json::Json, State};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

pub const LEAD_CONFIRMATION: &str = "Enquiry submitted. We'll reach out shortly.";

#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
}

/// Enquiry submission. The body is validated against the Lead schema before
/// anything touches the store; a valid enquiry is inserted unconditionally.
#[post("/leads", data = "<payload>")]
pub async fn create_lead(
    state: &State<ServerState>,
    payload: Json<Value>,
) -> Result<Json<LeadResponse>, Custom<Json<ErrorResponse>>> {
    let empty = Map::new();
    let doc = payload.as_object().unwrap_or(&empty);

    let lead = Lead::from_document(doc).map_err(|e| {
        Custom(
            Status::UnprocessableEntity,
            Json(ErrorResponse {
                error: "validation failed".to_string(),
                fields: Some(e.fields),
            }),
        )
    })?;

    let document = serde_json::to_value(&lead).map_err(|e| internal_error(e.into()))?;
    let id = database::insert_document(&state.db_pool, &state.config.collections.lead, &document)
        .await
        .map_err(internal_error)?;

    info!("stored enquiry {} from {}", id, lead.name);

    Ok(Json(LeadResponse {
        success: true,
        message: LEAD_CONFIRMATION.to_string(),
        id,
    }))
}
