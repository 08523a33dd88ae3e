use crate::database;
use crate::server::ServerState;
use rocket::{get, serde::json::Json, State};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Diagnostics {
    pub backend: String,
    pub database: String,
    pub store_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
    pub database_url: String,
    pub database_name: String,
}

/// Store connectivity and environment report. Every failure mode degrades to
/// a descriptive string; this endpoint itself never fails.
#[get("/test")]
pub async fn health_check(state: &State<ServerState>) -> Json<Diagnostics> {
    let mut diagnostics = Diagnostics {
        backend: "running".to_string(),
        database: "not available".to_string(),
        store_name: state.config.database.name.clone(),
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
        database_url: env_presence("DATABASE_URL"),
        database_name: env_presence("DATABASE_NAME"),
    };

    match state.db_pool.get().await {
        Ok(_) => {
            diagnostics.database = "available".to_string();
            diagnostics.connection_status = "connected".to_string();

            match database::list_collections(&state.db_pool).await {
                Ok(collections) => {
                    diagnostics.collections = collections.into_iter().take(10).collect();
                    diagnostics.database = "connected and working".to_string();
                }
                Err(e) => {
                    diagnostics.database =
                        format!("connected but error: {}", truncate(&e.to_string(), 50));
                }
            }
        }
        Err(e) => {
            diagnostics.database = format!("error: {}", truncate(&e.to_string(), 50));
        }
    }

    Json(diagnostics)
}

fn env_presence(name: &str) -> String {
    if std::env::var_os(name).is_some() {
        "set".to_string()
    } else {
        "not set".to_string()
    }
}

fn truncate(message: &str, limit: usize) -> String {
    message.chars().take(limit).collect()
}
