use crate::api::{internal_error, ErrorResponse};
use crate::database::{self, strip_metadata};
use crate::schemas::Product;
use crate::server::ServerState;
use rocket::response::status::Custom;
use rocket::{get, serde::json::Json, State};
use serde_json::Value;
use tracing::debug;

/// Catalog listing. Seeds the default products when the collection is empty,
/// then returns every stored document that still matches the current schema.
#[get("/products")]
pub async fn list_products(
    state: &State<ServerState>,
) -> Result<Json<Vec<Product>>, Custom<Json<ErrorResponse>>> {
    let collection = state.config.collections.product.as_str();

    let count = database::count_documents(&state.db_pool, collection)
        .await
        .map_err(internal_error)?;
    if count == 0 {
        seed_catalog(state, collection).await;
    }

    let documents = database::find_all_documents(&state.db_pool, collection)
        .await
        .map_err(internal_error)?;

    // Shape-drifted documents are dropped from the listing, not surfaced.
    let mut products = Vec::new();
    for document in documents {
        if let Value::Object(mut doc) = document {
            strip_metadata(&mut doc);
            match Product::from_document(&doc) {
                Ok(product) => products.push(product),
                Err(e) => debug!("skipping stored product: {}", e),
            }
        }
    }

    Ok(Json(products))
}

// Each seed record is attempted independently; one failure never blocks the
// rest of the catalog.
async fn seed_catalog(state: &State<ServerState>, collection: &str) {
    for product in default_catalog() {
        let document = match serde_json::to_value(&product) {
            Ok(document) => document,
            Err(e) => {
                debug!("could not serialize seed product '{}': {}", product.name, e);
                continue;
            }
        };

        if let Err(e) = database::insert_document(&state.db_pool, collection, &document).await {
            debug!("could not seed product '{}': {}", product.name, e);
        }
    }
}

pub fn default_catalog() -> Vec<Product> {
    vec![
        Product {
            name: "Ordinary Portland Cement (OPC 43)".to_string(),
            category: "Cement".to_string(),
            brand: Some("UltraTech".to_string()),
            grade: Some("OPC 43".to_string()),
            unit: "bag".to_string(),
            price_per_unit: Some(0.0),
            in_stock: true,
            description: Some("Fresh stock, best rates for bulk orders".to_string()),
        },
        Product {
            name: "Portland Pozzolana Cement (PPC)".to_string(),
            category: "Cement".to_string(),
            brand: Some("Dalmia".to_string()),
            grade: Some("PPC".to_string()),
            unit: "bag".to_string(),
            price_per_unit: Some(0.0),
            in_stock: true,
            description: Some("Ideal for general construction".to_string()),
        },
        Product {
            name: "TMT Rebar 12mm Fe500D".to_string(),
            category: "TMT Rebar".to_string(),
            brand: Some("SRMB".to_string()),
            grade: Some("Fe500D".to_string()),
            unit: "piece".to_string(),
            price_per_unit: Some(0.0),
            in_stock: true,
            description: Some("High strength ductile rebar".to_string()),
        },
        Product {
            name: "Coarse Sand".to_string(),
            category: "Sand & Aggregates".to_string(),
            brand: None,
            grade: None,
            unit: "cubic ft".to_string(),
            price_per_unit: Some(0.0),
            in_stock: true,
            description: Some("Clean, screened coarse sand".to_string()),
        },
    ]
}
