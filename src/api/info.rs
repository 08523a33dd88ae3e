use rocket::{get, serde::json::Json};
use serde_json::{json, Value};

/// Static company record. No store access, no computation.
#[get("/info")]
pub async fn company_info() -> Json<Value> {
    Json(json!({
        "name": "Jay Beny Trading Co",
        "tagline": "Cement • TMT Rebar • All Building Materials",
        "location": "Gossainpur, Bagdogra",
        "phones": ["9800014161", "9832030002"],
        "whatsapp": "9800014161",
        "services": [
            "Retail & wholesale supply",
            "On-site delivery",
            "Bulk orders for projects",
        ],
        "categories": [
            "Cement",
            "TMT Rebar",
            "Bricks & Blocks",
            "Sand & Aggregates",
            "Binding Wire & Nails",
            "Pipes & Fittings",
        ],
    }))
}
