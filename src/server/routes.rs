pub mod health {
    use rocket::{get, serde::json::Json};
    use serde_json::{json, Value};

    #[get("/")]
    pub async fn index() -> Json<Value> {
        Json(json!({
            "message": "Jay Beny Trading Co Backend Running"
        }))
    }
}
