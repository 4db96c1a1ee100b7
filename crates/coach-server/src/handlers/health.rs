use actix_web::{HttpResponse, Responder};
use chrono::Utc;

pub async fn handler() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "ok": true,
        "time": Utc::now().to_rfc3339(),
    }))
}
