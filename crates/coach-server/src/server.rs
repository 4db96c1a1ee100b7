use std::io;

use actix_cors::Cors;
use actix_web::error::JsonPayloadError;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use coach_core::ResponseMode;

use crate::handlers;
use crate::state::AppState;

pub async fn run_server_with_config(
    port: u16,
    api_key: Option<String>,
    base_url: String,
    model: String,
    mode: ResponseMode,
) -> io::Result<()> {
    let state = web::Data::new(AppState::new_with_config(api_key, base_url, model, mode));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(Cors::permissive())
            .wrap(actix_web::middleware::Logger::new("[REQ] %r -> %s"))
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health::handler))
                    .route("/coach", web::post().to(handlers::coach::handler)),
            )
    })
    .bind(format!("0.0.0.0:{}", port))?
    .run()
    .await
}

/// Malformed request bodies still get the JSON failure envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(serde_json::json!({
        "ok": false,
        "error": "invalid request body",
        "detail": err.to_string(),
    }));
    actix_web::error::InternalError::from_response(err, response).into()
}
