use actix_web::{web, HttpResponse};
use coach_core::{build_system_prompt, repair_report, CoachBody, CoachRequest, CoachResult, ResponseMode};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn handler(
    state: web::Data<AppState>,
    body: web::Json<CoachBody>,
) -> Result<HttpResponse, ApiError> {
    let request = CoachRequest::normalize(&body)?;

    log::info!(
        "[COACH] text: {} (tone: {}, length: {}, lang: {})",
        request.text,
        request.tone.as_str(),
        request.length.as_str(),
        request.lang
    );

    // Checked before any upstream call; absence was already warned about at startup.
    let llm = state.llm.as_ref().ok_or(ApiError::Configuration)?;

    let system_prompt = build_system_prompt(&request, state.mode);
    let budget = request.length.budget();

    let raw = llm
        .complete(&system_prompt, &request.text, budget.max_output_tokens)
        .await
        .map_err(ApiError::Upstream)?;

    let result = match state.mode {
        ResponseMode::Plain => CoachResult::PlainText(raw),
        ResponseMode::Structured => CoachResult::Structured(repair_report(&raw)?),
    };

    Ok(match result {
        CoachResult::PlainText(answer) => {
            log::info!("[COACH] reply: {}", answer);
            HttpResponse::Ok().json(serde_json::json!({ "ok": true, "answer": answer }))
        }
        CoachResult::Structured(report) => {
            log::info!("[COACH] reply: {}", report.one_liner);
            HttpResponse::Ok().json(serde_json::json!({ "ok": true, "coach": report }))
        }
    })
}
