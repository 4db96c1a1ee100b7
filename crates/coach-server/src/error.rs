use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Request-boundary error taxonomy. Every variant converts to the JSON
/// failure envelope; nothing propagates as a non-JSON response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] coach_core::ValidationError),

    #[error("Missing OPENAI_API_KEY in environment.")]
    Configuration,

    #[error("Coach failed")]
    Upstream(#[source] coach_llm::CompletionError),

    #[error(transparent)]
    Repair(#[from] coach_core::RepairError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl ApiError {
    fn detail(&self) -> Option<String> {
        match self {
            ApiError::Upstream(source) => Some(source.to_string()),
            _ => None,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration | ApiError::Upstream(_) | ApiError::Repair(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            ok: false,
            error: self.to_string(),
            detail: self.detail(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let error = ApiError::from(coach_core::ValidationError::EmptyText);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "text is required");
    }

    #[test]
    fn configuration_maps_to_500() {
        assert_eq!(
            ApiError::Configuration.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn upstream_carries_detail() {
        let error = ApiError::Upstream(coach_llm::CompletionError::Api(
            "HTTP 503: unavailable".to_string(),
        ));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.detail().unwrap(), "API error: HTTP 503: unavailable");
    }

    #[test]
    fn repair_maps_to_500() {
        let error = ApiError::from(coach_core::RepairError);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "JSON parse failed");
    }
}
