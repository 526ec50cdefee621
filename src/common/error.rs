// src/common/error.rs

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::clients::UpstreamError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Corpo ausente, malformado ou sem campo obrigatório
    #[error("JSON inválido")]
    InvalidJson(#[from] JsonRejection),

    // A API de backend falhou. `message` é o que o cliente vê; `source` só vai para o log.
    #[error("{message}")]
    Upstream {
        message: &'static str,
        #[source]
        source: UpstreamError,
    },

    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn upstream(message: &'static str) -> impl FnOnce(UpstreamError) -> Self {
        move |source| AppError::Upstream { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors.iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidJson(rejection) => {
                let body = Json(json!({
                    "error": "Corpo da requisição inválido.",
                    "details": { "body": [rejection.body_text()] },
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::Upstream { message, source } => {
                tracing::error!("{}: {}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            ref e => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        extract::FromRequest,
        http::Request,
    };
    use serde::Deserialize;
    use serde_json::Value;
    use validator::Validate;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn upstream_failure_hides_the_cause() {
        let err = AppError::upstream("Failed to fetch item")(UpstreamError::Status(StatusCode::BAD_GATEWAY));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": "Failed to fetch item" }));
    }

    #[tokio::test]
    async fn validation_failure_lists_fields() {
        #[derive(Validate)]
        struct Form {
            #[validate(length(min = 1, message = "obrigatório"))]
            name: String,
        }

        let errors = Form { name: String::new() }.validate().unwrap_err();
        let response = AppError::from(errors).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["details"]["name"], json!(["obrigatório"]));
    }

    #[tokio::test]
    async fn json_rejection_is_a_400_with_details() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Form {
            name: String,
        }

        let request = Request::builder()
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let rejection = Json::<Form>::from_request(request, &()).await.unwrap_err();
        let response = AppError::from(rejection).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Corpo da requisição inválido.");
        assert!(body["details"]["body"][0].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn anything_else_is_a_500() {
        let response = AppError::from(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Ocorreu um erro inesperado.");
    }
}
