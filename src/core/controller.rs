use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, catalog: Arc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            catalog,
        }
    }
}

// ApiResponse is the envelope returned by every catalog endpoint
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status_code: u16,
}

pub type ServerResponse = (StatusCode, Json<ApiResponse>);

pub type ServerError = (StatusCode, Json<ApiResponse>);

impl ApiResponse {
    pub fn with_message(status: StatusCode, message: &str) -> ServerResponse {
        (status, Json(ApiResponse {
            data: None,
            message: Some(message.to_string()),
            status_code: status.as_u16(),
        }))
    }

    pub fn with_data<T: Serialize>(status: StatusCode, data: &T) -> Result<ServerResponse, ServerError> {
        let data = serde_json::to_value(data).map_err(|err|
            ApiResponse::with_message(StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err).as_str()))?;
        Ok((status, Json(ApiResponse {
            data: Some(data),
            message: None,
            status_code: status.as_u16(),
        })))
    }
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    ApiResponse::with_message(StatusCode::BAD_REQUEST, format!("{}", err).as_str())
}

// borrow and return report every domain failure as a bad request
pub(crate) fn lending_error(err: CommandError) -> ServerError {
    ApiResponse::with_message(StatusCode::BAD_REQUEST, err.to_string().as_str())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                ApiResponse::with_message(StatusCode::NOT_FOUND, err.to_string().as_str())
            }
            CommandError::InsufficientCopies { .. } => {
                ApiResponse::with_message(StatusCode::BAD_REQUEST, err.to_string().as_str())
            }
            CommandError::Validation { .. } => {
                ApiResponse::with_message(StatusCode::BAD_REQUEST, err.to_string().as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use crate::core::command::CommandError;
    use crate::core::controller::{ApiResponse, lending_error, ServerError};

    #[tokio::test]
    async fn test_should_map_command_errors() {
        let (status, body) = ServerError::from(CommandError::NotFound { message: "missing".to_string() });
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(Some("missing".to_string()), body.0.message);
        assert_eq!(404, body.0.status_code);

        let (status, _) = ServerError::from(CommandError::InsufficientCopies { message: "none".to_string() });
        assert_eq!(StatusCode::BAD_REQUEST, status);

        let (status, _) = lending_error(CommandError::NotFound { message: "missing".to_string() });
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }

    #[tokio::test]
    async fn test_should_omit_empty_envelope_fields() {
        let (_, body) = ApiResponse::with_message(StatusCode::CREATED, "Book added successfully");
        let val = serde_json::to_value(&body.0).expect("should serialize");
        assert_eq!(json!({"message": "Book added successfully", "statusCode": 201}), val);

        let (_, body) = ApiResponse::with_data(StatusCode::OK, &vec![1, 2]).expect("should build");
        let val = serde_json::to_value(&body.0).expect("should serialize");
        assert_eq!(json!({"data": [1, 2], "statusCode": 200}), val);
    }
}
