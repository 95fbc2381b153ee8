// Error responses for the REST API
// AppError wraps anyhow::Error so handlers can use `?` on service results.

use std::fmt::{Display, Formatter};

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use relboard_common::RelboardError;
use relboard_common::error::SERVER_ERROR;

use super::header::{ERROR_HEADER, PARAMS_HEADER};

#[derive(Debug)]
pub struct AppError {
    inner: anyhow::Error,
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        AppError { inner: value }
    }
}

impl From<RelboardError> for AppError {
    fn from(value: RelboardError) -> Self {
        AppError {
            inner: value.into(),
        }
    }
}

impl AppError {
    pub fn downcast_ref<E: std::error::Error + Send + Sync + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }
}

/// JSON body of every error response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status: u16,
    pub code: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    pub error_key: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorBody {
    fn from_error(err: &AppError) -> Self {
        match err.downcast_ref::<RelboardError>() {
            Some(e) => {
                let code = e.error_code();
                ErrorBody {
                    status: e.status(),
                    code: code.code,
                    entity_name: e.entity_name().map(str::to_string),
                    error_key: code.key.to_string(),
                    message: e.to_string(),
                    timestamp: Utc::now(),
                }
            }
            None => ErrorBody {
                status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                code: SERVER_ERROR.code,
                entity_name: None,
                error_key: SERVER_ERROR.key.to_string(),
                message: err.inner.to_string(),
                timestamp: Utc::now(),
            },
        }
    }
}

impl actix_web::error::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.downcast_ref::<RelboardError>()
            .and_then(|e| StatusCode::from_u16(e.status()).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let body = ErrorBody::from_error(self);
        if body.status >= 500 {
            tracing::error!(error = %self.inner, "Request failed");
        }

        let mut response = HttpResponse::build(self.status_code());
        response.insert_header((ERROR_HEADER, format!("error.{}", body.error_key)));
        if let Some(entity) = &body.entity_name {
            response.insert_header((PARAMS_HEADER, entity.clone()));
        }
        response.json(body)
    }
}
