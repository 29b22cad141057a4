use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errore delle operazioni dello store, mappato sul boundary HTTP.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input obbligatorio assente o vuoto, rilevato prima di toccare lo storage.
    #[error("{0}")]
    Validation(String),

    /// Indici di paginazione fuori contratto (negativi o start > stop).
    #[error("{0}")]
    Range(String),

    /// L'id riferito non esiste.
    #[error("{0}")]
    NotFound(String),

    /// Delete in blocco fallita: questi id non esistono, nessuna riga cancellata.
    #[error("Messages not found")]
    NotFoundIds(Vec<i64>),

    /// Fallimento dello storage, riportato in forma opaca al chiamante.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Range(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::NotFoundIds(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Codice macchina che finisce nel body dell'errore.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::Range(_) => "range_error",
            ApiError::NotFound(_) | ApiError::NotFoundIds(_) => "not_found",
            ApiError::Database(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Database(e) => {
                // niente dettagli interni sul wire
                tracing::error!(error = %e, "storage failure");
                postino_core::Error::new(self.error_code(), "internal server error")
            }
            ApiError::NotFoundIds(ids) => {
                postino_core::Error::new(self.error_code(), self.to_string())
                    .with_details(json!({ "notFoundIds": ids }))
            }
            _ => postino_core::Error::new(self.error_code(), self.to_string()),
        };
        (status, Json(body)).into_response()
    }
}
