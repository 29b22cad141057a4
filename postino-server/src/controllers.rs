use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use postino_core::protocol::http::{
    DeleteMessageResponse, DeleteMessagesRequest, DeleteMessagesResponse, ListMessagesResponse,
    NewMessagesResponse, SendMessageRequest, SendMessageResponse,
};

use crate::error::ApiError;
use crate::{store, AppState};

/// Query string per GET /messages/new.
#[derive(Debug, Deserialize)]
pub struct NewMessagesParams {
    pub recipient: Option<String>,
}

/// Query string per GET /messages. Gli indici assenti prendono i default
/// storici dell'API: fetta [0, 50).
#[derive(Debug, Deserialize)]
pub struct ListMessagesParams {
    pub recipient: Option<String>,
    pub start_index: Option<i64>,
    pub stop_index: Option<i64>,
}

/// Handler per POST /messages
pub async fn send_message(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<SendMessageResponse>), ApiError> {
    let created = store::send(
        &state.pool,
        req.sender.as_deref(),
        req.recipient.as_deref(),
        req.content.as_deref(),
    )
    .await?;

    let resp = SendMessageResponse {
        message: created.into_message(),
        info: "Message sent successfully".to_string(),
    };
    Ok((StatusCode::CREATED, Json(resp)))
}

/// Handler per GET /messages/new: scarica la coda dei non letti del
/// destinatario marcandoli come letti.
pub async fn fetch_new_messages(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<NewMessagesParams>,
) -> Result<(StatusCode, Json<NewMessagesResponse>), ApiError> {
    let claimed = store::fetch_new(&state.pool, params.recipient.as_deref()).await?;

    // coda vuota: stato valido, segnalato con il marker informativo
    let info = if claimed.is_empty() {
        Some(format!(
            "No new messages found for {}",
            params.recipient.as_deref().unwrap_or_default()
        ))
    } else {
        None
    };
    let resp = NewMessagesResponse {
        messages: claimed.into_iter().map(|m| m.into_message()).collect(),
        info,
    };
    Ok((StatusCode::OK, Json(resp)))
}

/// Handler per GET /messages: cronologia paginata del destinatario, dal più
/// recente, indipendentemente dallo stato di lettura.
pub async fn fetch_messages(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<ListMessagesParams>,
) -> Result<(StatusCode, Json<ListMessagesResponse>), ApiError> {
    let start_index = params.start_index.unwrap_or(0);
    let stop_index = params.stop_index.unwrap_or(50);

    let rows = store::fetch_range(
        &state.pool,
        params.recipient.as_deref(),
        start_index,
        stop_index,
    )
    .await?;

    let messages: Vec<_> = rows.into_iter().map(|m| m.into_message()).collect();
    let resp = ListMessagesResponse {
        total_messages: messages.len(),
        messages,
        start_index,
        stop_index,
    };
    Ok((StatusCode::OK, Json(resp)))
}

/// Handler per DELETE /messages/:id
pub async fn delete_message(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<DeleteMessageResponse>), ApiError> {
    let deleted = store::delete_one(&state.pool, id).await?;
    let resp = DeleteMessageResponse {
        deleted_message: deleted.into_message(),
        info: "Message deleted successfully".to_string(),
    };
    Ok((StatusCode::OK, Json(resp)))
}

/// Handler per DELETE /messages: cancellazione in blocco, tutto o niente.
pub async fn delete_multiple_messages(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<DeleteMessagesRequest>,
) -> Result<(StatusCode, Json<DeleteMessagesResponse>), ApiError> {
    let deleted = store::delete_many(&state.pool, req.ids.as_deref()).await?;
    let resp = DeleteMessagesResponse {
        info: "Successfully deleted all messages".to_string(),
        deleted,
    };
    Ok((StatusCode::OK, Json(resp)))
}
