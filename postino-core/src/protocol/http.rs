use serde::{Deserialize, Serialize};

use crate::models::Message;
/*
    http dto for the message endpoints
*/
// Send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    // i campi obbligatori restano Option: l'assenza deve arrivare allo store
    // e tornare come errore di validazione (400), non come reject del parser
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub message: Message,
    pub info: String,
}

// Fetch new: coda dei non letti, svuotata ad ogni chiamata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessagesResponse {
    pub messages: Vec<Message>,
    /// Marker informativo quando la coda è vuota (non è un errore).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

// Fetch range (with recipient & start_index & stop_index handled as query params, not in body)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMessagesResponse {
    pub messages: Vec<Message>,
    /// Quanti messaggi contiene davvero la fetta restituita.
    pub total_messages: usize,
    pub start_index: i64,
    pub stop_index: i64,
}

// Delete singolo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMessageResponse {
    /// Stato del messaggio com'era prima della cancellazione.
    pub deleted_message: Message,
    pub info: String,
}

// Delete in blocco (tutto o niente)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMessagesRequest {
    // "ids": null e campo assente sono equivalenti: entrambi respinti dalla validazione
    pub ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMessagesResponse {
    pub info: String,
    pub deleted: u64,
}
