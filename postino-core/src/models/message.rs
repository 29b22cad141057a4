use serde::{Deserialize, Serialize};

/// Messaggio come esposto sul wire da tutti gli endpoint.
/// Il flag di lettura non compare mai qui: è stato interno dello store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub sender: String,
    pub recipient: String,
    pub content: String,
    pub timestamp: String, // RFC3339 UTC
}
