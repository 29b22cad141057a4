use sqlx::SqlitePool;
use std::collections::BTreeSet;

use postino_core::{now_timestamp, Message};

use crate::error::ApiError;

/// Riga della tabella messages. A differenza del `Message` sul wire porta
/// anche il flag di lettura, che non esce mai dallo store.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StoredMessage {
    pub id: i64,
    pub sender: String,
    pub recipient: String,
    pub content: String,
    pub timestamp: String, // RFC3339 UTC
    pub is_read: bool,
}

impl StoredMessage {
    /// Converte la riga nel messaggio esposto sul wire (senza is_read).
    pub fn into_message(self) -> Message {
        Message {
            id: self.id,
            sender: self.sender,
            recipient: self.recipient,
            content: self.content,
            timestamp: self.timestamp,
        }
    }
}

// costruisce "?, ?, ?" per le clausole IN con un numero variabile di id
fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

// un campo obbligatorio è valido solo se presente e non vuoto
fn required(field: Option<&str>) -> Option<&str> {
    field.filter(|v| !v.is_empty())
}

/// Inserisce un nuovo messaggio con id e timestamp assegnati dallo store
/// e `is_read = false`, e lo restituisce.
pub async fn send(
    pool: &SqlitePool,
    sender: Option<&str>,
    recipient: Option<&str>,
    content: Option<&str>,
) -> Result<StoredMessage, ApiError> {
    // la validazione avviene prima di toccare lo storage
    let (sender, recipient, content) =
        match (required(sender), required(recipient), required(content)) {
            (Some(s), Some(r), Some(c)) => (s, r, c),
            _ => return Err(ApiError::Validation("Missing required fields".to_string())),
        };

    let timestamp = now_timestamp();
    let res = sqlx::query(
        "INSERT INTO messages (sender, recipient, content, timestamp, is_read) VALUES (?, ?, ?, ?, 0)",
    )
    .bind(sender)
    .bind(recipient)
    .bind(content)
    .bind(&timestamp)
    .execute(pool)
    .await?;

    Ok(StoredMessage {
        id: res.last_insert_rowid(),
        sender: sender.to_string(),
        recipient: recipient.to_string(),
        content: content.to_string(),
        timestamp,
        is_read: false,
    })
}

/// Svuota la coda dei non letti di un destinatario.
///
/// Selezione e flip del flag stanno in un unico statement ("claim and mark"):
/// due chiamate concorrenti non possono restituire lo stesso messaggio, e non
/// esiste una finestra in cui un messaggio è stato letto ma non marcato.
/// Per costruzione la chiamata non è idempotente: la seconda volta la coda è vuota.
pub async fn fetch_new(
    pool: &SqlitePool,
    recipient: Option<&str>,
) -> Result<Vec<StoredMessage>, ApiError> {
    let recipient = required(recipient)
        .ok_or_else(|| ApiError::Validation("Missing required fields".to_string()))?;

    let mut claimed: Vec<StoredMessage> = sqlx::query_as(
        "UPDATE messages SET is_read = 1 \
         WHERE recipient = ? AND is_read = 0 \
         RETURNING id, sender, recipient, content, timestamp, is_read",
    )
    .bind(recipient)
    .fetch_all(pool)
    .await?;

    // SQLite non garantisce l'ordine delle righe di RETURNING:
    // ristabiliamo l'ordine di inserimento
    claimed.sort_by_key(|m| m.id);
    Ok(claimed)
}

/// Legge la fetta `[start_index, stop_index)` della cronologia di un
/// destinatario, dal più recente al più vecchio, letti o no. Non tocca mai il
/// flag di lettura. Uno stop_index oltre la fine tronca al disponibile.
pub async fn fetch_range(
    pool: &SqlitePool,
    recipient: Option<&str>,
    start_index: i64,
    stop_index: i64,
) -> Result<Vec<StoredMessage>, ApiError> {
    let recipient = required(recipient)
        .ok_or_else(|| ApiError::Validation("Missing recipient parameter".to_string()))?;
    if start_index < 0 || stop_index < 0 {
        return Err(ApiError::Range("Indexes must be positive integers".to_string()));
    }
    if start_index > stop_index {
        return Err(ApiError::Range(
            "Start index must be less than stop index".to_string(),
        ));
    }

    // gli id crescono con l'inserimento: ordinare per id è ordinare per tempo.
    // Il timestamp TEXT non va usato come chiave: RFC3339 omette il subsecondo
    // quando è zero e il confronto lessicografico inverte righe nello stesso secondo
    let rows: Vec<StoredMessage> = sqlx::query_as(
        "SELECT id, sender, recipient, content, timestamp, is_read FROM messages \
         WHERE recipient = ? \
         ORDER BY id DESC \
         LIMIT ? OFFSET ?",
    )
    .bind(recipient)
    .bind(stop_index - start_index)
    .bind(start_index)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Cancella un messaggio per id e ne restituisce lo stato precedente.
/// Un solo statement: nessuna finestra tra verifica di esistenza e DELETE.
pub async fn delete_one(pool: &SqlitePool, id: i64) -> Result<StoredMessage, ApiError> {
    let deleted: Option<StoredMessage> = sqlx::query_as(
        "DELETE FROM messages WHERE id = ? \
         RETURNING id, sender, recipient, content, timestamp, is_read",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    deleted.ok_or_else(|| ApiError::NotFound("Message not found".to_string()))
}

/// Cancellazione in blocco, tutto o niente: se anche un solo id non esiste
/// l'operazione fallisce riportando gli id mancanti e nessuna riga viene
/// toccata. Controllo di esistenza e DELETE stanno nella stessa transazione,
/// quindi una cancellazione concorrente non può invalidare il controllo.
pub async fn delete_many(pool: &SqlitePool, ids: Option<&[i64]>) -> Result<u64, ApiError> {
    let ids = match ids {
        Some(ids) if !ids.is_empty() => ids,
        _ => return Err(ApiError::Validation("Missing required fields".to_string())),
    };
    // gli id duplicati contano una volta sola
    let wanted: BTreeSet<i64> = ids.iter().copied().collect();

    let mut tx = pool.begin().await?;

    let sql = format!(
        "SELECT id FROM messages WHERE id IN ({})",
        placeholders(wanted.len())
    );
    let mut select = sqlx::query_scalar::<_, i64>(&sql);
    for id in &wanted {
        select = select.bind(*id);
    }
    let found: BTreeSet<i64> = select.fetch_all(&mut *tx).await?.into_iter().collect();

    let missing: Vec<i64> = wanted.difference(&found).copied().collect();
    if !missing.is_empty() {
        // il drop della transazione esegue il rollback
        return Err(ApiError::NotFoundIds(missing));
    }

    let sql = format!(
        "DELETE FROM messages WHERE id IN ({})",
        placeholders(wanted.len())
    );
    let mut delete = sqlx::query(&sql);
    for id in &wanted {
        delete = delete.bind(*id);
    }
    let res = delete.execute(&mut *tx).await?;
    tx.commit().await?;

    Ok(res.rows_affected())
}
