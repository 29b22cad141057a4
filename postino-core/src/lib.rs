//! postino-core: tipi condivisi tra client e server (modelli, DTO HTTP, errori).
//! Niente I/O: solo strutture serializzabili sul wire.

pub mod models;
pub mod protocol;
pub mod error;
pub mod utils;

// Re-export utili per ridurre i percorsi nel crate server
pub use error::Error;
pub use models::message::Message;
pub use protocol::http::{
    DeleteMessageResponse, DeleteMessagesRequest, DeleteMessagesResponse, ListMessagesResponse,
    NewMessagesResponse, SendMessageRequest, SendMessageResponse,
};
pub use utils::now_timestamp;
