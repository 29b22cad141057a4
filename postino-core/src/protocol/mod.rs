pub mod http;

// Re-export comodi
pub use http::{
    DeleteMessageResponse, DeleteMessagesRequest, DeleteMessagesResponse, ListMessagesResponse,
    NewMessagesResponse, SendMessageRequest, SendMessageResponse,
};
