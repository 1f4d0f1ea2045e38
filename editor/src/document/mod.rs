mod document_message_handler;

pub use document_message_handler::{DocumentMessage, DocumentMessageHandler};
