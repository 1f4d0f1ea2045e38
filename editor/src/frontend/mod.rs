pub mod frontend_message;

#[doc(inline)]
pub use frontend_message::{FrontendMessage, MouseCursorIcon};
