pub mod input_preprocessor;
pub mod input_preprocessor_message_handler;
pub mod mouse;

#[doc(inline)]
pub use input_preprocessor::InputPreprocessorMessage;
#[doc(inline)]
pub use input_preprocessor_message_handler::InputPreprocessorMessageHandler;
