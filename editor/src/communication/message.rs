use crate::document::DocumentMessage;
use crate::frontend::FrontendMessage;
use crate::input::InputPreprocessorMessage;
use crate::viewport_tools::tool_message::ToolMessage;
use crate::viewport_tools::tools::angle::AngleMessage;
use crate::viewport_tools::tools::line::LineMessage;

use scene::Operation;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
	NoOp,
	Document(DocumentMessage),
	Frontend(FrontendMessage),
	InputPreprocessor(InputPreprocessorMessage),
	Tool(ToolMessage),
}

// Every message enum lifts into `Message` so that handlers can push follow-up
// work of any kind onto the queue with a plain `.into()`.

impl From<DocumentMessage> for Message {
	fn from(message: DocumentMessage) -> Self {
		Message::Document(message)
	}
}

impl From<FrontendMessage> for Message {
	fn from(message: FrontendMessage) -> Self {
		Message::Frontend(message)
	}
}

impl From<InputPreprocessorMessage> for Message {
	fn from(message: InputPreprocessorMessage) -> Self {
		Message::InputPreprocessor(message)
	}
}

impl From<ToolMessage> for Message {
	fn from(message: ToolMessage) -> Self {
		Message::Tool(message)
	}
}

impl From<AngleMessage> for Message {
	fn from(message: AngleMessage) -> Self {
		Message::Tool(message.into())
	}
}

impl From<LineMessage> for Message {
	fn from(message: LineMessage) -> Self {
		Message::Tool(message.into())
	}
}

// Operations address the document, so they enter the queue wrapped in the
// document message that dispatches them.
impl From<Operation> for Message {
	fn from(operation: Operation) -> Self {
		Message::Document(DocumentMessage::DispatchOperation(Box::new(operation)))
	}
}

impl From<Operation> for DocumentMessage {
	fn from(operation: Operation) -> Self {
		DocumentMessage::DispatchOperation(Box::new(operation))
	}
}
