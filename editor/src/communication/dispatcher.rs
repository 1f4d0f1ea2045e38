use crate::message_prelude::*;

pub use crate::document::DocumentMessageHandler;
pub use crate::input::InputPreprocessorMessageHandler;
pub use crate::viewport_tools::tool_message_handler::ToolMessageHandler;

use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct Dispatcher {
	pub input_preprocessor: InputPreprocessorMessageHandler,
	pub tool_message_handler: ToolMessageHandler,
	pub document_message_handler: DocumentMessageHandler,
	messages: VecDeque<Message>,
	pub responses: Vec<FrontendMessage>,
}

impl Dispatcher {
	pub fn new() -> Dispatcher {
		Dispatcher::default()
	}

	pub fn handle_message<T: Into<Message>>(&mut self, message: T) {
		let message = message.into();
		use Message::*;
		if !matches!(
			message,
			Message::InputPreprocessor(_)
				| Message::Tool(ToolMessage::PointerMove)
				| Message::Tool(ToolMessage::Angle(AngleMessage::PointerMove))
				| Message::Tool(ToolMessage::Line(LineMessage::Redraw))
				| Message::Document(DocumentMessage::RenderDocument)
				| Message::Frontend(FrontendMessage::UpdateCanvas { .. })
		) {
			log::trace!("Message: {:?}", message);
		}
		match message {
			NoOp => (),
			Document(message) => self.document_message_handler.process_action(message, (), &mut self.messages),
			Frontend(message) => self.responses.push(message),
			InputPreprocessor(message) => self.input_preprocessor.process_action(message, (), &mut self.messages),
			Tool(message) => self
				.tool_message_handler
				.process_action(message, (&self.document_message_handler, &self.input_preprocessor), &mut self.messages),
		}
		if let Some(message) = self.messages.pop_front() {
			self.handle_message(message);
		}
	}
}
