#[macro_use]
pub mod macros;

pub mod communication;
pub mod consts;
pub mod document;
pub mod frontend;
pub mod input;
pub mod locale;
pub mod misc;
pub mod viewport_tools;

#[doc(inline)]
pub use scene::color::Color;
#[doc(inline)]
pub use scene::document::Document as SvgDocument;
#[doc(inline)]
pub use scene::LayerId;
#[doc(inline)]
pub use misc::EditorError;

use communication::dispatcher::Dispatcher;
use input::mouse::EditorMouseState;
use message_prelude::*;
use viewport_tools::tool::ToolType;

// TODO: serialize with serde to save the current editor state
pub struct Editor {
	dispatcher: Dispatcher,
}

impl Editor {
	/// Construct a new editor instance.
	/// Remember to provide a random seed with `editor::communication::set_uuid_seed(seed)` before any editors can be used.
	pub fn new() -> Self {
		Self { dispatcher: Dispatcher::new() }
	}

	pub fn handle_message<T: Into<Message>>(&mut self, message: T) -> Vec<FrontendMessage> {
		self.dispatcher.handle_message(message);

		let mut responses = Vec::new();
		std::mem::swap(&mut responses, &mut self.dispatcher.responses);

		responses
	}

	/// Put the editor into angle measurement mode.
	pub fn activate(&mut self) -> Vec<FrontendMessage> {
		self.handle_message(ToolMessage::ActivateTool(ToolType::Angle))
	}

	/// Notify the editor that the host replaced or restructured the document under it.
	pub fn on_context_changed(&mut self) -> Vec<FrontendMessage> {
		self.handle_message(DocumentMessage::ContextChanged)
	}

	pub fn on_pointer_down(&mut self, editor_mouse_state: EditorMouseState) -> Vec<FrontendMessage> {
		self.handle_message(InputPreprocessorMessage::MouseDown { editor_mouse_state })
	}

	pub fn on_pointer_move(&mut self, editor_mouse_state: EditorMouseState) -> Vec<FrontendMessage> {
		self.handle_message(InputPreprocessorMessage::MouseMove { editor_mouse_state })
	}

	pub fn on_pointer_up(&mut self, editor_mouse_state: EditorMouseState) -> Vec<FrontendMessage> {
		self.handle_message(InputPreprocessorMessage::MouseUp { editor_mouse_state })
	}
}

impl Default for Editor {
	fn default() -> Self {
		Self::new()
	}
}

pub mod message_prelude {
	pub use crate::communication::generate_uuid;
	pub use crate::communication::message::Message;
	pub use crate::communication::MessageHandler;

	pub use crate::LayerId;

	pub use crate::document::DocumentMessage;
	pub use crate::frontend::FrontendMessage;
	pub use crate::input::InputPreprocessorMessage;
	pub use crate::viewport_tools::tool_message::ToolMessage;
	pub use crate::viewport_tools::tools::angle::AngleMessage;
	pub use crate::viewport_tools::tools::line::LineMessage;

	pub use std::collections::VecDeque;
}
