use super::tool_message::ToolMessage;
use super::tools::*;
use crate::communication::MessageHandler;
use crate::document::DocumentMessageHandler;
use crate::input::InputPreprocessorMessageHandler;
use crate::message_prelude::*;

use scene::color::Color;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::fmt;

pub type ToolActionHandlerData<'a> = (&'a DocumentMessageHandler, &'a DocumentToolData, &'a InputPreprocessorMessageHandler);

pub trait Fsm {
	type ToolData;

	#[must_use]
	fn transition(
		self,
		message: ToolMessage,
		document: &DocumentMessageHandler,
		tool_data: &DocumentToolData,
		data: &mut Self::ToolData,
		input: &InputPreprocessorMessageHandler,
		messages: &mut VecDeque<Message>,
	) -> Self;

	fn update_hints(&self, responses: &mut VecDeque<Message>);
	fn update_cursor(&self, responses: &mut VecDeque<Message>);
}

/// Tool state shared by every tool of a document, such as the color newly
/// drawn layers are stroked with.
#[derive(Debug, Clone)]
pub struct DocumentToolData {
	pub primary_color: Color,
}

pub type SubToolMessageHandler = dyn for<'a> MessageHandler<ToolMessage, ToolActionHandlerData<'a>>;

pub struct ToolData {
	pub active_tool_type: ToolType,
	pub tools: HashMap<ToolType, Box<SubToolMessageHandler>>,
}

impl fmt::Debug for ToolData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ToolData").field("active_tool_type", &self.active_tool_type).field("tools", &"[…]").finish()
	}
}

impl ToolData {
	pub fn active_tool_mut(&mut self) -> &mut Box<SubToolMessageHandler> {
		self.tools.get_mut(&self.active_tool_type).expect("The active tool is not initialized")
	}

	pub fn active_tool(&self) -> &SubToolMessageHandler {
		self.tools.get(&self.active_tool_type).map(|x| x.as_ref()).expect("The active tool is not initialized")
	}
}

#[derive(Debug)]
pub struct ToolFsmState {
	pub document_tool_data: DocumentToolData,
	pub tool_data: ToolData,
}

impl Default for ToolFsmState {
	fn default() -> Self {
		ToolFsmState {
			tool_data: ToolData {
				active_tool_type: ToolType::Select,
				tools: gen_tools_hash_map! {
					Select => select::Select,
					Line => line::Line,
					Angle => angle::Angle,
				},
			},
			document_tool_data: DocumentToolData { primary_color: Color::BLACK },
		}
	}
}

impl ToolFsmState {
	pub fn new() -> Self {
		Self::default()
	}
}

#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolType {
	Select,
	Line,
	Angle,
}

impl fmt::Display for ToolType {
	fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		let name = match self {
			ToolType::Select => "Select",
			ToolType::Line => "Line",
			ToolType::Angle => "Angle",
		};

		formatter.write_str(name)
	}
}

pub enum StandardToolMessageType {
	Abort,
	PointerDown,
	PointerMove,
	PointerUp,
}

/// Maps a tool-agnostic event onto the message the given tool consumes for it,
/// or `None` when the tool ignores that event.
pub fn standard_tool_message(tool: ToolType, message_type: StandardToolMessageType) -> Option<ToolMessage> {
	match message_type {
		StandardToolMessageType::Abort => match tool {
			ToolType::Line => Some(LineMessage::Abort.into()),
			ToolType::Angle => Some(AngleMessage::Abort.into()),
			_ => None,
		},
		StandardToolMessageType::PointerDown => match tool {
			ToolType::Line => Some(LineMessage::DragStart.into()),
			ToolType::Angle => Some(AngleMessage::PointerDown.into()),
			_ => None,
		},
		StandardToolMessageType::PointerMove => match tool {
			ToolType::Line => Some(LineMessage::Redraw.into()),
			ToolType::Angle => Some(AngleMessage::PointerMove.into()),
			_ => None,
		},
		StandardToolMessageType::PointerUp => match tool {
			ToolType::Line => Some(LineMessage::DragStop.into()),
			ToolType::Angle => Some(AngleMessage::PointerUp.into()),
			_ => None,
		},
	}
}

pub fn message_to_tool_type(message: &ToolMessage) -> ToolType {
	use ToolMessage::*;

	match message {
		Angle(_) => ToolType::Angle,
		Line(_) => ToolType::Line,
		_ => panic!("Conversion from message to tool type impossible because the given ToolMessage does not belong to a tool"),
	}
}
