use super::tool::ToolType;
use crate::message_prelude::*;

use serde::{Deserialize, Serialize};

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum ToolMessage {
	ActivateTool(ToolType),
	Angle(AngleMessage),
	Line(LineMessage),
	// Tool-agnostic pointer events, mapped onto the active tool's own messages
	PointerDown,
	PointerMove,
	PointerUp,
	UpdateCursor,
	UpdateHints,
}

impl From<AngleMessage> for ToolMessage {
	fn from(message: AngleMessage) -> Self {
		ToolMessage::Angle(message)
	}
}

impl From<LineMessage> for ToolMessage {
	fn from(message: LineMessage) -> Self {
		ToolMessage::Line(message)
	}
}
