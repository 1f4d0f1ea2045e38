use crate::misc::HintData;

use serde::{Deserialize, Serialize};

/// The cursor shapes a frontend is asked to display over the viewport.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum MouseCursorIcon {
	Default,
	Crosshair,
}

impl Default for MouseCursorIcon {
	fn default() -> Self {
		MouseCursorIcon::Default
	}
}

/// Messages surfaced to the embedding frontend, emitted as the result of
/// handling one inbound message.
#[derive(PartialEq, Clone, Deserialize, Serialize, Debug)]
pub enum FrontendMessage {
	/// Ask the host to route pointer events to the editor until the gesture ends.
	CapturePointer { started: bool },
	/// Ask the host to keep the current tool active after a finished gesture.
	RetainActiveTool { keep: bool },
	SetActiveTool { tool_name: String },
	UpdateCanvas { document: String },
	UpdateInputHints { hint_data: HintData },
	UpdateMouseCursor { cursor: MouseCursorIcon },
}
