use super::mouse::EditorMouseState;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputPreprocessorMessage {
	MouseDown { editor_mouse_state: EditorMouseState },
	MouseMove { editor_mouse_state: EditorMouseState },
	MouseUp { editor_mouse_state: EditorMouseState },
}
