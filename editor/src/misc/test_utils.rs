use crate::communication::set_uuid_seed;
use crate::input::mouse::{EditorMouseState, MouseKeys};
use crate::message_prelude::*;
use crate::viewport_tools::tool::ToolType;
use crate::Editor;

/// A set of utility functions to make the writing of editor tests more declarative
pub trait EditorTestUtils {
	/// An editor with test logging and a deterministic layer id sequence
	fn create() -> Editor;

	/// Select the line tool and drag it from (x1, y1) to (x2, y2)
	fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

	/// Select the given tool and drag it from (x1, y1) to (x2, y2)
	fn drag_tool(&mut self, tool_type: ToolType, x1: f64, y1: f64, x2: f64, y2: f64);

	fn select_tool(&mut self, tool_type: ToolType) -> Vec<FrontendMessage>;
	fn move_mouse(&mut self, x: f64, y: f64) -> Vec<FrontendMessage>;
	/// A pointer move with the primary button held
	fn drag_mouse(&mut self, x: f64, y: f64) -> Vec<FrontendMessage>;
	fn lmb_mousedown(&mut self, x: f64, y: f64) -> Vec<FrontendMessage>;
	fn lmb_mouseup(&mut self, x: f64, y: f64) -> Vec<FrontendMessage>;

	/// The paths of the root folder's immediate children
	fn root_layers(&self) -> Vec<Vec<LayerId>>;
}

impl EditorTestUtils for Editor {
	fn create() -> Editor {
		let _ = env_logger::builder().is_test(true).try_init();
		set_uuid_seed(0);

		Editor::new()
	}

	fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
		self.drag_tool(ToolType::Line, x1, y1, x2, y2);
	}

	fn drag_tool(&mut self, tool_type: ToolType, x1: f64, y1: f64, x2: f64, y2: f64) {
		self.select_tool(tool_type);
		self.move_mouse(x1, y1);
		self.lmb_mousedown(x1, y1);
		self.drag_mouse(x2, y2);
		self.lmb_mouseup(x2, y2);
	}

	fn select_tool(&mut self, tool_type: ToolType) -> Vec<FrontendMessage> {
		self.handle_message(ToolMessage::ActivateTool(tool_type))
	}

	fn move_mouse(&mut self, x: f64, y: f64) -> Vec<FrontendMessage> {
		let editor_mouse_state = EditorMouseState::from_editor_position(x, y);
		self.handle_message(InputPreprocessorMessage::MouseMove { editor_mouse_state })
	}

	fn drag_mouse(&mut self, x: f64, y: f64) -> Vec<FrontendMessage> {
		let mut editor_mouse_state = EditorMouseState::from_editor_position(x, y);
		editor_mouse_state.mouse_keys = MouseKeys::LEFT;
		self.handle_message(InputPreprocessorMessage::MouseMove { editor_mouse_state })
	}

	fn lmb_mousedown(&mut self, x: f64, y: f64) -> Vec<FrontendMessage> {
		let mut editor_mouse_state = EditorMouseState::from_editor_position(x, y);
		editor_mouse_state.mouse_keys = MouseKeys::LEFT;
		self.handle_message(InputPreprocessorMessage::MouseDown { editor_mouse_state })
	}

	fn lmb_mouseup(&mut self, x: f64, y: f64) -> Vec<FrontendMessage> {
		let editor_mouse_state = EditorMouseState::from_editor_position(x, y);
		self.handle_message(InputPreprocessorMessage::MouseUp { editor_mouse_state })
	}

	fn root_layers(&self) -> Vec<Vec<LayerId>> {
		let folder = self.dispatcher.document_message_handler.scene_document.folder(&[]).expect("The root folder always exists");
		folder.list_layers().iter().map(|&id| vec![id]).collect()
	}
}
