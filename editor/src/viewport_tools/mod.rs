pub mod tool;
pub mod tool_message;
pub mod tool_message_handler;
pub mod tools;

#[cfg(test)]
mod test {
	use crate::misc::test_utils::EditorTestUtils;
	use crate::viewport_tools::tool::ToolType;
	use crate::Editor;

	use scene::Operation;

	use test_case::test_case;

	#[test_case(ToolType::Line ; "while using line tool")]
	#[test_case(ToolType::Angle ; "while using angle tool")]
	fn should_not_crash_when_layer_is_deleted(tool: ToolType) {
		let mut editor = Editor::create();
		editor.draw_line(0., 0., 100., 100.);

		editor.select_tool(tool);
		editor.move_mouse(50., 50.);
		editor.lmb_mousedown(50., 50.);
		editor.drag_mouse(60., 60.);

		// Pull the rug out from under the open drag session
		for path in editor.root_layers() {
			editor.handle_message(Operation::DeleteLayer { path });
		}

		editor.drag_mouse(70., 70.);
		editor.lmb_mouseup(70., 70.);
	}
}
