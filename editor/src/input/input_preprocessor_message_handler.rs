use super::mouse::{MouseKeys, MouseState};
use crate::message_prelude::*;

/// Tracks the raw pointer state reported by the host and turns primary-button
/// transitions into the pointer messages the tools consume.
#[derive(Debug, Default)]
pub struct InputPreprocessorMessageHandler {
	pub mouse: MouseState,
}

impl MessageHandler<InputPreprocessorMessage, ()> for InputPreprocessorMessageHandler {
	fn process_action(&mut self, message: InputPreprocessorMessage, _data: (), responses: &mut VecDeque<Message>) {
		match message {
			InputPreprocessorMessage::MouseDown { editor_mouse_state } => {
				let mouse_state = editor_mouse_state.to_mouse_state();
				self.mouse.position = mouse_state.position;

				self.translate_mouse_event(mouse_state, true, responses);
			}
			InputPreprocessorMessage::MouseMove { editor_mouse_state } => {
				let mouse_state = editor_mouse_state.to_mouse_state();
				self.mouse.position = mouse_state.position;

				responses.push_back(ToolMessage::PointerMove.into());

				// While any pointer button is already down, additional button down events are not reported, but they are sent as move events
				self.translate_mouse_event(mouse_state, false, responses);
			}
			InputPreprocessorMessage::MouseUp { editor_mouse_state } => {
				let mouse_state = editor_mouse_state.to_mouse_state();
				self.mouse.position = mouse_state.position;

				self.translate_mouse_event(mouse_state, false, responses);
			}
		}
	}
}

impl InputPreprocessorMessageHandler {
	fn translate_mouse_event(&mut self, mut new_state: MouseState, allow_first_button_down: bool, responses: &mut VecDeque<Message>) {
		// Only the left button drives the tools, the other buttons are tracked but not mapped
		let old_down = self.mouse.mouse_keys.contains(MouseKeys::LEFT);
		let new_down = new_state.mouse_keys.contains(MouseKeys::LEFT);
		if !old_down && new_down {
			if allow_first_button_down || self.mouse.mouse_keys != MouseKeys::NONE {
				responses.push_back(ToolMessage::PointerDown.into());
			} else {
				// Required to stop a button up being emitted for a button down that happened outside the canvas
				new_state.mouse_keys ^= MouseKeys::LEFT;
			}
		}
		if old_down && !new_down {
			responses.push_back(ToolMessage::PointerUp.into());
		}

		self.mouse = new_state;
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::input::mouse::EditorMouseState;

	#[test]
	fn pointer_down_maps_the_left_button() {
		let mut input_preprocessor = InputPreprocessorMessageHandler::default();

		let mut editor_mouse_state = EditorMouseState::from_editor_position(4., 809.);
		editor_mouse_state.mouse_keys = MouseKeys::LEFT;
		let message = InputPreprocessorMessage::MouseDown { editor_mouse_state };

		let mut responses = VecDeque::new();
		input_preprocessor.process_action(message, (), &mut responses);

		assert_eq!(input_preprocessor.mouse.position, (4., 809.).into());
		assert_eq!(responses.pop_front(), Some(ToolMessage::PointerDown.into()));
	}

	#[test]
	fn pointer_move_reports_motion_and_releases() {
		let mut input_preprocessor = InputPreprocessorMessageHandler::default();

		let mut editor_mouse_state = EditorMouseState::from_editor_position(0., 0.);
		editor_mouse_state.mouse_keys = MouseKeys::LEFT;
		input_preprocessor.process_action(InputPreprocessorMessage::MouseDown { editor_mouse_state }, (), &mut VecDeque::new());

		// Moving with the button released is both a move and a button up
		let editor_mouse_state = EditorMouseState::from_editor_position(10., 10.);
		let mut responses = VecDeque::new();
		input_preprocessor.process_action(InputPreprocessorMessage::MouseMove { editor_mouse_state }, (), &mut responses);

		assert_eq!(responses.pop_front(), Some(ToolMessage::PointerMove.into()));
		assert_eq!(responses.pop_front(), Some(ToolMessage::PointerUp.into()));
	}

	#[test]
	fn button_down_outside_canvas_is_not_mapped() {
		let mut input_preprocessor = InputPreprocessorMessageHandler::default();

		let mut editor_mouse_state = EditorMouseState::from_editor_position(2., 3.);
		editor_mouse_state.mouse_keys = MouseKeys::LEFT;
		let mut responses = VecDeque::new();
		input_preprocessor.process_action(InputPreprocessorMessage::MouseMove { editor_mouse_state }, (), &mut responses);

		assert_eq!(responses.pop_front(), Some(ToolMessage::PointerMove.into()));
		assert_eq!(responses.pop_front(), None);
		// The swallowed press leaves the button up, so no spurious release follows
		assert_eq!(input_preprocessor.mouse.mouse_keys, MouseKeys::NONE);
	}
}
