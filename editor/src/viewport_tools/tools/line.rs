use crate::consts::DEFAULT_LINE_WEIGHT;
use crate::document::DocumentMessageHandler;
use crate::frontend::MouseCursorIcon;
use crate::input::mouse::{MouseMotion, ViewportPosition};
use crate::input::InputPreprocessorMessageHandler;
use crate::message_prelude::*;
use crate::misc::{HintData, HintGroup, HintInfo};
use crate::viewport_tools::tool::{DocumentToolData, Fsm, ToolActionHandlerData};

use scene::layers::style::{PathStyle, Stroke};
use scene::Operation;

use serde::{Deserialize, Serialize};

#[derive(Default)]
pub struct Line {
	fsm_state: LineToolFsmState,
	data: LineToolData,
}

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum LineMessage {
	Abort,
	DragStart,
	DragStop,
	Redraw,
}

impl<'a> MessageHandler<ToolMessage, ToolActionHandlerData<'a>> for Line {
	fn process_action(&mut self, action: ToolMessage, data: ToolActionHandlerData<'a>, responses: &mut VecDeque<Message>) {
		if action == ToolMessage::UpdateHints {
			self.fsm_state.update_hints(responses);
			return;
		}

		if action == ToolMessage::UpdateCursor {
			self.fsm_state.update_cursor(responses);
			return;
		}

		let new_state = self.fsm_state.transition(action, data.0, data.1, &mut self.data, data.2, responses);

		if self.fsm_state != new_state {
			self.fsm_state = new_state;
			self.fsm_state.update_hints(responses);
			self.fsm_state.update_cursor(responses);
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineToolFsmState {
	Ready,
	Drawing,
}

impl Default for LineToolFsmState {
	fn default() -> Self {
		LineToolFsmState::Ready
	}
}

#[derive(Clone, Debug, Default)]
struct LineToolData {
	drag_start: ViewportPosition,
	path: Option<Vec<LayerId>>,
}

impl Fsm for LineToolFsmState {
	type ToolData = LineToolData;

	fn transition(
		self,
		event: ToolMessage,
		document: &DocumentMessageHandler,
		tool_data: &DocumentToolData,
		data: &mut Self::ToolData,
		input: &InputPreprocessorMessageHandler,
		responses: &mut VecDeque<Message>,
	) -> Self {
		use LineMessage::*;
		use LineToolFsmState::*;

		if let ToolMessage::Line(event) = event {
			match (self, event) {
				(Ready, DragStart) => {
					data.drag_start = input.mouse.position;
					let path = [document.active_layer.as_slice(), &[generate_uuid()]].concat();
					data.path = Some(path.clone());

					responses.push_back(
						Operation::AddLine {
							path,
							insert_index: -1,
							start: data.drag_start,
							end: data.drag_start,
							style: PathStyle::new(Some(Stroke::new(tool_data.primary_color, DEFAULT_LINE_WEIGHT)), None),
						}
						.into(),
					);

					Drawing
				}
				(Drawing, Redraw) => {
					if let Some(path) = &data.path {
						responses.push_back(
							Operation::SetLineEndpoints {
								path: path.clone(),
								start: data.drag_start,
								end: input.mouse.position,
							}
							.into(),
						);
					}

					Drawing
				}
				(Drawing, DragStop) => {
					if let Some(path) = data.path.take() {
						// A click with no drag leaves no zero-length line behind
						match data.drag_start == input.mouse.position {
							true => responses.push_back(Operation::DeleteLayer { path }.into()),
							false => responses.push_back(
								Operation::SetLineEndpoints {
									path,
									start: data.drag_start,
									end: input.mouse.position,
								}
								.into(),
							),
						}
					}

					Ready
				}
				(Drawing, Abort) => {
					if let Some(path) = data.path.take() {
						responses.push_back(Operation::DeleteLayer { path }.into());
					}

					Ready
				}
				_ => self,
			}
		} else {
			self
		}
	}

	fn update_hints(&self, responses: &mut VecDeque<Message>) {
		let hint_data = match self {
			LineToolFsmState::Ready => HintData(vec![HintGroup(vec![HintInfo {
				mouse: Some(MouseMotion::LmbDrag),
				label: String::from("Draw Line"),
			}])]),
			LineToolFsmState::Drawing => HintData(Vec::new()),
		};

		responses.push_back(FrontendMessage::UpdateInputHints { hint_data }.into());
	}

	fn update_cursor(&self, responses: &mut VecDeque<Message>) {
		responses.push_back(FrontendMessage::UpdateMouseCursor { cursor: MouseCursorIcon::Crosshair }.into());
	}
}
