use super::shared::annotation;
use super::shared::measurement::{AngleSession, SegmentEndpoints};
use crate::document::DocumentMessageHandler;
use crate::frontend::MouseCursorIcon;
use crate::input::mouse::{MouseMotion, ViewportPosition};
use crate::input::InputPreprocessorMessageHandler;
use crate::message_prelude::*;
use crate::misc::{HintData, HintGroup, HintInfo};
use crate::viewport_tools::tool::{DocumentToolData, Fsm, ToolActionHandlerData};

use scene::layers::LayerDataType;
use scene::path::{segment_containing, within_segment_bounds, Segment};

use serde::{Deserialize, Serialize};

/// Measures the angle between two segments with a single drag: press on a
/// line or path to anchor the first leg, drag onto a second line, release to
/// keep the annotation.
#[derive(Default)]
pub struct Angle {
	fsm_state: AngleToolFsmState,
	data: AngleToolData,
}

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum AngleMessage {
	Abort,
	PointerDown,
	PointerMove,
	PointerUp,
}

impl<'a> MessageHandler<ToolMessage, ToolActionHandlerData<'a>> for Angle {
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
enum AngleToolFsmState {
	Idle,
	Picking,
	Tracking,
}

impl Default for AngleToolFsmState {
	fn default() -> Self {
		AngleToolFsmState::Idle
	}
}

#[derive(Clone, Debug, Default)]
struct AngleToolData {
	session: Option<AngleSession>,
}

impl Fsm for AngleToolFsmState {
	type ToolData = AngleToolData;

	fn transition(
		self,
		event: ToolMessage,
		document: &DocumentMessageHandler,
		_tool_data: &DocumentToolData,
		data: &mut Self::ToolData,
		input: &InputPreprocessorMessageHandler,
		responses: &mut VecDeque<Message>,
	) -> Self {
		use AngleMessage::*;
		use AngleToolFsmState::*;

		if let ToolMessage::Angle(event) = event {
			match (self, event) {
				(Idle, PointerDown) => match segment_under_pointer(document, input.mouse.position) {
					Some((id, segment)) => {
						let mut session = AngleSession::begin(SegmentEndpoints::resolved(id, segment.p1, segment.p2, input.mouse.position));
						annotation::upsert(&mut session, &document.active_layer, responses);
						data.session = Some(session);

						responses.push_back(FrontendMessage::CapturePointer { started: true }.into());

						Picking
					}
					None => Idle,
				},
				(Picking | Tracking, PointerMove) => match &mut data.session {
					Some(session) => {
						session.end = match line_under_pointer(document, input.mouse.position, session.start.id) {
							Some((id, segment)) => SegmentEndpoints::resolved(id, segment.p1, segment.p2, input.mouse.position),
							None => SegmentEndpoints::free(input.mouse.position),
						};
						annotation::upsert(session, &document.active_layer, responses);

						Tracking
					}
					None => Idle,
				},
				(Picking | Tracking, PointerUp) => {
					if let Some(mut session) = data.session.take() {
						// Without a resolved second segment there is nothing worth keeping
						if self == Picking || session.end.id.is_none() {
							annotation::discard(&mut session, responses);
						}
						responses.push_back(FrontendMessage::RetainActiveTool { keep: true }.into());
					}

					Idle
				}
				(Picking | Tracking, Abort) => {
					if let Some(mut session) = data.session.take() {
						annotation::discard(&mut session, responses);
					}

					Idle
				}
				// A pointer-down mid-session does not restart the gesture
				_ => self,
			}
		} else {
			self
		}
	}

	fn update_hints(&self, responses: &mut VecDeque<Message>) {
		let hint_data = match self {
			AngleToolFsmState::Idle => HintData(vec![HintGroup(vec![HintInfo {
				mouse: Some(MouseMotion::LmbDrag),
				label: String::from("Measure Angle"),
			}])]),
			AngleToolFsmState::Picking | AngleToolFsmState::Tracking => HintData(vec![HintGroup(vec![HintInfo {
				mouse: None,
				label: String::from("Release Over A Second Line"),
			}])]),
		};

		responses.push_back(FrontendMessage::UpdateInputHints { hint_data }.into());
	}

	fn update_cursor(&self, responses: &mut VecDeque<Message>) {
		responses.push_back(FrontendMessage::UpdateMouseCursor { cursor: MouseCursorIcon::Crosshair }.into());
	}
}

/// The first visible child of the active layer with a straight segment under
/// `probe`: a line matched through its endpoint bounds, or a path through the
/// first reduced segment containing the probe. Folders (committed annotations
/// among them), text, and references never qualify.
fn segment_under_pointer(document: &DocumentMessageHandler, probe: ViewportPosition) -> Option<(LayerId, Segment)> {
	document
		.scene_document
		.visible_children(&document.active_layer)
		.ok()?
		.find_map(|(id, layer)| match &layer.data {
			LayerDataType::Line(line) if within_segment_bounds(line.start, line.end, probe) => Some((id, Segment { p1: line.start, p2: line.end })),
			LayerDataType::Shape(shape) => segment_containing(&shape.commands, probe).map(|segment| (id, segment)),
			_ => None,
		})
}

/// The line under `probe` while a session runs. Only native lines qualify as
/// the second segment, and the segment the session started on never
/// re-matches.
fn line_under_pointer(document: &DocumentMessageHandler, probe: ViewportPosition, exclude: Option<LayerId>) -> Option<(LayerId, Segment)> {
	document
		.scene_document
		.visible_children(&document.active_layer)
		.ok()?
		.find_map(|(id, layer)| match &layer.data {
			LayerDataType::Line(line) if exclude != Some(id) && within_segment_bounds(line.start, line.end, probe) => Some((id, Segment { p1: line.start, p2: line.end })),
			_ => None,
		})
}
