use crate::frontend::MouseCursorIcon;
use crate::message_prelude::*;
use crate::misc::HintData;
use crate::viewport_tools::tool::ToolActionHandlerData;

/// The editor's default mode. It draws nothing and keeps no state; pointer
/// events are left to the host, which is what "no tool active" means to an
/// embedder.
#[derive(Clone, Debug, Default)]
pub struct Select;

impl<'a> MessageHandler<ToolMessage, ToolActionHandlerData<'a>> for Select {
	fn process_action(&mut self, action: ToolMessage, _data: ToolActionHandlerData<'a>, responses: &mut VecDeque<Message>) {
		match action {
			ToolMessage::UpdateHints => responses.push_back(FrontendMessage::UpdateInputHints { hint_data: HintData(Vec::new()) }.into()),
			ToolMessage::UpdateCursor => responses.push_back(FrontendMessage::UpdateMouseCursor { cursor: MouseCursorIcon::Default }.into()),
			_ => (),
		}
	}
}
