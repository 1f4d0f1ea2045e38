use super::tool::{message_to_tool_type, standard_tool_message, StandardToolMessageType, ToolFsmState};
use crate::consts::DEFAULT_LANGUAGE;
use crate::document::DocumentMessageHandler;
use crate::input::InputPreprocessorMessageHandler;
use crate::locale;
use crate::message_prelude::*;

use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct ToolMessageHandler {
	tool_state: ToolFsmState,
}

impl MessageHandler<ToolMessage, (&DocumentMessageHandler, &InputPreprocessorMessageHandler)> for ToolMessageHandler {
	fn process_action(&mut self, message: ToolMessage, data: (&DocumentMessageHandler, &InputPreprocessorMessageHandler), responses: &mut VecDeque<Message>) {
		use ToolMessage::*;

		let (document, input) = data;
		match message {
			ActivateTool(tool_type) => {
				let old_tool = self.tool_state.tool_data.active_tool_type;

				// Do nothing if switching to the same tool
				if tool_type == old_tool {
					return;
				}

				// The outgoing tool takes its Abort transition before losing
				// the active slot; a queued abort would arrive too late
				if let Some(tool_message) = standard_tool_message(old_tool, StandardToolMessageType::Abort) {
					let document_data = &self.tool_state.document_tool_data;
					let tool_data = &mut self.tool_state.tool_data;
					if let Some(tool) = tool_data.tools.get_mut(&old_tool) {
						tool.process_action(tool_message, (document, document_data, input), responses);
					}
				}

				self.tool_state.tool_data.active_tool_type = tool_type;

				// Notify the frontend about the new active tool to be displayed
				let tool_name = match locale::bundle_for(DEFAULT_LANGUAGE) {
					Ok(bundle) => bundle.tool_title(tool_type).to_string(),
					Err(error) => {
						log::warn!("Tool titles are unavailable ({:?}); falling back to internal names", error);
						tool_type.to_string()
					}
				};
				responses.push_back(FrontendMessage::SetActiveTool { tool_name }.into());

				responses.push_back(UpdateHints.into());
				responses.push_back(UpdateCursor.into());
			}
			PointerDown => {
				if let Some(tool_message) = standard_tool_message(self.tool_state.tool_data.active_tool_type, StandardToolMessageType::PointerDown) {
					responses.push_front(tool_message.into());
				}
			}
			PointerMove => {
				if let Some(tool_message) = standard_tool_message(self.tool_state.tool_data.active_tool_type, StandardToolMessageType::PointerMove) {
					responses.push_front(tool_message.into());
				}
			}
			PointerUp => {
				if let Some(tool_message) = standard_tool_message(self.tool_state.tool_data.active_tool_type, StandardToolMessageType::PointerUp) {
					responses.push_front(tool_message.into());
				}
			}
			tool_message => {
				let tool_type = match &tool_message {
					UpdateCursor | UpdateHints => self.tool_state.tool_data.active_tool_type,
					tool_message => message_to_tool_type(tool_message),
				};
				let document_data = &self.tool_state.document_tool_data;
				let tool_data = &mut self.tool_state.tool_data;

				if let Some(tool) = tool_data.tools.get_mut(&tool_type) {
					// Events for a tool other than the active one are stale and dropped
					if tool_type == tool_data.active_tool_type {
						tool.process_action(tool_message, (document, document_data, input), responses);
					}
				}
			}
		}
	}
}
