use crate::message_prelude::*;
use crate::misc::EditorError;

use scene::{Document, DocumentResponse, LayerId, Operation};

use std::collections::VecDeque;

#[derive(PartialEq, Clone, Debug)]
pub enum DocumentMessage {
	ContextChanged,
	DispatchOperation(Box<Operation>),
	RenderDocument,
	SetActiveLayer { path: Vec<LayerId> },
}

/// Owns the scene document and the path of the folder that tools place new
/// layers into.
#[derive(Debug, Clone, Default)]
pub struct DocumentMessageHandler {
	pub scene_document: Document,
	pub active_layer: Vec<LayerId>,
}

impl MessageHandler<DocumentMessage, ()> for DocumentMessageHandler {
	fn process_action(&mut self, message: DocumentMessage, _data: (), responses: &mut VecDeque<Message>) {
		use DocumentMessage::*;

		match message {
			ContextChanged => {
				// The host may have replaced or restructured the document out from
				// under the editor, leaving the cached layer path dangling.
				if self.scene_document.folder(&self.active_layer).is_err() {
					log::warn!("Active layer {:?} is gone after a context change", self.active_layer);
					self.active_layer = Vec::new();
				}
			}
			DispatchOperation(operation) => match self.scene_document.handle_operation(&operation) {
				Ok(Some(document_responses)) => {
					// Only a change to the rendered output needs follow-up work.
					if document_responses.contains(&DocumentResponse::DocumentChanged) {
						responses.push_back(RenderDocument.into())
					}
				}
				Err(error) => log::error!("DocumentError: {:?}", error),
				Ok(_) => (),
			},
			RenderDocument => responses.push_back(
				FrontendMessage::UpdateCanvas {
					document: self.scene_document.render_root(),
				}
				.into(),
			),
			SetActiveLayer { path } => match self.scene_document.folder(&path) {
				Ok(_) => self.active_layer = path,
				Err(error) => {
					log::warn!("SetActiveLayer: {}", EditorError::from(error));
					self.active_layer = Vec::new();
				}
			},
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn add_folder(handler: &mut DocumentMessageHandler, responses: &mut VecDeque<Message>, id: LayerId) {
		let operation = Operation::AddFolder {
			path: vec![id],
			insert_index: -1,
		};
		handler.process_action(operation.into(), (), responses);
	}

	#[test]
	fn dispatched_operations_schedule_a_render() {
		let mut handler = DocumentMessageHandler::default();
		let mut responses = VecDeque::new();

		add_folder(&mut handler, &mut responses, 1);

		assert!(handler.scene_document.layer(&[1]).is_ok());
		assert_eq!(responses, [Message::Document(DocumentMessage::RenderDocument)]);
	}

	#[test]
	fn failed_operations_leave_the_queue_untouched() {
		let mut handler = DocumentMessageHandler::default();
		let mut responses = VecDeque::new();

		let operation = Operation::SetTextContent {
			path: vec![404],
			text: "0°".into(),
		};
		handler.process_action(operation.into(), (), &mut responses);

		assert!(responses.is_empty());
	}

	#[test]
	fn active_layer_falls_back_to_the_root() {
		let mut handler = DocumentMessageHandler::default();
		let mut responses = VecDeque::new();
		add_folder(&mut handler, &mut responses, 1);

		handler.process_action(DocumentMessage::SetActiveLayer { path: vec![1] }, (), &mut responses);
		assert_eq!(handler.active_layer, [1]);

		handler.process_action(DocumentMessage::SetActiveLayer { path: vec![99] }, (), &mut responses);
		assert!(handler.active_layer.is_empty());
	}

	#[test]
	fn context_change_drops_a_stale_active_layer() {
		let mut handler = DocumentMessageHandler::default();
		let mut responses = VecDeque::new();
		add_folder(&mut handler, &mut responses, 1);
		handler.process_action(DocumentMessage::SetActiveLayer { path: vec![1] }, (), &mut responses);

		// A context change with the folder still present keeps the path
		handler.process_action(DocumentMessage::ContextChanged, (), &mut responses);
		assert_eq!(handler.active_layer, [1]);

		let operation = Operation::DeleteLayer { path: vec![1] };
		handler.process_action(operation.into(), (), &mut responses);
		handler.process_action(DocumentMessage::ContextChanged, (), &mut responses);
		assert!(handler.active_layer.is_empty());
	}
}
