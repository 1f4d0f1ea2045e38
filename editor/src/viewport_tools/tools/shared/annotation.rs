use super::measurement::{self, AngleSession};
use crate::consts::{ANNOTATION_FONT_SIZE, ANNOTATION_STROKE_WEIGHT};
use crate::message_prelude::*;

use scene::color::Color;
use scene::layers::style::{Fill, Marker, PathStyle, Stroke};
use scene::path::PathCommand;
use scene::Operation;

/// Layer paths of the nodes making up one rendered annotation, from the
/// document root down. The session that created the nodes holds on to this so
/// later frames address the same nodes instead of growing new ones.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
	/// The folder wrapping the three nodes below.
	pub group: Vec<LayerId>,
	/// The `use` node referencing the label, carrying the backdrop filter.
	pub backdrop: Vec<LayerId>,
	/// The text node with the formatted degrees.
	pub label: Vec<LayerId>,
	/// The quadratic arc between the two vertices.
	pub arc: Vec<LayerId>,
}

/// Whether an upsert built the annotation or reshaped the existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upsert {
	Created,
	Updated,
}

/// Renders the session's current geometry into the scene.
///
/// The first call allocates the node ids and queues the operations that build
/// the annotation group at the front of the active layer, where it paints
/// underneath the segments it measures. Every later call reshapes the arc and
/// label in place through the handle stored in the session, so per-move
/// updates never duplicate nodes.
///
/// The angle label reads `0°` while either segment's endpoints are missing.
/// A non-finite control point from the solver is replaced by the fallback
/// control point, keeping every queued coordinate finite.
pub fn upsert(session: &mut AngleSession, active_layer: &[LayerId], responses: &mut VecDeque<Message>) -> Upsert {
	let angle = match (session.start.p1, session.start.p2, session.end.p1, session.end.p2) {
		(Some(start_p1), Some(start_p2), Some(end_p1), Some(end_p2)) => measurement::angle_between(start_p1, start_p2, end_p1, end_p2),
		_ => 0.,
	};
	let label = format!("{}°", angle);

	let midpoint = (session.start.p3 + session.end.p3) / 2.;
	let solved = measurement::solve_control_point(session)
		.filter(|point| point.x.is_finite() && point.y.is_finite())
		.unwrap_or_else(|| measurement::fallback_control_point(session.start.p3, session.end.p3));
	let control = (midpoint + solved) / 2.;

	let commands = vec![PathCommand::MoveTo(session.start.p3), PathCommand::QuadTo { control, end: session.end.p3 }];

	match &session.annotation {
		Some(annotation) => {
			responses.push_back(Operation::SetShapePath { path: annotation.arc.clone(), commands }.into());
			responses.push_back(Operation::SetTextContent { path: annotation.label.clone(), text: label }.into());
			responses.push_back(Operation::SetTextAnchor { path: annotation.label.clone(), anchor: control }.into());

			Upsert::Updated
		}
		None => {
			let group = [active_layer, &[session.annotation_id]].concat();
			let backdrop_id = generate_uuid();
			let label_id = generate_uuid();
			let arc_id = generate_uuid();
			let annotation = Annotation {
				backdrop: [group.as_slice(), &[backdrop_id]].concat(),
				label: [group.as_slice(), &[label_id]].concat(),
				arc: [group.as_slice(), &[arc_id]].concat(),
				group,
			};

			responses.push_back(
				Operation::AddFolder {
					path: annotation.group.clone(),
					insert_index: 0,
				}
				.into(),
			);
			responses.push_back(
				Operation::AddUse {
					path: annotation.backdrop.clone(),
					insert_index: -1,
					href: label_id,
					backdrop: true,
				}
				.into(),
			);
			responses.push_back(
				Operation::AddText {
					path: annotation.label.clone(),
					insert_index: -1,
					text: label,
					anchor: control,
					font_size: ANNOTATION_FONT_SIZE,
					style: PathStyle::new(None, Some(Fill::new(Color::BLACK))),
				}
				.into(),
			);
			responses.push_back(
				Operation::AddShape {
					path: annotation.arc.clone(),
					insert_index: -1,
					commands,
					style: PathStyle::with_marker_end(Some(Stroke::new(Color::RED, ANNOTATION_STROKE_WEIGHT)), Some(Fill::none()), Marker::Arrow),
				}
				.into(),
			);

			session.annotation = Some(annotation);

			Upsert::Created
		}
	}
}

/// Deletes the annotation group if the session ever rendered one.
pub fn discard(session: &mut AngleSession, responses: &mut VecDeque<Message>) {
	if let Some(annotation) = session.annotation.take() {
		responses.push_back(Operation::DeleteLayer { path: annotation.group }.into());
	}
}

#[cfg(test)]
mod test {
	use super::super::measurement::SegmentEndpoints;
	use super::*;
	use crate::communication::set_uuid_seed;

	use glam::DVec2;

	fn tracking_session() -> AngleSession {
		set_uuid_seed(0);
		let start = SegmentEndpoints::resolved(1, DVec2::new(0., 0.), DVec2::new(0., 10.), DVec2::new(0., 5.));
		let mut session = AngleSession::begin(start);
		session.end = SegmentEndpoints::resolved(2, DVec2::new(0., 0.), DVec2::new(10., 0.), DVec2::new(5., 0.));
		session
	}

	fn queued_operations(responses: &VecDeque<Message>) -> Vec<Operation> {
		responses
			.iter()
			.filter_map(|message| match message {
				Message::Document(DocumentMessage::DispatchOperation(operation)) => Some((**operation).clone()),
				_ => None,
			})
			.collect()
	}

	#[test]
	fn first_upsert_builds_the_group_in_front() {
		let mut session = tracking_session();
		let mut responses = VecDeque::new();

		assert_eq!(upsert(&mut session, &[], &mut responses), Upsert::Created);
		let handle = session.annotation.clone().unwrap();

		let operations = queued_operations(&responses);
		assert_eq!(operations.len(), 4);
		match &operations[0] {
			Operation::AddFolder { path, insert_index } => {
				assert_eq!(path, &handle.group);
				assert_eq!(*insert_index, 0);
			}
			operation => panic!("expected AddFolder, got {:?}", operation),
		}
		match &operations[1] {
			Operation::AddUse { path, href, backdrop, .. } => {
				assert_eq!(path, &handle.backdrop);
				assert_eq!(Some(href), handle.label.last());
				assert!(*backdrop);
			}
			operation => panic!("expected AddUse, got {:?}", operation),
		}
		match &operations[2] {
			Operation::AddText { path, text, .. } => {
				assert_eq!(path, &handle.label);
				assert_eq!(text, "90°");
			}
			operation => panic!("expected AddText, got {:?}", operation),
		}
		match &operations[3] {
			Operation::AddShape { path, commands, .. } => {
				assert_eq!(path, &handle.arc);
				assert_eq!(commands[0], PathCommand::MoveTo(DVec2::new(0., 5.)));
				assert!(matches!(commands[1], PathCommand::QuadTo { end, .. } if end == DVec2::new(5., 0.)));
			}
			operation => panic!("expected AddShape, got {:?}", operation),
		}
	}

	#[test]
	fn second_upsert_reshapes_the_same_nodes() {
		let mut session = tracking_session();
		let mut responses = VecDeque::new();
		upsert(&mut session, &[], &mut responses);
		let handle = session.annotation.clone().unwrap();

		session.end = SegmentEndpoints::free(DVec2::new(8., 8.));
		let mut responses = VecDeque::new();
		assert_eq!(upsert(&mut session, &[], &mut responses), Upsert::Updated);
		assert_eq!(session.annotation, Some(handle.clone()));

		let operations = queued_operations(&responses);
		assert_eq!(operations.len(), 3);
		assert!(matches!(&operations[0], Operation::SetShapePath { path, .. } if path == &handle.arc));
		// A free end has no second pair of endpoints, so the label reads zero
		assert!(matches!(&operations[1], Operation::SetTextContent { path, text } if path == &handle.label && text == "0°"));
		assert!(matches!(&operations[2], Operation::SetTextAnchor { path, .. } if path == &handle.label));
	}

	#[test]
	fn annotation_paths_descend_from_the_active_layer() {
		let mut session = tracking_session();
		let mut responses = VecDeque::new();
		upsert(&mut session, &[40, 41], &mut responses);

		let handle = session.annotation.clone().unwrap();
		assert_eq!(handle.group[..2], [40, 41]);
		assert_eq!(handle.group[2], session.annotation_id);
		assert_eq!(handle.arc[..3], handle.group[..]);
	}

	#[test]
	fn non_finite_solver_output_falls_back_to_a_finite_arc() {
		// Both vertices relate to one horizontal line, so the perpendicular
		// slopes blow up and the solver goes non-finite
		set_uuid_seed(0);
		let start = SegmentEndpoints::resolved(1, DVec2::new(0., 5.), DVec2::new(10., 5.), DVec2::new(2., 5.));
		let mut session = AngleSession::begin(start);
		session.end = SegmentEndpoints::free(DVec2::new(8., 8.));

		let mut responses = VecDeque::new();
		upsert(&mut session, &[], &mut responses);

		let operations = queued_operations(&responses);
		match &operations[3] {
			Operation::AddShape { commands, .. } => match commands[1] {
				PathCommand::QuadTo { control, end } => {
					assert!(control.x.is_finite() && control.y.is_finite(), "{:?}", control);
					assert_eq!(end, DVec2::new(8., 8.));
				}
				command => panic!("expected QuadTo, got {:?}", command),
			},
			operation => panic!("expected AddShape, got {:?}", operation),
		}
	}

	#[test]
	fn discard_deletes_the_group_once() {
		let mut session = tracking_session();
		let mut responses = VecDeque::new();
		upsert(&mut session, &[], &mut responses);
		let group = session.annotation.clone().unwrap().group;

		let mut responses = VecDeque::new();
		discard(&mut session, &mut responses);
		assert_eq!(queued_operations(&responses), [Operation::DeleteLayer { path: group }]);
		assert_eq!(session.annotation, None);

		let mut responses = VecDeque::new();
		discard(&mut session, &mut responses);
		assert!(responses.is_empty());
	}
}
