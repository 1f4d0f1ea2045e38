use super::annotation::Annotation;
use crate::communication::generate_uuid;
use crate::consts::{ANGLE_DISPLAY_DECIMALS, CONTROL_FALLBACK_DIVISOR};

use scene::LayerId;

use glam::DVec2;

/// One end of an angle measurement.
///
/// `p1` and `p2` are the endpoints of the segment under the pointer and `p3`
/// is the pointer position at the moment the segment resolved, the vertex the
/// arc is drawn against. A free end carries only `p3`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentEndpoints {
	pub id: Option<LayerId>,
	pub p1: Option<DVec2>,
	pub p2: Option<DVec2>,
	pub p3: DVec2,
}

impl SegmentEndpoints {
	pub fn resolved(id: LayerId, p1: DVec2, p2: DVec2, p3: DVec2) -> Self {
		Self {
			id: Some(id),
			p1: Some(p1),
			p2: Some(p2),
			p3,
		}
	}

	pub fn free(p3: DVec2) -> Self {
		Self { id: None, p1: None, p2: None, p3 }
	}
}

/// The transient state of one measurement gesture, alive from the pointer-down
/// that resolves a first segment to the pointer-up that ends the gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleSession {
	pub start: SegmentEndpoints,
	pub end: SegmentEndpoints,
	/// Id of the annotation group layer, fixed for the life of the session.
	pub annotation_id: LayerId,
	/// Handle to the rendered nodes once the first upsert has created them.
	pub annotation: Option<Annotation>,
}

impl AngleSession {
	/// Begins a session at `start`. `end` mirrors `start` until a second
	/// segment resolves, so the geometry below is always defined.
	pub fn begin(start: SegmentEndpoints) -> Self {
		Self {
			start,
			end: start,
			annotation_id: generate_uuid(),
			annotation: None,
		}
	}
}

/// The angle between two directed segments in degrees, mapped into a half
/// turn and rounded to the display precision.
///
/// Each point pair is read as the vector from its first to its second point,
/// and the signed angle between the vectors comes from `atan2` of their cross
/// and dot products. Negative angles are shifted up by 180°, so the result
/// names one of the two supplementary angles at the crossing, picked by the
/// orientation of the operands.
pub fn angle_between(start_p1: DVec2, start_p2: DVec2, end_p1: DVec2, end_p2: DVec2) -> f64 {
	let a = start_p2 - start_p1;
	let b = end_p2 - end_p1;

	let cross = a.x * b.y - a.y * b.x;
	let dot = a.x * b.x + a.y * b.y;

	let mut angle = cross.atan2(dot).to_degrees();
	if angle < 0. {
		angle += 180.;
	}

	round_to_decimals(angle, ANGLE_DISPLAY_DECIMALS)
}

/// Rounds `value` to `decimals` decimal digits by shifting the exponent,
/// rounding half away from zero, and shifting back.
///
/// The shift happens in floating point, so values sitting exactly on a .5
/// boundary can tip either way with the representation error. NaN rounds to
/// zero.
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
	let shift = 10_f64.powi(decimals);
	let rounded = (value * shift).round() / shift;

	if rounded.is_nan() {
		0.
	} else {
		rounded
	}
}

/// Control point for the annotation arc, at the intersection of two lines
/// laid through the session's vertices.
///
/// Each resolved segment contributes the slope `(x1 - x2) / (y2 - y1)`, the
/// slope of the line perpendicular to the segment, anchored at the segment's
/// `p3` vertex in point-slope form. Without a distinct second segment the end
/// slope is the negative reciprocal of the start slope. The two line
/// equations are eliminated for their intersection, which is returned with
/// both coordinates made absolute.
///
/// Returns `None` when the start segment's endpoints are absent. Equal slopes
/// make the system singular and the intersection non-finite; the caller
/// decides what stands in for it.
pub fn solve_control_point(session: &AngleSession) -> Option<DVec2> {
	let (start_p1, start_p2) = (session.start.p1?, session.start.p2?);
	let start_slope = (start_p1.x - start_p2.x) / (start_p2.y - start_p1.y);

	let end_slope = match (session.end.id, session.end.p1, session.end.p2) {
		(Some(id), Some(end_p1), Some(end_p2)) if session.start.id != Some(id) => (end_p1.x - end_p2.x) / (end_p2.y - end_p1.y),
		_ => -1. / start_slope,
	};

	let start_intercept = start_slope * session.start.p3.x - session.start.p3.y;
	let end_intercept = end_slope * session.end.p3.x - session.end.p3.y;

	let x = (start_intercept - end_intercept) / (start_slope - end_slope);
	let y = start_slope * x - start_intercept;

	Some(DVec2::new(x.abs(), y.abs()))
}

/// Stand-in control point when the solver has nothing usable: the chord
/// midpoint pushed out along the chord's perpendicular, with the bulge scaled
/// by the midpoint's distance from the origin.
pub fn fallback_control_point(start_p3: DVec2, end_p3: DVec2) -> DVec2 {
	let midpoint = (start_p3 + end_p3) / 2.;
	let chord = end_p3 - start_p3;
	if chord.length_squared() == 0. {
		return midpoint;
	}

	let normal = DVec2::new(-chord.y, chord.x).normalize();
	midpoint + normal * (midpoint.length() / CONTROL_FALLBACK_DIVISOR)
}
