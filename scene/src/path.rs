use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One command of a path's command list. Coordinates are document space;
/// `MoveBy` and `LineBy` are offsets from the current point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
	MoveTo(DVec2),
	MoveBy(DVec2),
	LineTo(DVec2),
	LineBy(DVec2),
	QuadTo { control: DVec2, end: DVec2 },
	Close,
}

/// One straight run of a path, from `p1` to `p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
	pub p1: DVec2,
	pub p2: DVec2,
}

/// Walks a command list and yields the straight segments its line commands trace out.
///
/// Move commands relocate the current point without yielding anything and close
/// commands are skipped. Curve commands are not flattened: they yield no segment
/// and leave the current point untouched, so a curved path simply offers fewer
/// (possibly zero) segments to match against.
pub fn segments(commands: &[PathCommand]) -> PathSegments<'_> {
	PathSegments {
		commands: commands.iter(),
		current: DVec2::ZERO,
	}
}

/// The first segment of `commands` that `probe` falls on, walking the commands
/// lazily and stopping at the first hit.
///
/// The containment test is [`within_segment_bounds`], an interval check rather
/// than a collinearity check. Segments whose endpoints share an x or a y
/// coordinate never match here, which keeps zero-length and axis-parallel spans
/// (whose bounds degenerate to a line) from producing spurious hits.
pub fn segment_containing(commands: &[PathCommand], probe: DVec2) -> Option<Segment> {
	segments(commands).find(|segment| segment.p1.x != segment.p2.x && segment.p1.y != segment.p2.y && within_segment_bounds(segment.p1, segment.p2, probe))
}

/// True if `probe` lies within the axis-aligned bounds spanned by `p1` and `p2`,
/// ends included. The endpoints may be given in either order.
pub fn within_segment_bounds(p1: DVec2, p2: DVec2, probe: DVec2) -> bool {
	let between_x = (p1.x <= probe.x && probe.x <= p2.x) || (p2.x <= probe.x && probe.x <= p1.x);
	let between_y = (p1.y <= probe.y && probe.y <= p2.y) || (p2.y <= probe.y && probe.y <= p1.y);
	between_x && between_y
}

/// Lazy iterator over the straight segments of a command list. Construct it with [`segments`].
#[derive(Debug, Clone)]
pub struct PathSegments<'a> {
	commands: std::slice::Iter<'a, PathCommand>,
	current: DVec2,
}

impl<'a> Iterator for PathSegments<'a> {
	type Item = Segment;

	fn next(&mut self) -> Option<Self::Item> {
		for command in self.commands.by_ref() {
			match *command {
				PathCommand::MoveTo(point) => self.current = point,
				PathCommand::MoveBy(offset) => self.current += offset,
				PathCommand::LineTo(point) => {
					let segment = Segment { p1: self.current, p2: point };
					self.current = point;
					return Some(segment);
				}
				PathCommand::LineBy(offset) => {
					let segment = Segment {
						p1: self.current,
						p2: self.current + offset,
					};
					self.current = segment.p2;
					return Some(segment);
				}
				PathCommand::QuadTo { .. } | PathCommand::Close => (),
			}
		}
		None
	}
}

/// Serialize the commands as an SVG path `d` attribute.
pub fn to_svg(commands: &[PathCommand]) -> String {
	let mut d = String::new();
	for (index, command) in commands.iter().enumerate() {
		if index > 0 {
			d.push(' ');
		}
		let _ = match *command {
			PathCommand::MoveTo(point) => write!(d, "M{} {}", point.x, point.y),
			PathCommand::MoveBy(offset) => write!(d, "m{} {}", offset.x, offset.y),
			PathCommand::LineTo(point) => write!(d, "L{} {}", point.x, point.y),
			PathCommand::LineBy(offset) => write!(d, "l{} {}", offset.x, offset.y),
			PathCommand::QuadTo { control, end } => write!(d, "Q{} {} {} {}", control.x, control.y, end.x, end.y),
			PathCommand::Close => write!(d, "Z"),
		};
	}
	d
}

#[cfg(test)]
mod test {
	use super::*;

	fn zigzag() -> Vec<PathCommand> {
		vec![
			PathCommand::MoveTo(DVec2::new(10., 10.)),
			PathCommand::LineTo(DVec2::new(20., 30.)),
			PathCommand::LineBy(DVec2::new(15., -5.)),
			PathCommand::Close,
		]
	}

	#[test]
	fn segments_walk_absolute_and_relative_commands() {
		let all: Vec<_> = segments(&zigzag()).collect();
		assert_eq!(
			all,
			vec![
				Segment {
					p1: DVec2::new(10., 10.),
					p2: DVec2::new(20., 30.),
				},
				Segment {
					p1: DVec2::new(20., 30.),
					p2: DVec2::new(35., 25.),
				},
			]
		);
	}

	#[test]
	fn segments_of_moves_only() {
		let commands = vec![PathCommand::MoveTo(DVec2::new(1., 2.)), PathCommand::MoveBy(DVec2::new(3., 4.))];
		assert_eq!(segments(&commands).count(), 0);
		assert_eq!(segments(&[]).count(), 0);
	}

	#[test]
	fn curves_yield_no_segments_and_keep_the_current_point() {
		let commands = vec![
			PathCommand::MoveTo(DVec2::new(0., 0.)),
			PathCommand::QuadTo {
				control: DVec2::new(50., 50.),
				end: DVec2::new(100., 0.),
			},
			PathCommand::LineTo(DVec2::new(10., 10.)),
		];
		// The line starts from the move target, not from the curve's endpoint.
		let all: Vec<_> = segments(&commands).collect();
		assert_eq!(
			all,
			vec![Segment {
				p1: DVec2::new(0., 0.),
				p2: DVec2::new(10., 10.),
			}]
		);
	}

	#[test]
	fn segment_containing_returns_the_first_hit() {
		// (20, 28) is inside the bounds of both zigzag segments; the first one wins.
		let hit = segment_containing(&zigzag(), DVec2::new(20., 28.));
		assert_eq!(
			hit,
			Some(Segment {
				p1: DVec2::new(10., 10.),
				p2: DVec2::new(20., 30.),
			})
		);
	}

	#[test]
	fn segment_containing_misses_outside_the_bounds() {
		assert_eq!(segment_containing(&zigzag(), DVec2::new(100., 100.)), None);
	}

	#[test]
	fn segment_containing_skips_axis_parallel_segments() {
		let commands = vec![
			PathCommand::MoveTo(DVec2::new(0., 0.)),
			PathCommand::LineTo(DVec2::new(100., 0.)),
			PathCommand::LineTo(DVec2::new(100., 100.)),
		];
		// Probes on either segment are rejected, their bounds have no area.
		assert_eq!(segment_containing(&commands, DVec2::new(50., 0.)), None);
		assert_eq!(segment_containing(&commands, DVec2::new(100., 50.)), None);
	}

	#[test]
	fn within_segment_bounds_is_order_independent() {
		let p1 = DVec2::new(10., 40.);
		let p2 = DVec2::new(30., 20.);
		assert!(within_segment_bounds(p1, p2, DVec2::new(15., 25.)));
		assert!(within_segment_bounds(p2, p1, DVec2::new(15., 25.)));
		assert!(within_segment_bounds(p1, p2, p1));
		assert!(!within_segment_bounds(p1, p2, DVec2::new(9., 25.)));
		assert!(!within_segment_bounds(p1, p2, DVec2::new(15., 45.)));
	}

	#[test]
	fn to_svg_formats_each_command() {
		let commands = vec![
			PathCommand::MoveTo(DVec2::new(10., 10.)),
			PathCommand::QuadTo {
				control: DVec2::new(20., 0.),
				end: DVec2::new(30., 10.),
			},
			PathCommand::LineBy(DVec2::new(5., 5.)),
			PathCommand::Close,
		];
		assert_eq!(to_svg(&commands), "M10 10 Q20 0 30 10 l5 5 Z");
	}
}
