use super::layer_info::LayerData;
use super::style::{PathStyle, SvgDefs};
use crate::LayerId;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// A straight line between two endpoints, rendered as an SVG `<line>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineLayer {
	pub start: DVec2,
	pub end: DVec2,
	pub style: PathStyle,
}

impl LineLayer {
	pub fn new(start: DVec2, end: DVec2, style: PathStyle) -> Self {
		Self { start, end, style }
	}
}

impl LayerData for LineLayer {
	fn render(&self, svg: &mut String, defs: &mut SvgDefs, id: LayerId) {
		let _ = write!(
			svg,
			r#"<line id="{}" x1="{}" y1="{}" x2="{}" y2="{}"{} />"#,
			id,
			self.start.x,
			self.start.y,
			self.end.x,
			self.end.y,
			self.style.render(defs)
		);
	}
}
