use super::layer_info::LayerData;
use super::style::{PathStyle, SvgDefs};
use crate::path::{self, PathCommand};
use crate::LayerId;

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// A path described by a command list, rendered as an SVG `<path>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeLayer {
	pub commands: Vec<PathCommand>,
	pub style: PathStyle,
}

impl ShapeLayer {
	pub fn new(commands: Vec<PathCommand>, style: PathStyle) -> Self {
		Self { commands, style }
	}
}

impl LayerData for ShapeLayer {
	fn render(&self, svg: &mut String, defs: &mut SvgDefs, id: LayerId) {
		let _ = write!(svg, r#"<path id="{}" d="{}"{} />"#, id, path::to_svg(&self.commands), self.style.render(defs));
	}
}
