use crate::color::Color;
use crate::consts::{ARROW_MARKER_ID, LABEL_BACKDROP_FILTER_ID, LABEL_BACKDROP_FLOOD_COLOR};

use serde::{Deserialize, Serialize};

const OPACITY_PRECISION: usize = 3;

fn format_opacity(name: &str, opacity: f32) -> String {
	if (opacity - 1.).abs() > 10_f32.powi(-(OPACITY_PRECISION as i32)) {
		format!(r#" {}-opacity="{:.precision$}""#, name, opacity, precision = OPACITY_PRECISION)
	} else {
		String::new()
	}
}

/// Accumulates the shared `<defs>` referenced while rendering a document.
///
/// Shared definitions carry fixed element ids, so each may appear only once per
/// document no matter how many layers reference it. Layers register every def
/// they use through [`SvgDefs::add_once`] and duplicates are dropped here.
#[derive(Debug, Default)]
pub struct SvgDefs {
	markup: String,
	present: Vec<&'static str>,
}

impl SvgDefs {
	/// Appends the def markup produced by `markup` unless `id` was already added.
	pub fn add_once(&mut self, id: &'static str, markup: impl FnOnce() -> String) {
		if self.present.contains(&id) {
			return;
		}
		self.present.push(id);
		self.markup.push_str(&markup());
	}

	pub fn render(&self) -> &str {
		&self.markup
	}
}

/// Registers the arrowhead marker referenced by annotation arcs.
pub fn ensure_arrow_marker(defs: &mut SvgDefs) {
	defs.add_once(ARROW_MARKER_ID, || {
		format!(
			r##"<marker id="{}" refX="10" refY="6" markerUnits="strokeWidth" markerWidth="13" markerHeight="13" orient="auto" style="pointer-events:none"><path d="M2,2 L2,11 L10,6 L2,2" fill="#{}" /></marker>"##,
			ARROW_MARKER_ID,
			Color::RED.rgb_hex()
		)
	});
}

/// Registers the label backdrop filter, a flood xor-composited with the text it is applied to.
pub fn ensure_label_backdrop(defs: &mut SvgDefs) {
	defs.add_once(LABEL_BACKDROP_FILTER_ID, || {
		format!(
			r#"<filter id="{}" x="0" y="0" width="1" height="1"><feFlood flood-color="{}" /><feComposite in="SourceGraphic" operator="xor" /></filter>"#,
			LABEL_BACKDROP_FILTER_ID, LABEL_BACKDROP_FLOOD_COLOR
		)
	});
}

/// End-of-path markers a stroked layer can reference.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Marker {
	Arrow,
}

impl Marker {
	pub fn render(&self, defs: &mut SvgDefs) -> String {
		match self {
			Marker::Arrow => {
				ensure_arrow_marker(defs);
				format!(r##" marker-end="url(#{})""##, ARROW_MARKER_ID)
			}
		}
	}
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Fill {
	color: Option<Color>,
}
impl Fill {
	pub fn new(color: Color) -> Self {
		Self { color: Some(color) }
	}
	pub fn color(&self) -> Option<Color> {
		self.color
	}
	pub const fn none() -> Self {
		Self { color: None }
	}
	pub fn render(&self) -> String {
		match self.color {
			Some(c) => format!(r##" fill="#{}"{}"##, c.rgb_hex(), format_opacity("fill", c.a())),
			None => r#" fill="none""#.to_string(),
		}
	}
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Stroke {
	color: Color,
	width: f32,
}

impl Stroke {
	pub const fn new(color: Color, width: f32) -> Self {
		Self { color, width }
	}
	pub fn color(&self) -> Color {
		self.color
	}
	pub fn width(&self) -> f32 {
		self.width
	}
	pub fn render(&self) -> String {
		format!(r##" stroke="#{}"{} stroke-width="{}""##, self.color.rgb_hex(), format_opacity("stroke", self.color.a()), self.width)
	}
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PathStyle {
	stroke: Option<Stroke>,
	fill: Option<Fill>,
	marker_end: Option<Marker>,
}
impl PathStyle {
	pub fn new(stroke: Option<Stroke>, fill: Option<Fill>) -> Self {
		Self { stroke, fill, marker_end: None }
	}
	pub fn with_marker_end(stroke: Option<Stroke>, fill: Option<Fill>, marker: Marker) -> Self {
		Self {
			stroke,
			fill,
			marker_end: Some(marker),
		}
	}
	pub fn fill(&self) -> Option<Fill> {
		self.fill
	}
	pub fn stroke(&self) -> Option<Stroke> {
		self.stroke
	}
	pub fn marker_end(&self) -> Option<Marker> {
		self.marker_end
	}

	pub fn render(&self, defs: &mut SvgDefs) -> String {
		let fill_attribute = match self.fill {
			Some(fill) => fill.render(),
			None => String::new(),
		};
		let stroke_attribute = match self.stroke {
			Some(stroke) => stroke.render(),
			None => String::new(),
		};
		let marker_attribute = match self.marker_end {
			Some(marker) => marker.render(defs),
			None => String::new(),
		};
		format!("{}{}{}", fill_attribute, stroke_attribute, marker_attribute)
	}
}
