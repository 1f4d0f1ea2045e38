use super::layer_info::LayerData;
use super::style::{PathStyle, SvgDefs};
use crate::LayerId;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// A text span anchored at a point, rendered as an SVG `<text>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLayer {
	pub text: String,
	/// The position of the start of the baseline.
	pub anchor: DVec2,
	pub font_size: f64,
	pub style: PathStyle,
}

impl TextLayer {
	pub fn new(text: String, anchor: DVec2, font_size: f64, style: PathStyle) -> Self {
		Self { text, anchor, font_size, style }
	}
}

impl LayerData for TextLayer {
	fn render(&self, svg: &mut String, defs: &mut SvgDefs, id: LayerId) {
		let _ = write!(
			svg,
			r#"<text id="{}" x="{}" y="{}" font-size="{}" text-anchor="start"{}>{}</text>"#,
			id,
			self.anchor.x,
			self.anchor.y,
			self.font_size,
			self.style.render(defs),
			escape(&self.text)
		);
	}
}

/// Escapes the characters that would terminate the text node early.
fn escape(text: &str) -> String {
	text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn markup_characters_are_escaped() {
		assert_eq!(escape("1 < 2 & 3 > 2"), "1 &lt; 2 &amp; 3 &gt; 2");
		assert_eq!(escape("63.43°"), "63.43°");
	}
}
