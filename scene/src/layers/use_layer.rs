use super::layer_info::LayerData;
use super::style::{self, SvgDefs};
use crate::consts::LABEL_BACKDROP_FILTER_ID;
use crate::LayerId;

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// A reference to another layer in the document, rendered as an SVG `<use>`.
///
/// With `backdrop` set, the shared label backdrop filter is applied to the
/// instance. Referencing the label of an annotation this way paints a flood
/// plate behind the label without duplicating its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UseLayer {
	pub href: LayerId,
	pub backdrop: bool,
}

impl UseLayer {
	pub fn new(href: LayerId, backdrop: bool) -> Self {
		Self { href, backdrop }
	}
}

impl LayerData for UseLayer {
	fn render(&self, svg: &mut String, defs: &mut SvgDefs, id: LayerId) {
		let _ = write!(svg, r##"<use id="{}" xlink:href="#{}""##, id, self.href);
		if self.backdrop {
			style::ensure_label_backdrop(defs);
			let _ = write!(svg, r##" filter="url(#{})""##, LABEL_BACKDROP_FILTER_ID);
		}
		svg.push_str(" />");
	}
}
