use crate::layers::style::PathStyle;
use crate::path::PathCommand;
use crate::LayerId;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The mutations a document accepts. Every edit to the layer tree goes
/// through [`Document::handle_operation`](crate::Document::handle_operation)
/// as one of these values.
///
/// A `path` is the chain of layer ids leading from the root to the affected
/// layer, with the last element naming the layer itself. An `insert_index`
/// may be negative to count from the end of the parent folder, so `-1`
/// appends and `0` inserts in front.
#[repr(C)]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Operation {
	AddFolder {
		path: Vec<LayerId>,
		insert_index: isize,
	},
	AddLine {
		path: Vec<LayerId>,
		insert_index: isize,
		start: DVec2,
		end: DVec2,
		style: PathStyle,
	},
	AddShape {
		path: Vec<LayerId>,
		insert_index: isize,
		commands: Vec<PathCommand>,
		style: PathStyle,
	},
	AddText {
		path: Vec<LayerId>,
		insert_index: isize,
		text: String,
		anchor: DVec2,
		font_size: f64,
		style: PathStyle,
	},
	AddUse {
		path: Vec<LayerId>,
		insert_index: isize,
		href: LayerId,
		backdrop: bool,
	},
	DeleteLayer {
		path: Vec<LayerId>,
	},
	SetLayerVisibility {
		path: Vec<LayerId>,
		visible: bool,
	},
	SetLineEndpoints {
		path: Vec<LayerId>,
		start: DVec2,
		end: DVec2,
	},
	SetShapePath {
		path: Vec<LayerId>,
		commands: Vec<PathCommand>,
	},
	SetTextAnchor {
		path: Vec<LayerId>,
		anchor: DVec2,
	},
	SetTextContent {
		path: Vec<LayerId>,
		text: String,
	},
}
