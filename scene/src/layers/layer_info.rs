use super::folder_layer::FolderLayer;
use super::line_layer::LineLayer;
use super::shape_layer::ShapeLayer;
use super::style::SvgDefs;
use super::text_layer::TextLayer;
use super::use_layer::UseLayer;
use crate::DocumentError;
use crate::LayerId;

use serde::{Deserialize, Serialize};

/// The payload of a layer, one variant per layer kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayerDataType {
	Folder(FolderLayer),
	Line(LineLayer),
	Shape(ShapeLayer),
	Text(TextLayer),
	Use(UseLayer),
}

impl LayerDataType {
	pub fn inner(&self) -> &dyn LayerData {
		match self {
			LayerDataType::Folder(folder) => folder,
			LayerDataType::Line(line) => line,
			LayerDataType::Shape(shape) => shape,
			LayerDataType::Text(text) => text,
			LayerDataType::Use(reference) => reference,
		}
	}
}

/// The behavior every layer kind implements.
pub trait LayerData {
	/// Appends the layer's markup to `svg`. The layer's id is written out as the
	/// element id so references can target it, and any shared definitions the
	/// markup relies on are registered in `defs`.
	fn render(&self, svg: &mut String, defs: &mut SvgDefs, id: LayerId);
}

impl LayerData for LayerDataType {
	fn render(&self, svg: &mut String, defs: &mut SvgDefs, id: LayerId) {
		self.inner().render(svg, defs, id)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
	/// Whether the layer is rendered and offered as an annotation target.
	pub visible: bool,
	/// An optional display name, unused by rendering.
	pub name: Option<String>,
	/// The layer kind and its data.
	pub data: LayerDataType,
}

impl Layer {
	pub fn new(data: LayerDataType) -> Self {
		Self { visible: true, name: None, data }
	}

	pub fn render(&self, svg: &mut String, defs: &mut SvgDefs, id: LayerId) {
		if !self.visible {
			return;
		}
		self.data.render(svg, defs, id)
	}

	pub fn as_folder(&self) -> Result<&FolderLayer, DocumentError> {
		match &self.data {
			LayerDataType::Folder(folder) => Ok(folder),
			_ => Err(DocumentError::NotAFolder),
		}
	}

	pub fn as_folder_mut(&mut self) -> Result<&mut FolderLayer, DocumentError> {
		match &mut self.data {
			LayerDataType::Folder(folder) => Ok(folder),
			_ => Err(DocumentError::NotAFolder),
		}
	}
}
