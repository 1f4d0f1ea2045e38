use crate::consts::SVG_HEADER;
use crate::layers::style::SvgDefs;
use crate::layers::{FolderLayer, Layer, LayerDataType, LineLayer, ShapeLayer, TextLayer, UseLayer};
use crate::{DocumentError, DocumentResponse, Operation};

use serde::{Deserialize, Serialize};

/// Unique id of a layer within its parent folder. A chain of ids from the
/// root to a layer forms the layer's path.
pub type LayerId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
	/// The root of the layer tree, always a folder.
	pub root: Layer,
}

impl Default for Document {
	fn default() -> Self {
		Self {
			root: Layer::new(LayerDataType::Folder(FolderLayer::default())),
		}
	}
}

impl Document {
	/// Renders the whole document tree to an SVG string, shared defs included.
	pub fn render_root(&self) -> String {
		let mut markup = String::with_capacity(512);
		let mut defs = SvgDefs::default();
		if let Ok(folder) = self.root.as_folder() {
			for (id, layer) in folder.list_layers().iter().zip(folder.layers().iter()) {
				layer.render(&mut markup, &mut defs, *id);
			}
		}
		format!("{}<defs>{}</defs>{}</svg>", SVG_HEADER, defs.render(), markup)
	}

	/// Returns a reference to the folder at the path. Fails if any path element
	/// does not exist or if a non-terminal element is not a folder.
	pub fn folder(&self, path: &[LayerId]) -> Result<&FolderLayer, DocumentError> {
		let mut root = &self.root;
		for id in path {
			root = root.as_folder()?.layer(*id).ok_or_else(|| DocumentError::LayerNotFound(path.into()))?;
		}
		root.as_folder()
	}

	/// Returns a mutable reference to the folder at the path.
	pub fn folder_mut(&mut self, path: &[LayerId]) -> Result<&mut FolderLayer, DocumentError> {
		let mut root = &mut self.root;
		for id in path {
			root = root.as_folder_mut()?.layer_mut(*id).ok_or_else(|| DocumentError::LayerNotFound(path.into()))?;
		}
		root.as_folder_mut()
	}

	/// Returns a reference to the layer at the path. The empty path addresses the root.
	pub fn layer(&self, path: &[LayerId]) -> Result<&Layer, DocumentError> {
		if path.is_empty() {
			return Ok(&self.root);
		}
		let (folder_path, id) = split_path(path)?;
		self.folder(folder_path)?.layer(id).ok_or_else(|| DocumentError::LayerNotFound(path.into()))
	}

	/// Returns a mutable reference to the layer at the path.
	pub fn layer_mut(&mut self, path: &[LayerId]) -> Result<&mut Layer, DocumentError> {
		if path.is_empty() {
			return Ok(&mut self.root);
		}
		let (folder_path, id) = split_path(path)?;
		self.folder_mut(folder_path)?.layer_mut(id).ok_or_else(|| DocumentError::LayerNotFound(path.into()))
	}

	/// Inserts `layer` at `path`, where the last path element is the id the new
	/// layer is stored under in its parent folder.
	pub fn set_layer(&mut self, path: &[LayerId], layer: Layer, insert_index: isize) -> Result<(), DocumentError> {
		let (folder_path, id) = split_path(path)?;
		self.folder_mut(folder_path)?.add_layer(layer, id, insert_index).ok_or(DocumentError::IndexOutOfBounds)?;
		Ok(())
	}

	/// Deletes the layer at `path`.
	pub fn delete(&mut self, path: &[LayerId]) -> Result<(), DocumentError> {
		let (folder_path, id) = split_path(path)?;
		self.folder_mut(folder_path)?.remove_layer(id)
	}

	/// The visible direct children of the folder at `path` with their ids, in render order.
	pub fn visible_children(&self, path: &[LayerId]) -> Result<impl Iterator<Item = (LayerId, &Layer)>, DocumentError> {
		Ok(self.folder(path)?.visible_layers())
	}

	/// Mutates the document by applying the `operation` to it. If the operation
	/// changed the document, a list of responses is returned describing what
	/// changed, for the caller to act on.
	pub fn handle_operation(&mut self, operation: &Operation) -> Result<Option<Vec<DocumentResponse>>, DocumentError> {
		use DocumentResponse::*;

		let responses = match operation {
			Operation::AddFolder { path, insert_index } => {
				self.set_layer(path, Layer::new(LayerDataType::Folder(FolderLayer::default())), *insert_index)?;

				Some(vec![DocumentChanged, CreatedLayer { path: path.clone() }])
			}
			Operation::AddLine {
				path,
				insert_index,
				start,
				end,
				style,
			} => {
				let layer = Layer::new(LayerDataType::Line(LineLayer::new(*start, *end, *style)));
				self.set_layer(path, layer, *insert_index)?;

				Some(vec![DocumentChanged, CreatedLayer { path: path.clone() }])
			}
			Operation::AddShape {
				path,
				insert_index,
				commands,
				style,
			} => {
				let layer = Layer::new(LayerDataType::Shape(ShapeLayer::new(commands.clone(), *style)));
				self.set_layer(path, layer, *insert_index)?;

				Some(vec![DocumentChanged, CreatedLayer { path: path.clone() }])
			}
			Operation::AddText {
				path,
				insert_index,
				text,
				anchor,
				font_size,
				style,
			} => {
				let layer = Layer::new(LayerDataType::Text(TextLayer::new(text.clone(), *anchor, *font_size, *style)));
				self.set_layer(path, layer, *insert_index)?;

				Some(vec![DocumentChanged, CreatedLayer { path: path.clone() }])
			}
			Operation::AddUse { path, insert_index, href, backdrop } => {
				let layer = Layer::new(LayerDataType::Use(UseLayer::new(*href, *backdrop)));
				self.set_layer(path, layer, *insert_index)?;

				Some(vec![DocumentChanged, CreatedLayer { path: path.clone() }])
			}
			Operation::DeleteLayer { path } => {
				self.delete(path)?;

				let (folder, _) = split_path(path)?;
				Some(vec![
					DocumentChanged,
					DeletedLayer { path: path.clone() },
					FolderChanged { path: folder.to_vec() },
				])
			}
			Operation::SetLayerVisibility { path, visible } => {
				self.layer_mut(path)?.visible = *visible;

				Some(vec![DocumentChanged, LayerChanged { path: path.clone() }])
			}
			Operation::SetLineEndpoints { path, start, end } => match &mut self.layer_mut(path)?.data {
				LayerDataType::Line(line) => {
					line.start = *start;
					line.end = *end;

					Some(vec![DocumentChanged, LayerChanged { path: path.clone() }])
				}
				_ => return Err(DocumentError::NotALine),
			},
			Operation::SetShapePath { path, commands } => match &mut self.layer_mut(path)?.data {
				LayerDataType::Shape(shape) => {
					shape.commands = commands.clone();

					Some(vec![DocumentChanged, LayerChanged { path: path.clone() }])
				}
				_ => return Err(DocumentError::NotAShape),
			},
			Operation::SetTextAnchor { path, anchor } => match &mut self.layer_mut(path)?.data {
				LayerDataType::Text(text) => {
					text.anchor = *anchor;

					Some(vec![DocumentChanged, LayerChanged { path: path.clone() }])
				}
				_ => return Err(DocumentError::NotText),
			},
			Operation::SetTextContent { path, text } => match &mut self.layer_mut(path)?.data {
				LayerDataType::Text(text_layer) => {
					text_layer.text = text.clone();

					Some(vec![DocumentChanged, LayerChanged { path: path.clone() }])
				}
				_ => return Err(DocumentError::NotText),
			},
		};
		Ok(responses)
	}
}

fn split_path(path: &[LayerId]) -> Result<(&[LayerId], LayerId), DocumentError> {
	let (id, path) = path.split_last().ok_or(DocumentError::InvalidPath)?;
	Ok((path, *id))
}
