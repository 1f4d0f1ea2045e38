use super::layer_info::{Layer, LayerData};
use super::style::SvgDefs;
use crate::DocumentError;
use crate::LayerId;

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// A layer that encapsulates other layers, including potentially more folders.
/// The contained layers are rendered in the same order they are stored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct FolderLayer {
	/// The ids of the [Layer]s contained within the folder, parallel to `layers`
	layer_ids: Vec<LayerId>,
	/// The [Layer]s contained in the folder
	layers: Vec<Layer>,
}

impl FolderLayer {
	/// Add a layer to the folder under the given `id`.
	/// If `insert_index` is -1 or equal to the number of layers, the layer is placed at the end,
	/// and an `insert_index` of 0 places it in front.
	/// Returns `None` if the index is out of bounds or the id is already taken.
	pub fn add_layer(&mut self, layer: Layer, id: LayerId, insert_index: isize) -> Option<LayerId> {
		let mut insert_index = insert_index as i128;

		if insert_index < 0 {
			insert_index = self.layers.len() as i128 + insert_index + 1;
		}

		if insert_index <= self.layers.len() as i128 && insert_index >= 0 {
			if self.layer_ids.contains(&id) {
				return None;
			}

			self.layers.insert(insert_index as usize, layer);
			self.layer_ids.insert(insert_index as usize, id);

			Some(id)
		} else {
			None
		}
	}

	/// Remove the layer with the given `id` from the folder.
	/// This operation will fail if `id` is not present in the folder.
	pub fn remove_layer(&mut self, id: LayerId) -> Result<(), DocumentError> {
		let pos = self.position_of_layer(id)?;
		self.layers.remove(pos);
		self.layer_ids.remove(pos);
		Ok(())
	}

	/// Returns the ids of the layers in the folder, in render order.
	pub fn list_layers(&self) -> &[LayerId] {
		&self.layer_ids
	}

	pub fn layers(&self) -> &[Layer] {
		&self.layers
	}

	pub fn layer(&self, id: LayerId) -> Option<&Layer> {
		let pos = self.position_of_layer(id).ok()?;
		Some(&self.layers[pos])
	}

	pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
		let pos = self.position_of_layer(id).ok()?;
		Some(&mut self.layers[pos])
	}

	pub fn position_of_layer(&self, id: LayerId) -> Result<usize, DocumentError> {
		self.layer_ids.iter().position(|x| *x == id).ok_or_else(|| DocumentError::LayerNotFound(vec![id]))
	}

	/// The visible direct children with their ids, in render order.
	pub fn visible_layers(&self) -> impl Iterator<Item = (LayerId, &Layer)> {
		self.layer_ids.iter().copied().zip(self.layers.iter()).filter(|(_, layer)| layer.visible)
	}
}

impl LayerData for FolderLayer {
	fn render(&self, svg: &mut String, defs: &mut SvgDefs, id: LayerId) {
		let _ = write!(svg, r#"<g id="{}">"#, id);
		for (child_id, layer) in self.layer_ids.iter().zip(self.layers.iter()) {
			layer.render(svg, defs, *child_id);
		}
		svg.push_str("</g>");
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::layers::layer_info::LayerDataType;

	fn folder_layer() -> Layer {
		Layer::new(LayerDataType::Folder(FolderLayer::default()))
	}

	#[test]
	fn add_layer_indices() {
		let mut folder = FolderLayer::default();
		assert_eq!(folder.add_layer(folder_layer(), 1, -1), Some(1));
		assert_eq!(folder.add_layer(folder_layer(), 2, -1), Some(2));
		// Front insertion shifts the existing layers back.
		assert_eq!(folder.add_layer(folder_layer(), 3, 0), Some(3));
		assert_eq!(folder.list_layers(), [3, 1, 2]);
		// -2 inserts before the last layer.
		assert_eq!(folder.add_layer(folder_layer(), 4, -2), Some(4));
		assert_eq!(folder.list_layers(), [3, 1, 4, 2]);
	}

	#[test]
	fn add_layer_rejects_out_of_bounds_and_duplicates() {
		let mut folder = FolderLayer::default();
		assert_eq!(folder.add_layer(folder_layer(), 1, 1), None);
		assert_eq!(folder.add_layer(folder_layer(), 1, -2), None);
		assert_eq!(folder.add_layer(folder_layer(), 1, 0), Some(1));
		assert_eq!(folder.add_layer(folder_layer(), 1, 0), None);
	}

	#[test]
	fn remove_layer_keeps_ids_and_layers_in_sync() {
		let mut folder = FolderLayer::default();
		folder.add_layer(folder_layer(), 7, -1);
		folder.add_layer(folder_layer(), 8, -1);
		assert!(folder.remove_layer(7).is_ok());
		assert_eq!(folder.list_layers(), [8]);
		assert_eq!(folder.layers().len(), 1);
		assert_eq!(folder.remove_layer(7), Err(DocumentError::LayerNotFound(vec![7])));
	}

	#[test]
	fn visible_layers_skips_hidden_children() {
		let mut folder = FolderLayer::default();
		folder.add_layer(folder_layer(), 1, -1);
		let mut hidden = folder_layer();
		hidden.visible = false;
		folder.add_layer(hidden, 2, -1);
		folder.add_layer(folder_layer(), 3, -1);
		let visible: Vec<_> = folder.visible_layers().map(|(id, _)| id).collect();
		assert_eq!(visible, [1, 3]);
	}
}
