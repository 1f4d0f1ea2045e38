use crate::LayerId;

use serde::{Deserialize, Serialize};

/// What an applied [`Operation`](crate::Operation) changed about the document.
/// The editor inspects these to decide which follow-up work to queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[repr(C)]
pub enum DocumentResponse {
	/// The rendered output is stale and the whole document needs a re-render.
	DocumentChanged,
	/// The children of the folder at `path` changed.
	FolderChanged { path: Vec<LayerId> },
	CreatedLayer { path: Vec<LayerId> },
	DeletedLayer { path: Vec<LayerId> },
	/// A single existing layer changed in place.
	LayerChanged { path: Vec<LayerId> },
}
