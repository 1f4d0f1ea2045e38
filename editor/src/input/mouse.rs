use bitflags::bitflags;
use glam::DVec2;
use serde::{Deserialize, Serialize};

// Origin is top left
pub type ViewportPosition = DVec2;

/// The mouse interactions a hint can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseMotion {
	None,
	Lmb,
	LmbDrag,
}

/// The state of the mouse as tracked inside the editor, with the position in viewport space.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MouseState {
	pub position: ViewportPosition,
	pub mouse_keys: MouseKeys,
}

impl MouseState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_position(x: f64, y: f64) -> Self {
		Self {
			position: (x, y).into(),
			mouse_keys: MouseKeys::default(),
		}
	}
}

/// The state of the mouse as reported by the host frontend.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorMouseState {
	pub editor_position: DVec2,
	pub mouse_keys: MouseKeys,
}

impl EditorMouseState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_editor_position(x: f64, y: f64) -> Self {
		Self {
			editor_position: (x, y).into(),
			mouse_keys: MouseKeys::default(),
		}
	}

	pub fn to_mouse_state(&self) -> MouseState {
		MouseState {
			position: self.editor_position,
			mouse_keys: self.mouse_keys,
		}
	}
}

bitflags! {
	#[derive(Default, Serialize, Deserialize)]
	#[repr(transparent)]
	pub struct MouseKeys: u8 {
		const LEFT   = 0b0000_0001;
		const RIGHT  = 0b0000_0010;
		const MIDDLE = 0b0000_0100;
		const NONE   = 0b0000_0000;
	}
}
