use serde::Serialize;

use crate::config::{DEFAULT_COLORMAP, DEFAULT_SLICE_TYPE};

/// Complete store state, broadcast to subscribers on every mutation.
///
/// The opaque viewer handle is deliberately not part of the snapshot: it
/// lives beside it in the store, so subscribers are not woken when only the
/// handle changes hands.
///
/// Consistent snapshots uphold two invariants: `is_loading` and `is_ready`
/// are never both true, and `error_message` is non-empty only after the most
/// recent operation failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSnapshot {
    /// A viewer handle has been constructed and attached.
    pub is_initialized: bool,

    /// An async viewer operation is in flight.
    pub is_loading: bool,

    /// A volume is loaded and displayable.
    pub is_ready: bool,

    /// Last failure's user-facing message; empty means no error.
    pub error_message: String,

    /// Display name of the active volume.
    pub current_file: Option<String>,

    /// Active slice layout selector.
    pub slice_type: i32,

    /// Colormap applied to loads and colormap changes.
    pub selected_colormap: String,
}

impl Default for ViewerSnapshot {
    fn default() -> Self {
        Self {
            is_initialized: false,
            is_loading: false,
            is_ready: false,
            error_message: String::new(),
            current_file: None,
            slice_type: DEFAULT_SLICE_TYPE,
            selected_colormap: DEFAULT_COLORMAP.to_string(),
        }
    }
}

impl ViewerSnapshot {
    /// Whether the last operation failed.
    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// Project the UI-relevant fields.
    pub fn view(&self) -> ViewState {
        ViewState {
            is_loading: self.is_loading,
            is_ready: self.is_ready,
            error_message: self.error_message.clone(),
            current_file: self.current_file.clone(),
            slice_type: self.slice_type,
            selected_colormap: self.selected_colormap.clone(),
        }
    }
}

/// Read-only projection of the fields a UI binds to.
///
/// Serializes with camelCase keys so it can be handed to a host-side view
/// layer as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub is_loading: bool,
    pub is_ready: bool,
    pub error_message: String,
    pub current_file: Option<String>,
    pub slice_type: i32,
    pub selected_colormap: String,
}
