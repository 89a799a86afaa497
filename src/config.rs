//! Configuration for the viewer store.
//!
//! Two layers of configuration live here:
//!
//! - [`ViewerOptions`]: the fixed construction options handed to the embedded
//!   viewer. Serializes with the camelCase field names the viewer's
//!   constructor expects, so a bridge can pass it through verbatim.
//! - [`StoreConfig`]: store-side settings (sample volume location, ready-wait
//!   ceiling) wrapped around the viewer options.
//!
//! Defaults match the production deployment: dark background, thin colorbar,
//! contrast drag mode, forced multiplanar rendering, auto-resize.

use std::time::Duration;

use serde::{Deserialize, Serialize};

// =============================================================================
// Slice Types
// =============================================================================

/// Axial (top-down) plane.
pub const SLICE_TYPE_AXIAL: i32 = 0;

/// Coronal (front-back) plane.
pub const SLICE_TYPE_CORONAL: i32 = 1;

/// Sagittal (side) plane.
pub const SLICE_TYPE_SAGITTAL: i32 = 2;

/// Multiplanar sentinel: show all planes at once.
///
/// This value doubles as a marker: when applied, it is translated to the
/// handle's own multiplanar constant if the handle reports one, and used
/// as-is otherwise.
pub const SLICE_TYPE_MULTIPLANAR: i32 = 3;

// =============================================================================
// Default Values
// =============================================================================

/// Default slice layout (multiplanar).
pub const DEFAULT_SLICE_TYPE: i32 = SLICE_TYPE_MULTIPLANAR;

/// Default colormap applied to loaded volumes.
pub const DEFAULT_COLORMAP: &str = "inferno";

/// Default viewer background color (RGBA, dark gray).
pub const DEFAULT_BACK_COLOR: [f32; 4] = [0.15, 0.15, 0.15, 1.0];

/// Default colorbar height as a fraction of the canvas.
pub const DEFAULT_COLORBAR_HEIGHT: f32 = 0.05;

/// Default drag interaction mode (contrast adjustment).
pub const DEFAULT_DRAG_MODE: u8 = 1;

/// URL of the bundled sample volume, relative to the host page.
pub const DEFAULT_SAMPLE_URL: &str = "./sample_brain.nii.gz";

/// Display name shown while the sample volume is active.
pub const DEFAULT_SAMPLE_NAME: &str = "sample_brain.nii.gz (sample)";

/// How long callers wait for the viewer handle to appear before giving up.
pub const DEFAULT_READY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Colormaps the viewer ships with, in menu order.
pub const AVAILABLE_COLORMAPS: [&str; 17] = [
    "grayscale", "negative", "viridis", "plasma", "magma", "inferno", "hot", "cool", "bone",
    "pink", "jet", "hsv", "spring", "summer", "autumn", "winter", "surface",
];

/// Whether `name` is one of the colormaps the viewer ships with.
pub fn is_available_colormap(name: &str) -> bool {
    AVAILABLE_COLORMAPS.contains(&name)
}

// =============================================================================
// Viewer Options
// =============================================================================

/// Construction options for the embedded viewer.
///
/// Field names serialize in the camelCase form the viewer's constructor
/// expects (`backColor`, `colorbarHeight`, `dragMode`,
/// `multiplanarForceRender`, `isResizeCanvas`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerOptions {
    /// Canvas background color (RGBA, components in [0, 1]).
    pub back_color: [f32; 4],

    /// Colorbar height as a fraction of the canvas (in [0, 1]).
    pub colorbar_height: f32,

    /// Drag interaction mode constant.
    pub drag_mode: u8,

    /// Render all planes even when a single-plane layout is selected.
    pub multiplanar_force_render: bool,

    /// Resize the drawing surface with its container.
    pub is_resize_canvas: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            back_color: DEFAULT_BACK_COLOR,
            colorbar_height: DEFAULT_COLORBAR_HEIGHT,
            drag_mode: DEFAULT_DRAG_MODE,
            multiplanar_force_render: true,
            is_resize_canvas: true,
        }
    }
}

// =============================================================================
// Store Configuration
// =============================================================================

/// Store-side configuration wrapped around the viewer options.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Options handed to the viewer at construction.
    pub viewer: ViewerOptions,

    /// URL the default sample volume is loaded from.
    pub sample_volume_url: String,

    /// Display name recorded while the sample volume is active.
    pub sample_volume_name: String,

    /// Ceiling for [`wait_until_ready`](crate::store::ViewerStore::wait_until_ready).
    pub ready_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            viewer: ViewerOptions::default(),
            sample_volume_url: DEFAULT_SAMPLE_URL.to_string(),
            sample_volume_name: DEFAULT_SAMPLE_NAME.to_string(),
            ready_timeout: DEFAULT_READY_TIMEOUT,
        }
    }
}

impl StoreConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        for component in self.viewer.back_color {
            if !(0.0..=1.0).contains(&component) {
                return Err(format!(
                    "back_color components must be within [0, 1], got {}",
                    component
                ));
            }
        }

        if !(0.0..=1.0).contains(&self.viewer.colorbar_height) {
            return Err(format!(
                "colorbar_height must be within [0, 1], got {}",
                self.viewer.colorbar_height
            ));
        }

        if self.sample_volume_url.is_empty() {
            return Err("sample_volume_url must not be empty".to_string());
        }

        if self.ready_timeout.is_zero() {
            return Err("ready_timeout must be greater than zero".to_string());
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
