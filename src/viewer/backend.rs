use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ViewerOptions;
use crate::error::ViewerError;

use super::volume::VolumeDescriptor;

/// Descriptor of the host drawing surface the viewer renders into.
///
/// The surface itself (a canvas element or equivalent) lives on the host
/// side; the store only ever sees this handle to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSurface {
    /// Host-side identifier of the drawing element.
    pub element_id: String,

    /// Logical width in pixels.
    pub width: u32,

    /// Logical height in pixels.
    pub height: u32,
}

impl RenderSurface {
    pub fn new(element_id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            element_id: element_id.into(),
            width,
            height,
        }
    }
}

// =============================================================================
// ViewerHandle Trait
// =============================================================================

/// One live viewer session.
///
/// Implementations wrap the host bridge to the embedded viewer library. All
/// methods are fallible from the store's point of view: the viewer is a
/// black box and any call may be rejected on the other side. Implementations
/// must be thread-safe; the store shares the handle across async tasks.
#[async_trait]
pub trait ViewerHandle: Send + Sync {
    /// Bind the viewer to its drawing surface.
    async fn attach(&self, surface: &RenderSurface) -> Result<(), ViewerError>;

    /// Replace the rendered volume set with the given list, in order.
    ///
    /// Each descriptor may carry a colormap tag that the viewer applies as
    /// part of the load.
    async fn load_volumes(&self, volumes: Vec<VolumeDescriptor>) -> Result<(), ViewerError>;

    /// Remove the volume at `index` from the rendered set.
    async fn remove_volume(&self, index: usize) -> Result<(), ViewerError>;

    /// Number of volumes currently loaded.
    async fn volume_count(&self) -> usize;

    /// Set the colormap of the volume at `index`.
    ///
    /// Takes effect on the next redraw; pair with [`update_rendered_volume`].
    ///
    /// [`update_rendered_volume`]: ViewerHandle::update_rendered_volume
    async fn set_volume_colormap(&self, index: usize, colormap: &str) -> Result<(), ViewerError>;

    /// Switch the slice layout.
    async fn set_slice_type(&self, slice_type: i32) -> Result<(), ViewerError>;

    /// Restore the viewer's built-in display defaults.
    async fn set_defaults(&self) -> Result<(), ViewerError>;

    /// Re-render the volume set after a property change.
    async fn update_rendered_volume(&self) -> Result<(), ViewerError>;

    /// The viewer's own constant for the multiplanar layout, if it exposes
    /// one. Callers fall back to the sentinel value when this is `None`.
    fn multiplanar_slice_type(&self) -> Option<i32> {
        None
    }

    /// Tear the session down. Optional; the default is a no-op.
    async fn destroy(&self) -> Result<(), ViewerError> {
        Ok(())
    }
}

// =============================================================================
// ViewerBackend Trait
// =============================================================================

/// Constructs viewer sessions.
///
/// This abstraction keeps the store independent of how the viewer is
/// embedded (wasm bridge, test double, out-of-process shim). The store asks
/// the backend for a handle during initialization and owns it until
/// teardown.
#[async_trait]
pub trait ViewerBackend: Send + Sync {
    /// The handle type this backend creates.
    type Handle: ViewerHandle + 'static;

    /// Construct a viewer instance with the given options.
    ///
    /// The instance is not yet bound to a surface; the store calls
    /// [`ViewerHandle::attach`] right after.
    async fn create(&self, options: &ViewerOptions) -> Result<Self::Handle, ViewerError>;
}
