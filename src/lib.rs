//! # voxview-store
//!
//! A reactive state store for an embedded volumetric medical-image viewer.
//!
//! This library wraps a third-party volumetric viewer (NIfTI-style brain
//! volumes rendered into a host page) behind a small, subscribable state
//! container. The viewer itself — rendering, volume decoding, GPU work — is
//! opaque and reached only through trait seams; this crate owns the
//! lifecycle of one viewer instance and translates UI intents into calls
//! against it.
//!
//! ## Features
//!
//! - **Single source of truth**: one [`ViewerSnapshot`] per store, broadcast
//!   over a watch channel on every mutation
//! - **Lifecycle management**: deferred construction, a bounded
//!   wait-for-ready for consumers that race initialization, best-effort
//!   teardown
//! - **Forgiving dispatch**: every operation catches its own failure and
//!   surfaces a human-readable message instead of propagating
//! - **Test seams**: the viewer is a pair of async traits, trivially mocked
//!
//! ## Architecture
//!
//! The library is organized into a few modules:
//!
//! - [`store`] - the state container, lifecycle controller and action dispatcher
//! - [`viewer`] - trait seams for the embedded viewer bridge
//! - [`config`] - viewer construction options and store defaults
//! - [`error`] - failure taxonomy and user-facing messages
//!
//! ## Example
//!
//! ```rust,ignore
//! use voxview_store::{FileHandle, RenderSurface, StoreConfig, ViewerStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     // `bridge` implements ViewerBackend against the real embedded viewer.
//!     let store = ViewerStore::new(bridge, StoreConfig::default());
//!
//!     // UI composition root owns the store; views subscribe.
//!     let mut changes = store.subscribe();
//!
//!     store.initialize(RenderSurface::new("viewer-canvas", 800, 600)).await;
//!     store.load_default_sample().await;
//!
//!     store.set_colormap("viridis").await;
//!     store.load_from_file(FileHandle::new("scan.nii.gz", bytes)).await;
//!
//!     let state = store.view();
//!     println!("showing {:?}", state.current_file);
//! }
//! ```

pub mod config;
pub mod error;
pub mod store;
pub mod viewer;

// Re-export commonly used types
pub use config::{
    is_available_colormap, StoreConfig, ViewerOptions, AVAILABLE_COLORMAPS, DEFAULT_BACK_COLOR,
    DEFAULT_COLORBAR_HEIGHT, DEFAULT_COLORMAP, DEFAULT_DRAG_MODE, DEFAULT_READY_TIMEOUT,
    DEFAULT_SAMPLE_NAME, DEFAULT_SAMPLE_URL, DEFAULT_SLICE_TYPE, SLICE_TYPE_AXIAL,
    SLICE_TYPE_CORONAL, SLICE_TYPE_MULTIPLANAR, SLICE_TYPE_SAGITTAL,
};
pub use error::{StoreError, ViewerError};
pub use store::{ViewState, ViewerSnapshot, ViewerStore};
pub use viewer::{
    FileHandle, RenderSurface, ViewerBackend, ViewerHandle, VolumeDescriptor, VolumeSource,
};
