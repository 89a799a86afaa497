//! Trait seams for the embedded viewer.
//!
//! The third-party viewer is opaque: rendering, volume decoding and GPU work
//! all happen on the other side of a host bridge. This module defines the
//! narrow interface the store consumes:
//!
//! - [`ViewerBackend`]: constructs a viewer instance from [`ViewerOptions`].
//! - [`ViewerHandle`]: one live viewer session bound to a drawing surface —
//!   volume loading, slice layout, colormaps, redraw, teardown.
//! - [`VolumeDescriptor`] / [`VolumeSource`] / [`FileHandle`]: what to load
//!   and how, in the wire shape of the viewer's load call.
//! - [`RenderSurface`]: descriptor of the host element the viewer draws into.
//!
//! Production code implements these against the real bridge; tests implement
//! them with scripted mocks.
//!
//! [`ViewerOptions`]: crate::config::ViewerOptions

mod backend;
mod volume;

pub use backend::{RenderSurface, ViewerBackend, ViewerHandle};
pub use volume::{FileHandle, VolumeDescriptor, VolumeSource};
