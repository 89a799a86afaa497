//! Action dispatch: UI intents forwarded to the viewer handle.
//!
//! Every operation here catches its own failures, records them in the
//! snapshot, and returns normally. Operations other than loads are no-ops
//! when no handle exists; loads first wait for the handle (initialization
//! may still be in flight on mount) and give up with a not-ready failure
//! after the configured ceiling.

use std::sync::Arc;

use tracing::debug;

use crate::config::{DEFAULT_COLORMAP, DEFAULT_SLICE_TYPE, SLICE_TYPE_MULTIPLANAR};
use crate::error::{StoreError, ViewerError};
use crate::viewer::{FileHandle, ViewerBackend, ViewerHandle, VolumeDescriptor, VolumeSource};

use super::ViewerStore;

impl<B: ViewerBackend> ViewerStore<B> {
    /// Load the bundled sample volume by URL.
    pub async fn load_default_sample(&self) {
        let source = VolumeSource::Url(self.config.sample_volume_url.clone());
        let name = self.config.sample_volume_name.clone();
        self.load_volume(source, name).await;
    }

    /// Load a user-selected file.
    pub async fn load_from_file(&self, file: FileHandle) {
        let name = file.name.clone();
        self.load_volume(VolumeSource::File(file), name).await;
    }

    /// Switch the slice layout.
    ///
    /// The multiplanar sentinel is translated to the handle's own constant
    /// when it reports one; the stored selector keeps the sentinel either
    /// way.
    pub async fn set_slice_type(&self, slice_type: i32) {
        let Some(handle) = self.current_handle().await else {
            return;
        };
        self.update(|state| state.error_message.clear());

        match self.apply_slice_type(&handle, slice_type).await {
            Ok(()) => {
                debug!(slice_type, "slice type changed");
                self.update(|state| state.slice_type = slice_type);
            }
            Err(err) => self.record_failure(&StoreError::SliceType(err)),
        }
    }

    /// Select a colormap.
    ///
    /// The stored preference is always updated, even with no viewer or no
    /// volume present, so the next load picks it up. A loaded volume is
    /// recolored immediately.
    pub async fn set_colormap(&self, colormap: &str) {
        self.update(|state| {
            state.error_message.clear();
            state.selected_colormap = colormap.to_string();
        });

        let Some(handle) = self.current_handle().await else {
            return;
        };
        if handle.volume_count().await == 0 {
            return;
        }

        let applied = async {
            handle.set_volume_colormap(0, colormap).await?;
            handle.update_rendered_volume().await
        };
        match applied.await {
            Ok(()) => debug!(colormap, "colormap applied"),
            Err(err) => self.record_failure(&StoreError::Colormap(err)),
        }
    }

    /// Restore the viewer's defaults and reset layout and colormap state.
    pub async fn reset_view(&self) {
        let Some(handle) = self.current_handle().await else {
            return;
        };
        self.update(|state| state.error_message.clear());

        let restored = async {
            handle.set_defaults().await?;
            if handle.volume_count().await > 0 {
                handle.set_volume_colormap(0, DEFAULT_COLORMAP).await?;
                handle.update_rendered_volume().await?;
            }
            self.apply_slice_type(&handle, DEFAULT_SLICE_TYPE).await
        };

        match restored.await {
            Ok(()) => {
                debug!("view reset to defaults");
                self.update(|state| {
                    state.slice_type = DEFAULT_SLICE_TYPE;
                    state.selected_colormap = DEFAULT_COLORMAP.to_string();
                });
            }
            Err(err) => self.record_failure(&StoreError::Reset(err)),
        }
    }

    /// Shared load path for the sample and user files.
    async fn load_volume(&self, source: VolumeSource, display_name: String) {
        // Sequence overlapping loads: the second caller parks here until the
        // first one's completion handlers have run.
        let _guard = self.load_lock.lock().await;

        self.update(|state| state.error_message.clear());

        let Some(handle) = self.wait_until_ready().await else {
            // Not-ready failure already recorded by the wait.
            return;
        };

        self.update(|state| {
            state.is_loading = true;
            state.is_ready = false;
            state.current_file = Some(display_name.clone());
        });

        let colormap = self.snapshot().selected_colormap;
        debug!(file = %display_name, colormap = %colormap, "loading volume");

        match self.run_load(&handle, source, &colormap).await {
            Ok(()) => {
                if !self.handle_is_current(&handle).await {
                    debug!(file = %display_name, "viewer torn down during load; discarding completion");
                    return;
                }
                // Re-assert the layout the user had selected before the
                // volume swap.
                if let Err(err) = self.apply_slice_type(&handle, self.snapshot().slice_type).await {
                    self.record_failure(&StoreError::SliceType(err));
                }
                self.update(|state| {
                    state.is_loading = false;
                    state.is_ready = true;
                });
            }
            Err(err) => {
                if !self.handle_is_current(&handle).await {
                    debug!(file = %display_name, "viewer torn down during load; discarding failure");
                    return;
                }
                self.update(|state| {
                    state.is_loading = false;
                    state.current_file = None;
                });
                self.record_failure(&StoreError::Load {
                    file: display_name,
                    source: err,
                });
            }
        }
    }

    /// Clear any previously loaded volumes, then load the new one tagged
    /// with the active colormap.
    async fn run_load(
        &self,
        handle: &Arc<B::Handle>,
        source: VolumeSource,
        colormap: &str,
    ) -> Result<(), ViewerError> {
        let count = handle.volume_count().await;
        for _ in 0..count {
            handle.remove_volume(0).await?;
        }

        let descriptor = VolumeDescriptor::with_colormap(source, colormap);
        handle.load_volumes(vec![descriptor]).await
    }

    /// Apply a slice layout, translating the multiplanar sentinel.
    async fn apply_slice_type(
        &self,
        handle: &B::Handle,
        slice_type: i32,
    ) -> Result<(), ViewerError> {
        let effective = if slice_type == SLICE_TYPE_MULTIPLANAR {
            handle
                .multiplanar_slice_type()
                .unwrap_or(SLICE_TYPE_MULTIPLANAR)
        } else {
            slice_type
        };
        handle.set_slice_type(effective).await
    }
}

// =============================================================================
// Tests
// =============================================================================
