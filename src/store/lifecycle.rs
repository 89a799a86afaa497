//! Viewer lifecycle: construction, readiness, teardown.
//!
//! Construction is deferred one scheduler tick so the host can finish
//! attaching the drawing surface to the document before the viewer binds to
//! it. Because of that deferral, consumers that need the handle immediately
//! (a load triggered on mount) go through [`ViewerStore::wait_until_ready`],
//! which awaits the store's own change notification under a hard ceiling
//! instead of polling.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::viewer::{RenderSurface, ViewerBackend, ViewerHandle};

use super::{ViewerSnapshot, ViewerStore};

impl<B: ViewerBackend> ViewerStore<B> {
    /// Construct the viewer and bind it to `surface`.
    ///
    /// On failure the store stays usable: the failure is surfaced in the
    /// snapshot and a later `initialize` call may retry. A handle from a
    /// previous initialization, if any, is replaced.
    pub async fn initialize(&self, surface: RenderSurface) {
        self.update(|state| state.error_message.clear());

        // Let the host finish mounting the surface before the viewer binds.
        tokio::task::yield_now().await;

        let created = match self.backend.create(&self.config.viewer).await {
            Ok(handle) => handle.attach(&surface).await.map(|()| handle),
            Err(err) => Err(err),
        };

        match created {
            Ok(handle) => {
                debug!(surface = %surface.element_id, "viewer initialized");
                *self.handle.write().await = Some(Arc::new(handle));
                self.update(|state| state.is_initialized = true);
            }
            Err(err) => {
                *self.handle.write().await = None;
                self.update(|state| state.is_initialized = false);
                self.record_failure(&StoreError::Initialization(err));
            }
        }
    }

    /// Tear the viewer down and reset the store to its initial state.
    ///
    /// Teardown is best-effort: a failing viewer `destroy` is logged but
    /// never surfaced, and the state is reset unconditionally.
    pub async fn destroy(&self) {
        let handle = self.handle.write().await.take();
        if let Some(handle) = handle {
            if let Err(err) = handle.destroy().await {
                warn!(error = %StoreError::Destroy(err), "viewer teardown failed");
            } else {
                debug!("viewer destroyed");
            }
        }
        self.update(|state| *state = ViewerSnapshot::default());
    }

    /// Wait for the viewer handle with the configured ceiling.
    ///
    /// See [`wait_until_ready_for`](Self::wait_until_ready_for).
    pub async fn wait_until_ready(&self) -> Option<Arc<B::Handle>> {
        self.wait_until_ready_for(self.config.ready_timeout).await
    }

    /// Wait until initialization completes, up to `ceiling`.
    ///
    /// Returns the handle once it exists. If the ceiling elapses first, a
    /// not-ready failure is recorded in the snapshot and `None` is
    /// returned. The wait parks on the store's change broadcast; it wakes
    /// exactly when initialization lands, without a poll interval.
    pub async fn wait_until_ready_for(&self, ceiling: Duration) -> Option<Arc<B::Handle>> {
        let mut rx = self.state.subscribe();
        let initialized = async {
            loop {
                let ready = rx.borrow_and_update().is_initialized;
                if ready {
                    return;
                }
                // Cannot fail: the store owns the sending half.
                if rx.changed().await.is_err() {
                    return;
                }
            }
        };

        match timeout(ceiling, initialized).await {
            Ok(()) => self.current_handle().await,
            Err(_) => {
                self.record_failure(&StoreError::NotReady {
                    waited_ms: ceiling.as_millis() as u64,
                });
                None
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
