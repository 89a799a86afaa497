//! The viewer state store.
//!
//! [`ViewerStore`] is the single owner of the embedded viewer handle and the
//! single writer of the state snapshot. UI code constructs one at the
//! composition root, injects it wherever it is needed, subscribes to state
//! changes, and calls the operations; it never touches the viewer directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 UI / host page              │
//! │     (subscribes to snapshots, dispatches)   │
//! └──────────────────────┬──────────────────────┘
//!                        │
//!                        ▼
//! ┌─────────────────────────────────────────────┐
//! │                 ViewerStore                 │
//! │  ┌───────────────┐  ┌─────────────────────┐ │
//! │  │  lifecycle    │  │      actions        │ │
//! │  │  initialize   │  │  load_* / set_*     │ │
//! │  │  destroy      │  │  reset_view         │ │
//! │  │  wait_ready   │  │  clear_error        │ │
//! │  └───────┬───────┘  └──────────┬──────────┘ │
//! │          │    watch channel    │            │
//! │          │   (ViewerSnapshot)  │            │
//! └──────────┼─────────────────────┼────────────┘
//!            ▼                     ▼
//! ┌─────────────────────────────────────────────┐
//! │        ViewerBackend / ViewerHandle         │
//! │           (embedded viewer bridge)          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Failures never escape an operation: they are logged and surfaced as the
//! snapshot's `error_message`. Every mutating operation clears the previous
//! message on entry and records only its own failure.

mod actions;
mod lifecycle;
mod snapshot;

pub use snapshot::{ViewerSnapshot, ViewState};

use std::sync::Arc;

use tokio::sync::{watch, Mutex, RwLock};
use tracing::error;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::viewer::ViewerBackend;

/// Reactive state store around one embedded viewer instance.
///
/// # Example
///
/// ```ignore
/// use voxview_store::{RenderSurface, StoreConfig, ViewerStore};
///
/// let store = ViewerStore::new(backend, StoreConfig::default());
///
/// store.initialize(RenderSurface::new("viewer-canvas", 800, 600)).await;
/// store.load_default_sample().await;
///
/// let state = store.view();
/// assert!(state.is_ready);
/// ```
pub struct ViewerStore<B: ViewerBackend> {
    /// Constructs viewer handles.
    backend: B,

    /// Viewer construction options and store defaults.
    config: StoreConfig,

    /// The live viewer handle, present between initialize and destroy.
    handle: RwLock<Option<Arc<B::Handle>>>,

    /// State broadcast; every mutation goes through [`Self::update`].
    state: watch::Sender<ViewerSnapshot>,

    /// Sequences volume loads so a second load cannot race the completion
    /// handlers of one still in flight.
    load_lock: Mutex<()>,
}

impl<B: ViewerBackend> ViewerStore<B> {
    /// Create a store with default state and no viewer handle.
    pub fn new(backend: B, config: StoreConfig) -> Self {
        let (state, _) = watch::channel(ViewerSnapshot::default());
        Self {
            backend,
            config,
            handle: RwLock::new(None),
            state,
            load_lock: Mutex::new(()),
        }
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> ViewerSnapshot {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver observes consistent snapshots; intermediate states of a
    /// single mutation are never visible.
    pub fn subscribe(&self) -> watch::Receiver<ViewerSnapshot> {
        self.state.subscribe()
    }

    /// Read-only projection of the UI-relevant fields.
    pub fn view(&self) -> ViewState {
        self.state.borrow().view()
    }

    /// The configuration this store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Clear the surfaced error message.
    pub fn clear_error(&self) {
        self.update(|state| state.error_message.clear());
    }

    /// Mutate the snapshot in place and notify subscribers.
    fn update(&self, mutate: impl FnOnce(&mut ViewerSnapshot)) {
        self.state.send_modify(mutate);
    }

    /// Log a failure and surface its user-facing message in the snapshot.
    fn record_failure(&self, err: &StoreError) {
        error!(error = %err, "viewer operation failed");
        let message = err.user_message();
        self.update(|state| state.error_message = message);
    }

    /// The installed viewer handle, if any.
    async fn current_handle(&self) -> Option<Arc<B::Handle>> {
        self.handle.read().await.clone()
    }

    /// Whether `handle` is still the installed one.
    ///
    /// Completion handlers of a load that outlived a `destroy` must not
    /// touch the reset store.
    async fn handle_is_current(&self, handle: &Arc<B::Handle>) -> bool {
        self.current_handle()
            .await
            .map_or(false, |current| Arc::ptr_eq(&current, handle))
    }
}
