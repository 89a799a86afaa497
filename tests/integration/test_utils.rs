//! Test utilities for integration tests.
//!
//! This module provides a tracking mock of the viewer bridge: every call is
//! recorded, construction and loads can be delayed, and each method can be
//! scripted to fail.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use voxview_store::config::ViewerOptions;
use voxview_store::{
    FileHandle, RenderSurface, StoreConfig, ViewerBackend, ViewerError, ViewerHandle, ViewerStore,
    VolumeDescriptor,
};

// =============================================================================
// Call Log
// =============================================================================

/// One recorded call against the tracking viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCall {
    Attach(String),
    LoadVolumes(Vec<VolumeDescriptor>),
    RemoveVolume(usize),
    SetVolumeColormap(usize, String),
    SetSliceType(i32),
    SetDefaults,
    UpdateRenderedVolume,
    Destroy,
}

/// Failure switches for the tracking viewer; all off by default.
#[derive(Debug, Clone, Default)]
pub struct FailureScript {
    pub load: Option<ViewerError>,
    pub slice: bool,
    pub colormap: bool,
    pub defaults: bool,
    pub destroy: bool,
}

// =============================================================================
// Tracking Viewer
// =============================================================================

/// A viewer handle that records every call.
///
/// Clones share the call log and loaded-volume list, so a test keeps full
/// visibility after handing the viewer to a backend.
#[derive(Clone, Default)]
pub struct TrackingViewer {
    calls: Arc<Mutex<Vec<ViewerCall>>>,
    /// Colormap of each loaded volume, in order.
    volumes: Arc<Mutex<Vec<Option<String>>>>,
    failures: Arc<Mutex<FailureScript>>,
    load_delay: Arc<Mutex<Option<Duration>>>,
    multiplanar: Option<i32>,
}

impl TrackingViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A viewer that reports its own multiplanar layout constant.
    pub fn with_multiplanar(constant: i32) -> Self {
        Self {
            multiplanar: Some(constant),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<ViewerCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn volume_colormaps(&self) -> Vec<Option<String>> {
        self.volumes.lock().unwrap().clone()
    }

    pub fn set_failures(&self, script: FailureScript) {
        *self.failures.lock().unwrap() = script;
    }

    pub fn set_load_delay(&self, delay: Duration) {
        *self.load_delay.lock().unwrap() = Some(delay);
    }

    fn record(&self, call: ViewerCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ViewerHandle for TrackingViewer {
    async fn attach(&self, surface: &RenderSurface) -> Result<(), ViewerError> {
        self.record(ViewerCall::Attach(surface.element_id.clone()));
        Ok(())
    }

    async fn load_volumes(&self, volumes: Vec<VolumeDescriptor>) -> Result<(), ViewerError> {
        let delay = *self.load_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.record(ViewerCall::LoadVolumes(volumes.clone()));
        let failure = self.failures.lock().unwrap().load.clone();
        if let Some(err) = failure {
            return Err(err);
        }

        let mut loaded = self.volumes.lock().unwrap();
        for descriptor in volumes {
            loaded.push(descriptor.colormap);
        }
        Ok(())
    }

    async fn remove_volume(&self, index: usize) -> Result<(), ViewerError> {
        self.record(ViewerCall::RemoveVolume(index));
        let mut loaded = self.volumes.lock().unwrap();
        if index >= loaded.len() {
            return Err(ViewerError::call("volume index out of range"));
        }
        let _ = loaded.remove(index);
        Ok(())
    }

    async fn volume_count(&self) -> usize {
        self.volumes.lock().unwrap().len()
    }

    async fn set_volume_colormap(&self, index: usize, colormap: &str) -> Result<(), ViewerError> {
        self.record(ViewerCall::SetVolumeColormap(index, colormap.to_string()));
        if self.failures.lock().unwrap().colormap {
            return Err(ViewerError::call("unknown colormap"));
        }
        let mut loaded = self.volumes.lock().unwrap();
        match loaded.get_mut(index) {
            Some(slot) => {
                *slot = Some(colormap.to_string());
                Ok(())
            }
            None => Err(ViewerError::call("volume index out of range")),
        }
    }

    async fn set_slice_type(&self, slice_type: i32) -> Result<(), ViewerError> {
        self.record(ViewerCall::SetSliceType(slice_type));
        if self.failures.lock().unwrap().slice {
            return Err(ViewerError::Unknown);
        }
        Ok(())
    }

    async fn set_defaults(&self) -> Result<(), ViewerError> {
        self.record(ViewerCall::SetDefaults);
        if self.failures.lock().unwrap().defaults {
            return Err(ViewerError::Unknown);
        }
        Ok(())
    }

    async fn update_rendered_volume(&self) -> Result<(), ViewerError> {
        self.record(ViewerCall::UpdateRenderedVolume);
        Ok(())
    }

    fn multiplanar_slice_type(&self) -> Option<i32> {
        self.multiplanar
    }

    async fn destroy(&self) -> Result<(), ViewerError> {
        self.record(ViewerCall::Destroy);
        if self.failures.lock().unwrap().destroy {
            return Err(ViewerError::Unknown);
        }
        Ok(())
    }
}

// =============================================================================
// Tracking Backend
// =============================================================================

/// Backend that hands out clones of one tracking viewer and can delay or
/// fail construction.
pub struct TrackingBackend {
    viewer: TrackingViewer,
    create_delay: Option<Duration>,
    fail_create: bool,
    create_count: AtomicUsize,
}

impl TrackingBackend {
    pub fn new(viewer: TrackingViewer) -> Self {
        Self {
            viewer,
            create_delay: None,
            fail_create: false,
            create_count: AtomicUsize::new(0),
        }
    }

    /// Simulates a slow viewer construction (script still loading, etc).
    pub fn with_create_delay(viewer: TrackingViewer, delay: Duration) -> Self {
        Self {
            create_delay: Some(delay),
            ..Self::new(viewer)
        }
    }

    /// A backend whose construction always fails.
    pub fn failing() -> Self {
        Self {
            fail_create: true,
            ..Self::new(TrackingViewer::new())
        }
    }

    pub fn create_count(&self) -> usize {
        self.create_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ViewerBackend for TrackingBackend {
    type Handle = TrackingViewer;

    async fn create(&self, _options: &ViewerOptions) -> Result<Self::Handle, ViewerError> {
        if let Some(delay) = self.create_delay {
            tokio::time::sleep(delay).await;
        }
        self.create_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_create {
            return Err(ViewerError::call("WebGL context unavailable"));
        }
        Ok(self.viewer.clone())
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// The surface descriptor used throughout the tests.
pub fn surface() -> RenderSurface {
    RenderSurface::new("viewer-canvas", 800, 600)
}

/// A tiny gzip-looking upload with the given name.
pub fn nifti_file(name: &str) -> FileHandle {
    FileHandle::new(name, vec![0x1f, 0x8b, 0x08, 0x00])
}

/// A store over the given tracking viewer, already initialized.
pub async fn ready_store(viewer: TrackingViewer) -> ViewerStore<TrackingBackend> {
    let store = ViewerStore::new(TrackingBackend::new(viewer), StoreConfig::default());
    store.initialize(surface()).await;
    assert!(store.snapshot().is_initialized);
    store
}

/// Initialize test tracing; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voxview_store=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
