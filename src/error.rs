use thiserror::Error;

/// Failures reported by the embedded viewer bridge.
///
/// The viewer library is opaque; all the bridge can relay is whether a call
/// carried a diagnostic message or failed without one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewerError {
    /// The viewer rejected a call and reported a message
    #[error("{0}")]
    Call(String),

    /// The viewer failed without a usable message
    #[error("unknown viewer failure")]
    Unknown,
}

impl ViewerError {
    /// Convenience constructor for message-carrying failures.
    pub fn call(message: impl Into<String>) -> Self {
        ViewerError::Call(message.into())
    }
}

/// Errors that can occur while driving the viewer through the store.
///
/// None of these are fatal and none escape a public store operation: each is
/// caught at the operation boundary, logged, and surfaced to the UI as
/// [`StoreError::user_message`] in the state snapshot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Viewer construction or surface attachment failed
    #[error("viewer initialization failed: {0}")]
    Initialization(ViewerError),

    /// The viewer handle did not appear within the wait ceiling
    #[error("viewer not ready after {waited_ms}ms")]
    NotReady { waited_ms: u64 },

    /// A volume load was rejected by the viewer
    #[error("failed to load volume {file:?}: {source}")]
    Load { file: String, source: ViewerError },

    /// Changing the slice layout failed
    #[error("failed to change slice type: {0}")]
    SliceType(ViewerError),

    /// Applying a colormap to the rendered volume failed
    #[error("failed to apply colormap: {0}")]
    Colormap(ViewerError),

    /// Restoring the viewer's defaults failed
    #[error("failed to reset view: {0}")]
    Reset(ViewerError),

    /// Viewer teardown failed (best-effort, never surfaced to the UI)
    #[error("viewer teardown failed: {0}")]
    Destroy(ViewerError),
}

impl StoreError {
    /// The human-readable message surfaced in the state snapshot.
    ///
    /// The enum's `Display` output is the diagnostic channel (logs); this is
    /// the user-visible channel. Load failures distinguish a viewer-reported
    /// message from an unknown failure.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Initialization(_) => {
                "Error initializing the viewer. Please refresh.".to_string()
            }
            StoreError::NotReady { .. } => {
                "Viewer is not ready. Please wait or refresh.".to_string()
            }
            StoreError::Load { file, source } => match source {
                ViewerError::Call(message) => format!("Failed to load {}: {}.", file, message),
                ViewerError::Unknown => {
                    format!("An unexpected error occurred while loading {}.", file)
                }
            },
            StoreError::SliceType(_) => "Failed to change view type.".to_string(),
            StoreError::Colormap(_) => "Failed to apply colormap.".to_string(),
            StoreError::Reset(_) => "Failed to reset view.".to_string(),
            StoreError::Destroy(_) => "Failed to shut down the viewer.".to_string(),
        }
    }
}
