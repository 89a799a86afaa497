use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// In-memory contents of a user-selected file.
///
/// The host's file picker reads the selection into memory and hands it over
/// as a named byte buffer; the store never touches the filesystem itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHandle {
    /// Original file name, used as the display name of the volume.
    pub name: String,

    /// Raw file contents.
    pub data: Bytes,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// Where the bytes of a volume come from.
///
/// Serializes to the single-key form the viewer's load call expects:
/// `{"url": ...}` or `{"file": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VolumeSource {
    /// Remote or host-relative URL (the bundled sample is loaded this way).
    Url(String),

    /// In-memory upload.
    File(FileHandle),
}

impl VolumeSource {
    /// Display name for this source, if one can be derived from it.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            VolumeSource::Url(url) => url.rsplit('/').next().filter(|name| !name.is_empty()),
            VolumeSource::File(file) => Some(&file.name),
        }
    }
}

/// One entry of a viewer load request.
///
/// The viewer accepts an ordered list of these; the colormap tag is applied
/// to the volume as part of the load instead of as a follow-up call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeDescriptor {
    #[serde(flatten)]
    pub source: VolumeSource,

    /// Colormap to render the volume with, if not the viewer's default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colormap: Option<String>,
}

impl VolumeDescriptor {
    pub fn new(source: VolumeSource) -> Self {
        Self {
            source,
            colormap: None,
        }
    }

    pub fn with_colormap(source: VolumeSource, colormap: impl Into<String>) -> Self {
        Self {
            source,
            colormap: Some(colormap.into()),
        }
    }
}
