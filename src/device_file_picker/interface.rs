use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "ico", "avif",
];

#[derive(Debug, thiserror::Error)]
pub enum FilePickerError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// An image chosen by the user, held in memory until it is replaced.
#[derive(Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Arc<[u8]>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn read(path: &Path) -> Result<Self, FilePickerError> {
        let bytes = std::fs::read(path).map_err(|source| FilePickerError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self::new(file_name, media_type_for_path(path), bytes))
    }
}

impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

pub fn media_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "ico" => "image/x-icon",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

pub trait FilePicker {
    /// `Ok(None)` means the user dismissed the dialog.
    fn pick_image(&self) -> Result<Option<ImageFile>, FilePickerError>;
}
