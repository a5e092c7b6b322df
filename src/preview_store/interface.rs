use crate::device_file_picker::interface::ImageFile;
use std::fmt;

/// Handle to a preview registered in a `PreviewStore`. Only valid until it is
/// revoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PreviewId(pub u64);

impl fmt::Display for PreviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "preview-{}", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("Failed to decode {file_name}: {source}")]
    Decode {
        file_name: String,
        source: image::ImageError,
    },
}

pub trait PreviewStore: Send {
    fn create(&mut self, id: PreviewId, file: &ImageFile) -> Result<(), PreviewError>;
    fn revoke(&mut self, id: PreviewId);
}
