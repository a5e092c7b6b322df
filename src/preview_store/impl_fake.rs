use crate::device_file_picker::interface::ImageFile;
use crate::preview_store::interface::{PreviewError, PreviewId, PreviewStore};
use std::collections::BTreeSet;

#[derive(Debug, Default)]
pub struct PreviewStoreFake {
    pub live: BTreeSet<PreviewId>,
    pub created: Vec<PreviewId>,
    pub revoked: Vec<PreviewId>,
}

impl PreviewStoreFake {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreviewStore for PreviewStoreFake {
    fn create(&mut self, id: PreviewId, _file: &ImageFile) -> Result<(), PreviewError> {
        self.live.insert(id);
        self.created.push(id);
        Ok(())
    }

    fn revoke(&mut self, id: PreviewId) {
        self.live.remove(&id);
        self.revoked.push(id);
    }
}
