use crate::device_file_picker::interface::{
    FilePicker, FilePickerError, ImageFile, IMAGE_EXTENSIONS,
};
use crate::library::logger::interface::Logger;
use std::sync::Arc;

pub struct FilePickerRfd {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FilePickerRfd {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("file_picker"),
        }
    }
}

impl FilePicker for FilePickerRfd {
    fn pick_image(&self) -> Result<Option<ImageFile>, FilePickerError> {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Upload an animal image")
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file()
        else {
            self.logger.info("Image dialog dismissed");
            return Ok(None);
        };

        let file = ImageFile::read(&path)?;
        self.logger.info(&format!(
            "Picked {} ({}, {} bytes)",
            file.file_name,
            file.media_type,
            file.bytes.len()
        ));
        Ok(Some(file))
    }
}
