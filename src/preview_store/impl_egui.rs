use crate::device_file_picker::interface::ImageFile;
use crate::preview_store::interface::{PreviewError, PreviewId, PreviewStore};
use eframe::egui;
use std::collections::HashMap;

/// Decodes previews into egui textures. Dropping a `TextureHandle` frees the
/// texture, so revoking is removal from the map.
pub struct PreviewStoreEgui {
    ctx: egui::Context,
    textures: HashMap<PreviewId, egui::TextureHandle>,
}

impl PreviewStoreEgui {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            textures: HashMap::new(),
        }
    }

    pub fn texture(&self, id: PreviewId) -> Option<&egui::TextureHandle> {
        self.textures.get(&id)
    }
}

impl PreviewStore for PreviewStoreEgui {
    fn create(&mut self, id: PreviewId, file: &ImageFile) -> Result<(), PreviewError> {
        let decoded =
            image::load_from_memory(&file.bytes).map_err(|source| PreviewError::Decode {
                file_name: file.file_name.clone(),
                source,
            })?;
        let rgba = decoded.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let pixels = rgba.as_flat_samples();
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice());

        let texture = self
            .ctx
            .load_texture(id.to_string(), color_image, egui::TextureOptions::LINEAR);
        self.textures.insert(id, texture);
        Ok(())
    }

    fn revoke(&mut self, id: PreviewId) {
        self.textures.remove(&id);
    }
}
