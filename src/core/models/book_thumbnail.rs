use anyhow::{Context, Result};
use iced::widget::image;

#[derive(Clone)]
pub struct BookThumbnail {
    pub image_handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Debug for BookThumbnail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookThumbnail")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl BookThumbnail {
    pub fn build_from_raw_data(width_pixels: u32, height_pixels: u32, raw_rgba_data: Vec<u8>) -> Self {
        log::debug!(
            "[THUMBNAIL] building thumbnail: {}x{}",
            width_pixels,
            height_pixels
        );

        Self {
            image_handle: image::Handle::from_rgba(width_pixels, height_pixels, raw_rgba_data),
            width: width_pixels,
            height: height_pixels,
        }
    }

    /// Decodes an encoded image (JPEG, PNG, ...) as served by the thumbnail link.
    pub fn decode_from_bytes(encoded: &[u8]) -> Result<Self> {
        if encoded.is_empty() {
            anyhow::bail!("Thumbnail response was empty");
        }

        let decoded = ::image::load_from_memory(encoded)
            .context("Unable to decode thumbnail image")?
            .to_rgba8();

        let (width, height) = decoded.dimensions();
        Ok(Self::build_from_raw_data(width, height, decoded.into_raw()))
    }
}
