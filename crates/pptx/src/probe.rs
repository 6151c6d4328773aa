//! Image dimension probing.

use deck_core::Dimensions;
use std::fmt;
use std::path::Path;

/// Reports the pixel dimensions of an image file, or `None` when unknown.
pub trait ImageProbe: fmt::Debug {
    fn dimensions(&self, path: &Path) -> Option<Dimensions>;
}

/// Probe that reads only the image header via the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderProbe;

impl ImageProbe for HeaderProbe {
    fn dimensions(&self, path: &Path) -> Option<Dimensions> {
        match image::image_dimensions(path) {
            Ok(size) => Some(Dimensions::from(size)),
            Err(e) => {
                log::warn!("Could not read dimensions of {}: {}", path.display(), e);
                None
            }
        }
    }
}
