//! Title and a single centered picture.

use super::{require, save_rel_xml, save_slide_xml, ImageRef, Slide, SlideKind};
use crate::probe::ImageProbe;
use crate::views::{PictorialView, PictureRelsView};
use deck_core::{Coords, LayoutPolicy, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictorialOptions {
    pub title: Option<String>,
    pub image_path: Option<PathBuf>,
    /// Explicit placement; derived from the image size when absent.
    pub coords: Option<Coords>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pictorial {
    title: String,
    image: ImageRef,
    coords: Option<Coords>,
}

impl Pictorial {
    pub fn new(options: PictorialOptions, probe: &dyn ImageProbe) -> Result<Self> {
        let title = require(options.title, "title")?;
        let image = ImageRef::new(require(options.image_path, "image_path")?)?;
        let coords = options
            .coords
            .or_else(|| LayoutPolicy::Centered.place(probe.dimensions(image.path())));

        Ok(Self {
            title,
            image,
            coords,
        })
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn coords(&self) -> Option<Coords> {
        self.coords
    }
}

impl Slide for Pictorial {
    fn kind(&self) -> SlideKind {
        SlideKind::Pictorial
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn file_type(&self) -> Option<String> {
        self.image.file_type()
    }

    fn render(&self, root: &Path, index: usize) -> Result<()> {
        self.image.copy_into(root)?;
        save_rel_xml(
            &PictureRelsView::new(self.image.name()),
            root,
            index,
        )?;
        save_slide_xml(
            &PictorialView {
                title: &self.title,
                image_name: self.image.name(),
                coords: self.coords,
            },
            root,
            index,
        )
    }
}
