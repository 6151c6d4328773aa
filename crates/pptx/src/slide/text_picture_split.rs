//! Bulleted text on the left, picture on the right.

use super::{require, save_rel_xml, save_slide_xml, ImageRef, Slide, SlideKind};
use crate::probe::ImageProbe;
use crate::views::{PictureRelsView, TextPictureSplitView};
use deck_core::{Coords, LayoutPolicy, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPictureSplitOptions {
    pub title: Option<String>,
    pub image_path: Option<PathBuf>,
    pub content: Option<Vec<String>>,
}

/// Placement is always derived from the image; there is no override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPictureSplit {
    title: String,
    image: ImageRef,
    content: Vec<String>,
    coords: Option<Coords>,
}

impl TextPictureSplit {
    pub fn new(options: TextPictureSplitOptions, probe: &dyn ImageProbe) -> Result<Self> {
        let title = require(options.title, "title")?;
        let image = ImageRef::new(require(options.image_path, "image_path")?)?;
        let content = require(options.content, "content")?;
        let coords = LayoutPolicy::Split.place(probe.dimensions(image.path()));

        Ok(Self {
            title,
            image,
            content,
            coords,
        })
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn coords(&self) -> Option<Coords> {
        self.coords
    }
}

impl Slide for TextPictureSplit {
    fn kind(&self) -> SlideKind {
        SlideKind::TextPictureSplit
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
            &TextPictureSplitView {
                title: &self.title,
                image_name: self.image.name(),
                coords: self.coords,
                content: &self.content,
                font_size: 1800,
            },
            root,
            index,
        )
    }
}
