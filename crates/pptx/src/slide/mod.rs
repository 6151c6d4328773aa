//! Slide variants.
//!
//! Each variant is built from a typed options struct, validated once at
//! construction, and rendered into the package at the index it is given
//! during save.

mod intro;
mod pictorial;
mod picture_description;
mod text_picture_split;
mod textual;

pub use intro::{Intro, IntroOptions};
pub use pictorial::{Pictorial, PictorialOptions};
pub use picture_description::{PictureDescription, PictureDescriptionOptions};
pub use text_picture_split::{TextPictureSplit, TextPictureSplitOptions};
pub use textual::{Textual, TextualOptions};

use crate::render::{copy_media, render_part};
use askama::Template;
use deck_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Which variant a slide is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideKind {
    Intro,
    Textual,
    Pictorial,
    TextPictureSplit,
    PictureDescription,
}

/// A slide that can render itself into an extracted package directory.
pub trait Slide: fmt::Debug {
    fn kind(&self) -> SlideKind;

    fn title(&self) -> &str;

    /// Lowercase extension of the embedded image, if the slide has one.
    fn file_type(&self) -> Option<String> {
        None
    }

    /// Write this slide's parts under `root` as slide number `index` (1-based).
    fn render(&self, root: &Path, index: usize) -> Result<()>;
}

/// Options for any slide variant, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlideOptions {
    Intro(IntroOptions),
    Textual(TextualOptions),
    Pictorial(PictorialOptions),
    TextPictureSplit(TextPictureSplitOptions),
    PictureDescription(PictureDescriptionOptions),
}

impl SlideOptions {
    pub fn kind(&self) -> SlideKind {
        match self {
            SlideOptions::Intro(_) => SlideKind::Intro,
            SlideOptions::Textual(_) => SlideKind::Textual,
            SlideOptions::Pictorial(_) => SlideKind::Pictorial,
            SlideOptions::TextPictureSplit(_) => SlideKind::TextPictureSplit,
            SlideOptions::PictureDescription(_) => SlideKind::PictureDescription,
        }
    }
}

/// Unwrap a required option or fail naming the field.
pub(crate) fn require<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(Error::MissingArgument(field))
}

/// Source image of a picture slide.
///
/// The file itself belongs to the caller; only its path is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    path: PathBuf,
    name: String,
}

impl ImageRef {
    pub fn new(path: PathBuf) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                Error::InvalidArgument(format!("image_path has no file name: {}", path.display()))
            })?;

        Ok(Self { path, name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base file name, also used as the media part name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_type(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .filter(|ext| !ext.is_empty())
    }

    pub(crate) fn copy_into(&self, root: &Path) -> Result<()> {
        copy_media(root, &self.path, &self.name)
    }
}

pub(crate) fn slide_rels_path(root: &Path, index: usize) -> PathBuf {
    root.join("ppt")
        .join("slides")
        .join("_rels")
        .join(format!("slide{}.xml.rels", index))
}

pub(crate) fn slide_path(root: &Path, index: usize) -> PathBuf {
    root.join("ppt")
        .join("slides")
        .join(format!("slide{}.xml", index))
}

pub(crate) fn save_rel_xml<T: Template>(view: &T, root: &Path, index: usize) -> Result<()> {
    render_part(view, &slide_rels_path(root, index))
}

pub(crate) fn save_slide_xml<T: Template>(view: &T, root: &Path, index: usize) -> Result<()> {
    render_part(view, &slide_path(root, index))
}
