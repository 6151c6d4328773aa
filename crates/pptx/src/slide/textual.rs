//! Title and bulleted text.

use super::{require, save_rel_xml, save_slide_xml, Slide, SlideKind};
use crate::views::{TextRelsView, TextualView};
use deck_core::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextualOptions {
    pub title: Option<String>,
    pub content: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Textual {
    title: String,
    content: Vec<String>,
}

impl Textual {
    pub fn new(options: TextualOptions) -> Result<Self> {
        Ok(Self {
            title: require(options.title, "title")?,
            content: require(options.content, "content")?,
        })
    }

    /// Paragraphs in rendering order.
    pub fn content(&self) -> &[String] {
        &self.content
    }
}

impl Slide for Textual {
    fn kind(&self) -> SlideKind {
        SlideKind::Textual
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self, root: &Path, index: usize) -> Result<()> {
        save_rel_xml(&TextRelsView, root, index)?;
        save_slide_xml(
            &TextualView {
                title: &self.title,
                content: &self.content,
                font_size: 2000,
            },
            root,
            index,
        )
    }
}
