//! Title slide.

use super::{require, save_rel_xml, save_slide_xml, Slide, SlideKind};
use crate::views::{IntroView, TextRelsView};
use deck_core::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroOptions {
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

/// Opening slide with a centered title and subtitle.
///
/// A presentation holds at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intro {
    title: String,
    subtitle: String,
}

impl Intro {
    pub fn new(options: IntroOptions) -> Result<Self> {
        Ok(Self {
            title: require(options.title, "title")?,
            subtitle: require(options.subtitle, "subtitle")?,
        })
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }
}

impl Slide for Intro {
    fn kind(&self) -> SlideKind {
        SlideKind::Intro
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self, root: &Path, index: usize) -> Result<()> {
        save_rel_xml(&TextRelsView, root, index)?;
        save_slide_xml(
            &IntroView {
                title: &self.title,
                subtitle: &self.subtitle,
            },
            root,
            index,
        )
    }
}
