//! Presentation assembly.

use crate::compression;
use crate::config::PackageConfig;
use crate::probe::{HeaderProbe, ImageProbe};
use crate::render::{copy_skeleton, remove_keep_files, render_part};
use crate::slide::{
    Intro, IntroOptions, Pictorial, PictorialOptions, PictureDescription,
    PictureDescriptionOptions, Slide, SlideKind, SlideOptions, TextPictureSplit,
    TextPictureSplitOptions, Textual, TextualOptions,
};
use crate::views::{AppView, ContentTypesView, PresentationRelsView, PresentationView, SlideRef};
use deck_core::geometry::{slide_height, slide_width};
use deck_core::{Coords, Error, MediaType, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// An ordered set of slides that can be saved as a `.pptx` package.
#[derive(Debug)]
pub struct Presentation {
    slides: Vec<Box<dyn Slide>>,
    config: PackageConfig,
    probe: Box<dyn ImageProbe>,
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Presentation {
    /// Create an empty presentation using the bundled skeleton.
    pub fn new() -> Self {
        Self::with_config(PackageConfig::default())
    }

    /// Create an empty presentation with explicit configuration.
    pub fn with_config(config: PackageConfig) -> Self {
        Self {
            slides: Vec::new(),
            config,
            probe: Box::new(HeaderProbe),
        }
    }

    /// Replace the probe used to size images of slides added afterwards.
    pub fn with_probe(mut self, probe: Box<dyn ImageProbe>) -> Self {
        self.probe = probe;
        self
    }

    pub fn config(&self) -> &PackageConfig {
        &self.config
    }

    /// Slides in final order.
    pub fn slides(&self) -> &[Box<dyn Slide>] {
        &self.slides
    }

    /// Add or replace the title slide.
    ///
    /// The first intro goes to the front; a later one replaces it in place.
    pub fn add_intro(&mut self, title: impl Into<String>, subtitle: impl Into<String>) -> Result<()> {
        self.add(SlideOptions::Intro(IntroOptions {
            title: Some(title.into()),
            subtitle: Some(subtitle.into()),
        }))
    }

    pub fn add_textual(&mut self, title: impl Into<String>, content: Vec<String>) -> Result<()> {
        self.add(SlideOptions::Textual(TextualOptions {
            title: Some(title.into()),
            content: Some(content),
        }))
    }

    /// Append a picture slide; `coords` overrides the centered default placement.
    pub fn add_pictorial(
        &mut self,
        title: impl Into<String>,
        image_path: impl AsRef<Path>,
        coords: Option<Coords>,
    ) -> Result<()> {
        self.add(SlideOptions::Pictorial(PictorialOptions {
            title: Some(title.into()),
            image_path: Some(image_path.as_ref().to_path_buf()),
            coords,
        }))
    }

    pub fn add_text_picture_split(
        &mut self,
        title: impl Into<String>,
        image_path: impl AsRef<Path>,
        content: Vec<String>,
    ) -> Result<()> {
        self.add(SlideOptions::TextPictureSplit(TextPictureSplitOptions {
            title: Some(title.into()),
            image_path: Some(image_path.as_ref().to_path_buf()),
            content: Some(content),
        }))
    }

    pub fn add_picture_description(
        &mut self,
        title: impl Into<String>,
        image_path: impl AsRef<Path>,
        content: Vec<String>,
    ) -> Result<()> {
        self.add(SlideOptions::PictureDescription(PictureDescriptionOptions {
            title: Some(title.into()),
            image_path: Some(image_path.as_ref().to_path_buf()),
            content: Some(content),
        }))
    }

    /// Construct a slide from `options` and place it.
    ///
    /// Nothing is added if construction fails.
    pub fn add(&mut self, options: SlideOptions) -> Result<()> {
        let probe = self.probe.as_ref();
        let slide: Box<dyn Slide> = match options {
            SlideOptions::Intro(o) => Box::new(Intro::new(o)?),
            SlideOptions::Textual(o) => Box::new(Textual::new(o)?),
            SlideOptions::Pictorial(o) => Box::new(Pictorial::new(o, probe)?),
            SlideOptions::TextPictureSplit(o) => Box::new(TextPictureSplit::new(o, probe)?),
            SlideOptions::PictureDescription(o) => Box::new(PictureDescription::new(o, probe)?),
        };

        if slide.kind() != SlideKind::Intro {
            self.slides.push(slide);
            return Ok(());
        }

        match self.slides.iter().position(|s| s.kind() == SlideKind::Intro) {
            Some(existing) => self.slides[existing] = slide,
            None => self.slides.insert(0, slide),
        }

        Ok(())
    }

    /// Distinct image file types across all slides, in first-seen order.
    pub fn file_types(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for file_type in self.slides.iter().filter_map(|s| s.file_type()) {
            if !types.contains(&file_type) {
                types.push(file_type);
            }
        }
        types
    }

    /// Write the presentation as a `.pptx` package at `path`.
    ///
    /// Fails if `path` already exists. All parts are rendered into a scratch
    /// directory that is removed on every exit path; nothing is written to
    /// `path` unless rendering succeeded.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        if path.exists() {
            return Err(Error::AlreadyExists(path.to_path_buf()));
        }

        let scratch = tempfile::Builder::new().prefix("deck-").tempdir()?;
        let extract_path = scratch.path().join("extract");

        copy_skeleton(&self.config.template_path, &extract_path)?;
        remove_keep_files(&extract_path)?;

        let slide_refs: Vec<SlideRef> = (1..=self.slides.len()).map(SlideRef::new).collect();
        self.render_globals(&extract_path, &slide_refs)?;

        for (slide, slide_ref) in self.slides.iter().zip(&slide_refs) {
            log::debug!("Rendering slide {} ({:?})", slide_ref.index, slide.kind());
            slide.render(&extract_path, slide_ref.index)?;
        }

        if path.exists() {
            fs::remove_file(path)?;
        }
        compression::compress(&extract_path, path)?;

        log::info!("Saved {} slides to {}", self.slides.len(), path.display());
        Ok(path.to_path_buf())
    }

    fn render_globals(&self, root: &Path, slide_refs: &[SlideRef]) -> Result<()> {
        let media_types: Vec<MediaType> = self
            .file_types()
            .iter()
            .map(|ext| MediaType::from_extension(ext))
            .collect();

        render_part(
            &ContentTypesView {
                media_types: &media_types,
                slides: slide_refs,
            },
            &root.join("[Content_Types].xml"),
        )?;
        render_part(
            &PresentationRelsView { slides: slide_refs },
            &root.join("ppt").join("_rels").join("presentation.xml.rels"),
        )?;
        render_part(
            &PresentationView {
                slides: slide_refs,
                width: slide_width(),
                height: slide_height(),
            },
            &root.join("ppt").join("presentation.xml"),
        )?;
        render_part(
            &AppView {
                titles: self.slides.iter().map(|s| s.title()).collect(),
            },
            &root.join("docProps").join("app.xml"),
        )
    }
}
