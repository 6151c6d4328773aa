//! JSON deck description.

use anyhow::{Context, Result};
use deck_pptx::{PackageConfig, Presentation, SlideOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A presentation described as a list of slides.
///
/// ```json
/// { "slides": [ { "type": "intro", "title": "Hello", "subtitle": "World" } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub slides: Vec<SlideOptions>,
}

impl Deck {
    /// Read a deck file, resolving relative image paths against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut deck: Deck = serde_json::from_str(&json)
            .with_context(|| format!("Invalid deck file {}", path.display()))?;

        if let Some(base) = path.parent() {
            deck.resolve_image_paths(base);
        }

        Ok(deck)
    }

    /// Make every relative `image_path` relative to `base` instead.
    pub fn resolve_image_paths(&mut self, base: &Path) {
        for slide in &mut self.slides {
            let image_path = match slide {
                SlideOptions::Pictorial(o) => &mut o.image_path,
                SlideOptions::TextPictureSplit(o) => &mut o.image_path,
                SlideOptions::PictureDescription(o) => &mut o.image_path,
                SlideOptions::Intro(_) | SlideOptions::Textual(_) => continue,
            };

            if let Some(path) = image_path.as_mut() {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
    }

    /// Build a presentation from the deck, slide by slide.
    pub fn into_presentation(self, config: PackageConfig) -> Result<Presentation> {
        let mut presentation = Presentation::with_config(config);

        for (position, slide) in self.slides.into_iter().enumerate() {
            let kind = slide.kind();
            presentation
                .add(slide)
                .with_context(|| format!("Slide {} ({:?})", position + 1, kind))?;
        }

        Ok(presentation)
    }
}

/// Default output path: the deck file with a `.pptx` extension.
pub fn default_output_path(deck_path: &Path) -> PathBuf {
    deck_path.with_extension("pptx")
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::Error;
    use deck_pptx::SlideKind;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "slides": [
            { "type": "textual", "title": "Agenda", "content": ["One", "Two"] },
            { "type": "intro", "title": "Welcome", "subtitle": "Hello" },
            { "type": "pictorial", "title": "Photo", "image_path": "images/img1.png",
              "coords": { "x": 100, "y": 200, "cx": 300, "cy": 400 } },
            { "type": "picture_description", "title": "Abs", "image_path": "/abs/img2.png", "content": [] }
        ]
    }"#;

    #[test]
    fn test_parse_tagged_slides() {
        let deck: Deck = serde_json::from_str(SAMPLE).unwrap();
        let kinds: Vec<_> = deck.slides.iter().map(SlideOptions::kind).collect();
        assert_eq!(
            kinds,
            [
                SlideKind::Textual,
                SlideKind::Intro,
                SlideKind::Pictorial,
                SlideKind::PictureDescription
            ]
        );
    }

    #[test]
    fn test_resolve_image_paths() {
        let mut deck: Deck = serde_json::from_str(SAMPLE).unwrap();
        deck.resolve_image_paths(Path::new("/decks"));

        match &deck.slides[2] {
            SlideOptions::Pictorial(o) => {
                assert_eq!(o.image_path.as_deref(), Some(Path::new("/decks/images/img1.png")))
            }
            other => panic!("unexpected slide {:?}", other),
        }
        match &deck.slides[3] {
            SlideOptions::PictureDescription(o) => {
                assert_eq!(o.image_path.as_deref(), Some(Path::new("/abs/img2.png")))
            }
            other => panic!("unexpected slide {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_is_reported() {
        let deck: Deck =
            serde_json::from_str(r#"{ "slides": [ { "type": "textual", "title": "No body" } ] }"#)
                .unwrap();

        let err = deck.into_presentation(PackageConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MissingArgument("content"))
        ));
        assert!(format!("{:#}", err).contains("Slide 1"));
    }

    #[test]
    fn test_load_and_save() {
        let dir = tempdir().unwrap();
        let deck_path = dir.path().join("talk.json");
        fs::write(
            &deck_path,
            r#"{ "slides": [
                { "type": "intro", "title": "Welcome", "subtitle": "Hello" },
                { "type": "textual", "title": "Agenda", "content": ["One"] }
            ] }"#,
        )
        .unwrap();

        let presentation = Deck::load(&deck_path)
            .unwrap()
            .into_presentation(PackageConfig::default())
            .unwrap();
        let output = default_output_path(&deck_path);
        presentation.save(&output).unwrap();

        assert_eq!(output, dir.path().join("talk.pptx"));
        assert!(output.is_file());
    }
}
