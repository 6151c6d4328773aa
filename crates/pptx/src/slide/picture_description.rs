//! Picture with a title and caption underneath.

use super::{require, save_rel_xml, save_slide_xml, ImageRef, Slide, SlideKind};
use crate::probe::ImageProbe;
use crate::views::{PictureDescriptionView, PictureRelsView};
use deck_core::{Coords, LayoutPolicy, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureDescriptionOptions {
    pub title: Option<String>,
    pub image_path: Option<PathBuf>,
    pub content: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureDescription {
    title: String,
    image: ImageRef,
    content: Vec<String>,
    coords: Option<Coords>,
}

impl PictureDescription {
    pub fn new(options: PictureDescriptionOptions, probe: &dyn ImageProbe) -> Result<Self> {
        let title = require(options.title, "title")?;
        let image = ImageRef::new(require(options.image_path, "image_path")?)?;
        let content = require(options.content, "content")?;
        let coords = LayoutPolicy::Caption.place(probe.dimensions(image.path()));

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

    /// `None` when the image dimensions could not be determined.
    pub fn coords(&self) -> Option<Coords> {
        self.coords
    }
}

impl Slide for PictureDescription {
    fn kind(&self) -> SlideKind {
        SlideKind::PictureDescription
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
            &PictureDescriptionView {
                title: &self.title,
                image_name: self.image.name(),
                coords: self.coords,
                content: &self.content,
                font_size: 1600,
            },
            root,
            index,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::tests::FixedProbe;
    use deck_core::geometry::emu;
    use deck_core::{Dimensions, Error};
    use std::fs;
    use tempfile::tempdir;

    fn options() -> PictureDescriptionOptions {
        PictureDescriptionOptions {
            title: Some("Sample Title".into()),
            image_path: Some(PathBuf::from("images/test_image.jpg")),
            content: Some(vec!["Paragraph 1".into(), "Paragraph 2".into()]),
        }
    }

    #[test]
    fn test_caption_layout_coords() {
        let slide =
            PictureDescription::new(options(), &FixedProbe(Some(Dimensions::new(800, 600))))
                .unwrap();

        assert_eq!(slide.image().name(), "test_image.jpg");
        assert_eq!(
            slide.coords(),
            Some(Coords::new(2_032_000, emu(60), emu(400), emu(300)))
        );
    }

    #[test]
    fn test_unknown_dimensions_give_empty_coords() {
        let slide = PictureDescription::new(options(), &FixedProbe(None)).unwrap();
        assert_eq!(slide.coords(), None);
    }

    #[test]
    fn test_each_required_field() {
        let cases: [(fn(&mut PictureDescriptionOptions), &str); 3] = [
            (|o| o.title = None, "title"),
            (|o| o.image_path = None, "image_path"),
            (|o| o.content = None, "content"),
        ];

        for (clear, field) in cases {
            let mut opts = options();
            clear(&mut opts);
            match PictureDescription::new(opts, &FixedProbe(None)) {
                Err(Error::MissingArgument(name)) => assert_eq!(name, field),
                other => panic!("expected missing {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_render_without_coords() {
        let dir = tempdir().unwrap();
        let image_path = dir.path().join("test_image.jpg");
        fs::write(&image_path, b"jpeg bytes").unwrap();
        let root = dir.path().join("extract");

        let slide = PictureDescription::new(
            PictureDescriptionOptions {
                image_path: Some(image_path),
                ..options()
            },
            &FixedProbe(None),
        )
        .unwrap();
        slide.render(&root, 1).unwrap();

        let xml = fs::read_to_string(root.join("ppt/slides/slide1.xml")).unwrap();
        assert!(xml.contains(r#"r:embed="rId2""#));
        assert!(xml.contains("<a:t>Paragraph 1</a:t>"));
        assert!(root.join("ppt/media/test_image.jpg").is_file());
    }
}
