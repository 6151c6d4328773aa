//! Typed views over the XML part templates in `views/`.
//!
//! Every package part that is not copied verbatim from the skeleton is
//! rendered from one of these.

use askama::Template;
use deck_core::{Coords, MediaType};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Relationship ids rId1..rId5 are taken by the fixed presentation parts.
const FIXED_PRESENTATION_RELS: usize = 5;

/// First slide id allowed by the format.
const SLIDE_ID_BASE: usize = 255;

/// Bytes left as-is in a relationship target path segment.
const PART_NAME_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// One slide's entry in the presentation part and its relationships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRef {
    /// 1-based position of the slide.
    pub index: usize,
    /// Relationship id from the presentation part to the slide part.
    pub rel_id: String,
    /// Id listed in `p:sldIdLst`.
    pub slide_id: usize,
}

impl SlideRef {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            rel_id: format!("rId{}", index + FIXED_PRESENTATION_RELS),
            slide_id: index + SLIDE_ID_BASE,
        }
    }
}

#[derive(Template)]
#[template(path = "content_types.xml", escape = "html")]
pub struct ContentTypesView<'a> {
    pub media_types: &'a [MediaType],
    pub slides: &'a [SlideRef],
}

#[derive(Template)]
#[template(path = "presentation.xml.rels", escape = "html")]
pub struct PresentationRelsView<'a> {
    pub slides: &'a [SlideRef],
}

#[derive(Template)]
#[template(path = "presentation.xml", escape = "html")]
pub struct PresentationView<'a> {
    pub slides: &'a [SlideRef],
    pub width: i64,
    pub height: i64,
}

#[derive(Template)]
#[template(path = "app.xml", escape = "html")]
pub struct AppView<'a> {
    pub titles: Vec<&'a str>,
}

/// Slide relationships for slides without media.
#[derive(Template)]
#[template(path = "slides/text.xml.rels", escape = "html")]
pub struct TextRelsView;

/// Slide relationships for slides embedding one picture.
#[derive(Template)]
#[template(path = "slides/picture.xml.rels", escape = "html")]
pub struct PictureRelsView {
    /// Media part path relative to the slide, percent-encoded.
    pub target: String,
}

impl PictureRelsView {
    pub fn new(image_name: &str) -> Self {
        Self {
            target: format!("../media/{}", utf8_percent_encode(image_name, PART_NAME_SAFE)),
        }
    }
}

#[derive(Template)]
#[template(path = "slides/intro.xml", escape = "html")]
pub struct IntroView<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
}

#[derive(Template)]
#[template(path = "slides/textual.xml", escape = "html")]
pub struct TextualView<'a> {
    pub title: &'a str,
    pub content: &'a [String],
    pub font_size: u32,
}

#[derive(Template)]
#[template(path = "slides/pictorial.xml", escape = "html")]
pub struct PictorialView<'a> {
    pub title: &'a str,
    pub image_name: &'a str,
    pub coords: Option<Coords>,
}

#[derive(Template)]
#[template(path = "slides/text_picture_split.xml", escape = "html")]
pub struct TextPictureSplitView<'a> {
    pub title: &'a str,
    pub image_name: &'a str,
    pub coords: Option<Coords>,
    pub content: &'a [String],
    pub font_size: u32,
}

#[derive(Template)]
#[template(path = "slides/picture_description.xml", escape = "html")]
pub struct PictureDescriptionView<'a> {
    pub title: &'a str,
    pub image_name: &'a str,
    pub coords: Option<Coords>,
    pub content: &'a [String],
    pub font_size: u32,
}
