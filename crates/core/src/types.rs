//! Domain types shared by the geometry engine and the package writer.

use serde::{Deserialize, Serialize};

/// Placement rectangle of a picture on a slide, in EMUs.
///
/// `x`/`y` are the offset of the top-left corner, `cx`/`cy` the extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coords {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl Coords {
    /// Create a placement rectangle.
    pub fn new(x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self { x, y, cx, cy }
    }
}

/// Pixel dimensions of a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Create dimensions from a pixel width and height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either side is zero, which makes aspect-ratio scaling meaningless.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// A media file type declared in the package content-type manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaType {
    /// File extension without the leading dot, lowercase.
    pub extension: String,

    /// MIME type registered for the extension.
    pub content_type: String,
}

impl MediaType {
    /// Map a file extension to the MIME type presentation viewers expect.
    pub fn from_extension(ext: &str) -> Self {
        let extension = ext.to_lowercase();
        let content_type = match extension.as_str() {
            "jpg" | "jpeg" => "image/jpeg".to_string(),
            "tif" | "tiff" => "image/tiff".to_string(),
            "svg" => "image/svg+xml".to_string(),
            "emf" => "image/x-emf".to_string(),
            "wmf" => "image/x-wmf".to_string(),
            other => format!("image/{}", other),
        };

        Self {
            extension,
            content_type,
        }
    }
}
