//! PPTX (Office Open XML) package writer.
//!
//! Builds `.pptx` files from scratch: slides are rendered from templates into
//! a copy of a fixed package skeleton, which is then zipped.

pub mod compression;
pub mod config;
pub mod presentation;
pub mod probe;
pub mod render;
pub mod slide;
pub mod views;

pub use config::PackageConfig;
pub use presentation::Presentation;
pub use probe::{HeaderProbe, ImageProbe};
pub use slide::{Slide, SlideKind, SlideOptions};
