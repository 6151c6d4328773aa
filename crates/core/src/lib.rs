//! Core domain types, error taxonomy and slide geometry
//! for PowerPoint package assembly.

pub mod error;
pub mod geometry;
pub mod types;

pub use error::{Error, Result};
pub use geometry::LayoutPolicy;
pub use types::{Coords, Dimensions, MediaType};
