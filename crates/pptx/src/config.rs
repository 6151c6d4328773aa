//! Package writer configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Skeleton directory shipped with this crate.
const BUNDLED_TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/template");

/// Settings injected into a [`Presentation`](crate::Presentation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Directory holding the boilerplate package parts copied into every package.
    pub template_path: PathBuf,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(BUNDLED_TEMPLATE_DIR),
        }
    }
}

impl PackageConfig {
    /// Create a configuration using the bundled skeleton.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different skeleton directory.
    pub fn with_template_path(mut self, path: impl AsRef<Path>) -> Self {
        self.template_path = path.as_ref().to_path_buf();
        self
    }
}
