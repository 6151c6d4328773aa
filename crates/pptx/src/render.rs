//! Filesystem side of package assembly: writing rendered parts, copying
//! media and materializing the template skeleton.

use askama::Template;
use deck_core::{Error, Result};
use std::fs;
use std::path::Path;

/// Placeholder file name used to keep empty directories in the skeleton.
const KEEP_FILE: &str = ".keep";

/// Render `view` and write it to `path`, creating parent directories.
pub fn render_part<T: Template>(view: &T, path: &Path) -> Result<()> {
    let xml = view
        .render()
        .map_err(|e| Error::RenderError(format!("{}: {}", path.display(), e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, xml)?;

    log::debug!("Rendered {}", path.display());
    Ok(())
}

/// Copy an image into the package's media directory under `image_name`.
///
/// If an entry with that name is already there, the copy is skipped.
pub fn copy_media(root: &Path, image_path: &Path, image_name: &str) -> Result<()> {
    let media_dir = root.join("ppt").join("media");
    let destination = media_dir.join(image_name);

    if destination.exists() {
        log::debug!("Media {} already present, not copying", image_name);
        return Ok(());
    }

    fs::create_dir_all(&media_dir)?;
    fs::copy(image_path, &destination)?;
    Ok(())
}

/// Recursively copy the skeleton directory `from` to `to`.
pub fn copy_skeleton(from: &Path, to: &Path) -> Result<()> {
    if !from.is_dir() {
        return Err(Error::NotFound(from.to_path_buf()));
    }

    fs::create_dir_all(to)?;
    for child in fs::read_dir(from)? {
        let child = child?;
        let target = to.join(child.file_name());

        if child.file_type()?.is_dir() {
            copy_skeleton(&child.path(), &target)?;
        } else {
            fs::copy(child.path(), &target)?;
        }
    }

    Ok(())
}

/// Delete every `.keep` marker below `dir`, leaving the directories in place.
pub fn remove_keep_files(dir: &Path) -> Result<()> {
    for child in fs::read_dir(dir)? {
        let child = child?;
        let path = child.path();

        if child.file_type()?.is_dir() {
            remove_keep_files(&path)?;
        } else if child.file_name() == KEEP_FILE {
            fs::remove_file(&path)?;
        }
    }

    Ok(())
}
