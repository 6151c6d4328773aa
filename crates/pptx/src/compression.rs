//! ZIP codec for presentation packages.
//!
//! A package on disk is a plain directory tree whose relative paths are the
//! part names; these functions move it into and out of a ZIP container.

use deck_core::{Error, Result};
use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use zip::result::ZipError;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Entries whose name contains this marker are desktop metadata, never package parts.
const METADATA_MARKER: &str = "DS_Store";

/// Extract every entry of `archive_path` below `target_dir`.
///
/// Files that already exist at their destination are left untouched, so
/// extracting the same archive twice is a no-op.
pub fn decompress(archive_path: &Path, target_dir: &Path) -> Result<()> {
    let file = File::open(archive_path).map_err(|e| {
        Error::ZipError(format!(
            "Failed to open {}: {}",
            archive_path.display(),
            e
        ))
    })?;
    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(zip_error)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(zip_error)?;

        let Some(relative) = entry.enclosed_name().map(Path::to_path_buf) else {
            log::warn!("Skipping entry outside the target directory: {}", entry.name());
            continue;
        };
        let out_path = target_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if out_path.exists() {
            log::debug!("Already extracted: {}", out_path.display());
            continue;
        }

        let mut out = File::create(&out_path)?;
        io::copy(&mut entry, &mut out)?;
    }

    log::debug!(
        "Extracted {} entries from {} into {}",
        archive.len(),
        archive_path.display(),
        target_dir.display()
    );

    Ok(())
}

/// Pack every entry below `source_dir` into a new archive at `archive_path`.
///
/// Entry names are paths relative to `source_dir` with `/` separators.
/// Hidden files are included; desktop metadata files are not. The archive
/// is never written over an existing file.
pub fn compress(source_dir: &Path, archive_path: &Path) -> Result<()> {
    if !source_dir.is_dir() {
        return Err(Error::NotFound(source_dir.to_path_buf()));
    }

    if archive_path.exists() {
        return Err(Error::AlreadyExists(archive_path.to_path_buf()));
    }

    let mut entries = Vec::new();
    collect_entries(source_dir, source_dir, &mut entries)?;

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(archive_path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => Error::AlreadyExists(archive_path.to_path_buf()),
            _ => Error::IoError(e),
        })?;

    // Never leave a half-written archive behind.
    if let Err(e) = write_entries(file, &entries, archive_path) {
        let _ = fs::remove_file(archive_path);
        return Err(e);
    }

    log::info!(
        "Packed {} entries from {} into {}",
        entries.len(),
        source_dir.display(),
        archive_path.display()
    );

    Ok(())
}

/// A filesystem entry scheduled for archiving.
#[derive(Debug)]
struct Entry {
    path: PathBuf,
    name: String,
    is_dir: bool,
}

fn write_entries(file: File, entries: &[Entry], archive_path: &Path) -> Result<()> {
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut seen = HashSet::new();

    for entry in entries {
        if !seen.insert(entry.name.as_str()) {
            return Err(Error::AlreadyExists(archive_path.to_path_buf()));
        }

        if entry.is_dir {
            zip.add_directory(entry.name.clone(), options)
                .map_err(zip_error)?;
        } else {
            zip.start_file(entry.name.clone(), options)
                .map_err(zip_error)?;
            let mut source = File::open(&entry.path)?;
            io::copy(&mut source, &mut zip)?;
        }
    }

    let mut writer = zip.finish().map_err(zip_error)?;
    writer.flush()?;

    Ok(())
}

/// Walk `dir` depth-first in name order, recording entries relative to `root`.
fn collect_entries(root: &Path, dir: &Path, out: &mut Vec<Entry>) -> Result<()> {
    let mut children = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    children.sort_by_key(|child| child.file_name());

    for child in children {
        if child.file_name().to_string_lossy().contains(METADATA_MARKER) {
            continue;
        }

        let path = child.path();
        let is_dir = child.file_type()?.is_dir();
        let name = entry_name(root, &path)?;

        out.push(Entry {
            path: path.clone(),
            name,
            is_dir,
        });

        if is_dir {
            collect_entries(root, &path, out)?;
        }
    }

    Ok(())
}

/// Relative path of `path` below `root`, joined with forward slashes.
fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| Error::InvalidArgument(format!("{} is outside {}", path.display(), root.display())))?;

    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();

    Ok(parts.join("/"))
}

fn zip_error(e: ZipError) -> Error {
    Error::ZipError(e.to_string())
}
