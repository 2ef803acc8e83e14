use std::fs::{self, File};
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, info};
use zip::ZipArchive;

use crate::error::{InitializrError, Result};

/// Copy buffer size for extracting archive entries (8KB)
const COPY_BUFFER_SIZE: usize = 8 * 1024;

const ARCHIVE_SUFFIX: &str = ".zip";

/// How the fetched archive is written to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DestinationKind {
    /// Save the archive bytes unchanged as a single file
    Archive,
    /// Expand the archive into a directory tree
    Directory,
}

impl DestinationKind {
    /// Infer the kind from a path: anything ending in `.zip`
    /// (case-insensitive) is an archive, everything else a directory.
    pub fn from_path(path: &str) -> Self {
        if path.to_lowercase().ends_with(ARCHIVE_SUFFIX) {
            Self::Archive
        } else {
            Self::Directory
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub path: PathBuf,
    pub kind: DestinationKind,
}

impl Destination {
    /// An explicit kind wins over the path suffix.
    pub fn new(path: &str, kind: Option<DestinationKind>) -> Self {
        Self {
            path: PathBuf::from(path),
            kind: kind.unwrap_or_else(|| DestinationKind::from_path(path)),
        }
    }
}

/// What ended up on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Materialized {
    Saved { path: PathBuf, bytes: usize },
    Extracted { path: PathBuf, files: usize },
}

/// Write the archive to `destination` according to its kind.
pub fn materialize(bytes: &[u8], destination: &Destination) -> Result<Materialized> {
    let path = destination.path.clone();
    match destination.kind {
        DestinationKind::Archive => {
            let bytes = save_archive(bytes, &path)?;
            Ok(Materialized::Saved { path, bytes })
        }
        DestinationKind::Directory => {
            let files = extract_archive(bytes, &path)?;
            Ok(Materialized::Extracted { path, files })
        }
    }
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| InitializrError::io("create directory", path, e))
}

/// Save the archive bytes verbatim, creating parent directories as needed.
///
/// Returns the number of bytes written.
pub fn save_archive(bytes: &[u8], path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }

    fs::write(path, bytes).map_err(|e| InitializrError::io("write file", path, e))?;

    info!("Saved {} bytes to {}", bytes.len(), path.display());
    Ok(bytes.len())
}

/// Expand the archive under `target_dir`, entry by entry in stored order.
///
/// Ancestor directories are created on demand, so archives whose directory
/// entries come after (or are missing for) the files they contain still
/// extract. Existing files are overwritten. Returns the number of files
/// written; directory entries are not counted.
pub fn extract_archive(bytes: &[u8], target_dir: &Path) -> Result<usize> {
    create_dir_all(target_dir)?;

    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
    let mut files_extracted = 0;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let relative = entry
            .enclosed_name()
            .ok_or_else(|| InitializrError::UnsafeEntry(entry.name().to_string()))?;
        let out_path = target_dir.join(relative);

        if entry.is_dir() {
            create_dir_all(&out_path)?;
            debug!("Created directory: {}", out_path.display());
            continue;
        }

        if let Some(parent) = out_path.parent() {
            create_dir_all(parent)?;
        }

        let mut file =
            File::create(&out_path).map_err(|e| InitializrError::io("create file", &out_path, e))?;
        loop {
            let len = entry
                .read(&mut buffer)
                .map_err(|e| InitializrError::io("read archive entry for", &out_path, e))?;
            if len == 0 {
                break;
            }
            file.write_all(&buffer[..len])
                .map_err(|e| InitializrError::io("write file", &out_path, e))?;
        }

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            apply_executable_mode(&out_path, mode)?;
        }

        files_extracted += 1;
        debug!("Extracted file: {}", out_path.display());
    }

    info!(
        "Total files extracted: {} into {}",
        files_extracted,
        target_dir.display()
    );
    Ok(files_extracted)
}

/// Keep wrapper scripts such as `mvnw` and `gradlew` runnable.
#[cfg(unix)]
fn apply_executable_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if mode & 0o111 == 0 {
        return Ok(());
    }
    fs::set_permissions(path, fs::Permissions::from_mode((mode & 0o777) | 0o200))
        .map_err(|e| InitializrError::io("set permissions on", path, e))
}
