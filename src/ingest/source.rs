//! Walk file discovery and decoding.
//!
//! - a single file is used as-is
//! - a directory contributes its direct children (no recursion), in file-name order
//! - files with the gzip extension are decompressed transparently

use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::InputConfig;

/// How the bytes of a walk file are encoded on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkFormat {
    Plain,
    Gzip,
}

impl WalkFormat {
    /// Detect the format from the file name suffix, e.g. `walks.txt.gz`.
    pub fn from_path(path: &Path, gzip_extension: &str) -> Self {
        let is_gzip = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == gzip_extension.trim_start_matches('.'));

        if is_gzip { Self::Gzip } else { Self::Plain }
    }
}

/// Open a walk file as a line-readable UTF-8 stream.
pub fn open_walk_file(path: &Path, format: WalkFormat) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    Ok(match format {
        WalkFormat::Plain => Box::new(BufReader::new(file)),
        WalkFormat::Gzip => Box::new(BufReader::new(MultiGzDecoder::new(file))),
    })
}

/// A directory entry that could not be inspected, e.g. a dangling symlink.
#[derive(Debug)]
pub struct UnreadableEntry {
    pub path: PathBuf,
    pub source: io::Error,
}

/// List the walk files under `input`, in processing order.
///
/// Entries that cannot be inspected are returned as `Err` in their place so
/// the caller can report them like any other unreadable file. `exclude` names
/// a file that must never be read back as input (the output file when it
/// lives in the walk directory).
pub fn discover_walk_files(
    input: &Path,
    options: &InputConfig,
    exclude: Option<&Path>,
) -> io::Result<Vec<Result<PathBuf, UnreadableEntry>>> {
    if !input.is_dir() {
        return Ok(vec![Ok(input.to_path_buf())]);
    }

    let excluded = exclude.map(canonical_or_self);
    let mut files = Vec::new();

    for entry in WalkDir::new(input)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("cannot list walk directory")));
            }
            Err(e) => {
                let path = e.path().unwrap_or(input).to_path_buf();
                if is_selected(&path, options, excluded.as_deref()) {
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("cannot inspect directory entry"));
                    files.push(Err(UnreadableEntry { path, source }));
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if is_selected(path, options, excluded.as_deref()) {
            files.push(Ok(path.to_path_buf()));
        }
    }

    Ok(files)
}

/// Apply the hidden-file and output-file filters.
fn is_selected(path: &Path, options: &InputConfig, excluded: Option<&Path>) -> bool {
    if options.skip_hidden
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'))
    {
        tracing::debug!("[discover] hidden file skipped: {}", path.display());
        return false;
    }

    if excluded.is_some_and(|out| canonical_or_self(path) == out) {
        tracing::debug!("[discover] output file skipped: {}", path.display());
        return false;
    }

    true
}

fn canonical_or_self(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
