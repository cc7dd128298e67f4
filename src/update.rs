//! # Header Rewriting
//!
//! Ties the codec and the logo together for whole documents and files.
//! A file is either fully rewritten or left untouched; there are no partial
//! writes.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::codec::{self, locate};
use crate::config::TargetConfig;
use crate::error::PugmarkError;
use crate::logo;
use crate::render::{Canvas, Palette};

/// Stamp the logo into the pixel array of `document` and return the new text.
///
/// Only the first `width * height` values are drawn on. Values between that
/// and the declared length, and any literals past the declared length, are
/// carried over unchanged.
pub fn update_document(
    document: &str,
    config: &TargetConfig,
    palette: &Palette,
) -> Result<String, PugmarkError> {
    let (width, height) = locate::dimensions(document, config)?;
    let mut fragment = codec::locate_and_decode(document, config)?;

    let area = width
        .checked_mul(height)
        .filter(|&area| area <= fragment.expected_length)
        .ok_or_else(|| {
            PugmarkError::Structure(format!(
                "{width}x{height} canvas does not fit in {} declared values",
                fragment.expected_length
            ))
        })?;
    debug!(
        width,
        height,
        declared = fragment.expected_length,
        found = fragment.values.len(),
        "located pixel array"
    );

    let screen = &mut fragment.screen_mut()[..area];
    let mut canvas = Canvas::new(screen, width, height).ok_or_else(|| {
        PugmarkError::Structure(format!("{width}x{height} canvas does not match its buffer"))
    })?;
    logo::compose(&mut canvas, palette);

    Ok(fragment.recompose())
}

/// Rewrite one header in place.
///
/// Returns whether the contents changed. With `dry_run` the file is never
/// written.
pub fn update_file(
    path: &Path,
    config: &TargetConfig,
    palette: &Palette,
    dry_run: bool,
) -> Result<bool, PugmarkError> {
    let content = fs::read_to_string(path)?;
    let updated = update_document(&content, config, palette)?;
    let changed = updated != content;
    if changed && !dry_run {
        fs::write(path, &updated)?;
    }
    debug!(path = %path.display(), changed, dry_run, "processed header");
    Ok(changed)
}

/// Headers in `media_dir` matching `file_glob`, sorted by path.
pub fn find_targets(media_dir: &Path, file_glob: &str) -> Result<Vec<PathBuf>, PugmarkError> {
    let pattern = media_dir.join(file_glob);
    let pattern = pattern
        .to_str()
        .ok_or_else(|| PugmarkError::Pattern(format!("non UTF-8 path {}", pattern.display())))?;
    let entries = glob::glob(pattern).map_err(|e| PugmarkError::Pattern(e.to_string()))?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) => warn!("unreadable glob entry: {}", e),
        }
    }
    paths.sort();
    Ok(paths)
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct UpdateReport {
    /// Files processed successfully, in path order
    pub updated: Vec<PathBuf>,
    /// Subset of `updated` whose contents actually changed
    pub changed: usize,
    /// Files left untouched because of an error
    pub failed: Vec<(PathBuf, PugmarkError)>,
}

/// Rewrite every header under `media_dir` matching `file_glob`
/// (usually [`TargetConfig::file_glob`]).
///
/// A failing file is recorded and skipped; it never stops the batch.
pub fn update_all(
    media_dir: &Path,
    file_glob: &str,
    config: &TargetConfig,
    palette: &Palette,
    dry_run: bool,
) -> Result<UpdateReport, PugmarkError> {
    let targets = find_targets(media_dir, file_glob)?;
    info!("found {} candidate headers in {}", targets.len(), media_dir.display());

    let mut report = UpdateReport::default();
    for path in targets {
        match update_file(&path, config, palette, dry_run) {
            Ok(changed) => {
                if changed {
                    report.changed += 1;
                }
                report.updated.push(path);
            }
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                report.failed.push((path, e));
            }
        }
    }
    Ok(report)
}
