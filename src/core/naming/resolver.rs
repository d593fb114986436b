//! Versioned filename resolution
//!
//! Given an output folder and a base name, determine the lowest version
//! number not already taken by files on disk. The scan drives the `{V...}`
//! tokens in the naming pattern: version N is the numeric maximum found
//! among existing files, plus one.
//!
//! The scan looks for a literal `_V<digits>` marker (case-insensitive)
//! anywhere in the filename after the base name, regardless of where the
//! configured pattern places its version token. The marker convention is
//! narrower than the token grammar on purpose: patterns that moved `{V}`
//! elsewhere or dropped the underscore still render correctly, but their
//! older exports are not counted by the scan. Callers that need a different
//! convention must change both halves together.

use crate::domain::errors::EncodaError;
use crate::domain::result::Result;
use regex::Regex;
use std::path::Path;

/// Determine the next free version number for `base_name` in `folder`
///
/// Rules, in order:
/// - A folder that does not exist yields version 1 without scanning; the
///   caller (or the host) creates it before writing.
/// - Only plain files are considered; directories are ignored.
/// - A file is a candidate when its lowercased name starts with the
///   lowercased base name. The base-name prefix and the extension (from the
///   last `.` onward) are stripped, and every `_V<digits>` run in the
///   remainder is parsed as a candidate version.
/// - The result is the numeric maximum of all candidates plus one, or 1
///   when nothing matches.
///
/// # Errors
///
/// Fails only when the directory listing itself fails. Callers fall back to
/// version 1 rather than aborting the export.
///
/// # Examples
///
/// ```no_run
/// use encoda::core::naming::resolver::resolve_next_version;
/// use std::path::Path;
///
/// let version = resolve_next_version(Path::new("/exports"), "Edit")?;
/// # Ok::<(), encoda::domain::EncodaError>(())
/// ```
pub fn resolve_next_version(folder: &Path, base_name: &str) -> Result<u32> {
    if !folder.exists() {
        tracing::debug!(
            folder = %folder.display(),
            "Output folder does not exist yet, starting at version 1"
        );
        return Ok(1);
    }

    let entries = std::fs::read_dir(folder).map_err(|e| {
        EncodaError::Naming(format!(
            "Failed to list output folder {}: {}",
            folder.display(),
            e
        ))
    })?;

    let marker_re = Regex::new(r"(?i)_v(\d+)").expect("version marker regex is valid");
    let base_lower = base_name.to_lowercase();
    let mut highest: u32 = 0;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // A single unreadable entry is not worth failing the scan.
                tracing::warn!(error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };

        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !file_name.to_lowercase().starts_with(&base_lower) {
            continue;
        }

        // Strip the base-name prefix, then the extension. The prefix is cut
        // by byte length; when lowercasing shifted char boundaries (non-ASCII
        // base names) the file is skipped rather than sliced mid-character.
        let remainder = match file_name.get(base_name.len()..) {
            Some(rest) => rest,
            None => continue,
        };
        let remainder = match remainder.rfind('.') {
            Some(dot) => &remainder[..dot],
            None => remainder,
        };

        for caps in marker_re.captures_iter(remainder) {
            if let Ok(candidate) = caps[1].parse::<u32>() {
                if candidate > highest {
                    tracing::trace!(
                        file = %file_name,
                        candidate,
                        "Found versioned export"
                    );
                    highest = candidate;
                }
            }
        }
    }

    Ok(highest + 1)
}
