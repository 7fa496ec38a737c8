//! Output-file naming for annotated scripts.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// `script.py` -> `script_YYYYmmdd_HHMMSS.py`, beside the original.
pub fn timestamped_path(original: &Path) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    stamped(original, &timestamp.to_string())
}

fn stamped(original: &Path, timestamp: &str) -> PathBuf {
    let stem = original
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("annotated");
    let name = original.extension().and_then(OsStr::to_str).map_or_else(
        || format!("{stem}_{timestamp}"),
        |ext| format!("{stem}_{timestamp}.{ext}"),
    );
    original.with_file_name(name)
}
