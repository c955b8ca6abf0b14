//! Icon library loading.
//!
//! Each `<icons_dir>/<library>.json` file is a JSON object mapping icon name
//! to SVG path data; the file stem is the library name used in `lib:name`
//! references.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use pgdocs_renderer::IconLibraries;

use crate::error::SiteError;

/// Load every `*.json` library in `dir`, in file name order.
///
/// # Errors
///
/// Returns [`SiteError::Icons`] if the directory or a library file cannot be
/// read, or a file is not a name → path object.
pub fn load_icon_libraries(dir: &Path) -> Result<IconLibraries, SiteError> {
    let icons_error = |path: &Path, message: String| SiteError::Icons {
        path: path.to_path_buf(),
        message,
    };

    let entries = fs::read_dir(dir).map_err(|e| icons_error(dir, e.to_string()))?;
    let mut files: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let mut libraries = IconLibraries::new();
    for path in files {
        let Some(library) = path.file_stem().and_then(|s| s.to_str()) else {
            tracing::warn!(path = %path.display(), "Skipping icon library with non-UTF-8 name");
            continue;
        };
        let content = fs::read_to_string(&path).map_err(|e| icons_error(&path, e.to_string()))?;
        let icons: BTreeMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| icons_error(&path, format!("Invalid JSON: {e}")))?;

        tracing::debug!(library, count = icons.len(), "Loaded icon library");
        libraries.insert_library(library, icons);
    }
    Ok(libraries)
}
