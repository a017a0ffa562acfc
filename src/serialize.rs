//! JSON output for the colour dataset.
//!
//! The dataset is a flat JSON array of [`ColorRecord`]s, pretty-printed with
//! two-space indentation. Writes go to a temporary file next to the target
//! and are renamed into place, so the target is either fully replaced or
//! left untouched. A replaced target keeps its permissions; a new one gets
//! the usual umask-derived mode.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;

use crate::error::{MaterialsError, Result};
use crate::types::ColorRecord;

/// Render records as the dataset JSON text (with trailing newline).
pub fn to_json_string(records: &[ColorRecord]) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}

/// Write the dataset to `path`, replacing any previous content.
pub fn write_materials(path: &Path, records: &[ColorRecord]) -> Result<()> {
    let json = to_json_string(records).map_err(|e| MaterialsError::Serialize {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let io_error = |message: String| MaterialsError::Io {
        path: path.to_path_buf(),
        message,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir)
            .map_err(|e| io_error(format!("Failed to create output directory: {}", e)))?;
    }

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Applied at creation, so the umask still masks it.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| io_error(format!("Failed to create temporary file: {}", e)))?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| io_error(format!("Failed to copy permissions: {}", e)))?;
    }
    tmp.write_all(json.as_bytes())
        .map_err(|e| io_error(format!("Failed to write output: {}", e)))?;
    tmp.persist(path)
        .map_err(|e| io_error(format!("Failed to replace output: {}", e.error)))?;

    Ok(())
}

/// Read a dataset previously written by [`write_materials`].
pub fn read_materials(path: &Path) -> Result<Vec<ColorRecord>> {
    let content = fs::read_to_string(path).map_err(|e| MaterialsError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read dataset: {}", e),
    })?;

    serde_json::from_str(&content).map_err(|e| MaterialsError::Serialize {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
