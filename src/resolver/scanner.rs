//! Flat directory scanner for texture files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// A `.png` file found in the texture directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureFile {
    pub file_name: String,
    pub path: PathBuf,
}

/// List the `.png` files directly inside `dir`, sorted by file name.
///
/// The scan is non-recursive. A missing directory yields an empty list, and
/// names that are not valid UTF-8 are skipped. Entries are listed by name
/// only: a `.png` symlink whose target is missing is still returned, so the
/// failure surfaces when the texture is opened.
pub fn scan_textures(dir: &Path) -> Vec<TextureFile> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        // Links are not followed here; `is_dir` on the path resolves them.
        .filter(|entry| !entry.file_type().is_dir() && !entry.path().is_dir())
        .filter_map(|entry| {
            let file_name = entry.file_name().to_str()?.to_string();
            if !file_name.ends_with(".png") {
                return None;
            }
            Some(TextureFile {
                file_name,
                path: entry.into_path(),
            })
        })
        .collect()
}
