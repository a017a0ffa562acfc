//! Texture resolution: associating texture files with catalog blocks.
//!
//! The texture directory is listed once; each block id is then matched
//! against the listing with the rules in [`rules`].
//!
//! # Example
//!
//! ```ignore
//! use block_colours::resolver::TextureResolver;
//!
//! let resolver = TextureResolver::scan("textures/block".as_ref());
//! for m in resolver.resolve("oak_log") {
//!     println!("{} -> {}", m.label(), m.path.display());
//! }
//! ```

mod rules;
mod scanner;

use std::path::{Path, PathBuf};

use crate::types::TextureMatch;

pub use rules::{classify, Classification, ExclusionRule, EXCLUSION_RULES};
pub use scanner::{scan_textures, TextureFile};

/// A `<block_id>_<part>.png` file turned away by an exclusion rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub file_name: String,
    /// Name of the rule that rejected the file.
    pub reason: &'static str,
}

/// Matches and rejections for one block id.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub matches: Vec<TextureMatch>,
    pub rejected: Vec<Rejection>,
}

/// Resolves block ids against a snapshot of a texture directory.
#[derive(Debug, Clone)]
pub struct TextureResolver {
    dir: PathBuf,
    files: Vec<TextureFile>,
}

impl TextureResolver {
    /// Snapshot the `.png` files in `dir`.
    pub fn scan(dir: &Path) -> Self {
        Self::from_files(dir, scan_textures(dir))
    }

    /// Build a resolver over an existing listing.
    pub fn from_files(dir: &Path, files: Vec<TextureFile>) -> Self {
        Self {
            dir: dir.to_path_buf(),
            files,
        }
    }

    /// The scanned directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of `.png` files in the snapshot.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Texture matches for a block id, in file name order.
    pub fn resolve(&self, block_id: &str) -> Vec<TextureMatch> {
        self.resolve_detailed(block_id).matches
    }

    /// Texture matches plus the files rejected along the way.
    pub fn resolve_detailed(&self, block_id: &str) -> Resolution {
        let mut resolution = Resolution::default();

        for file in &self.files {
            let part = match classify(block_id, &file.file_name) {
                None => continue,
                Some(Classification::Base) => None,
                Some(Classification::Part(part)) => Some(part),
                Some(Classification::Rejected(reason)) => {
                    resolution.rejected.push(Rejection {
                        file_name: file.file_name.clone(),
                        reason,
                    });
                    continue;
                }
            };

            resolution.matches.push(TextureMatch {
                block_id: block_id.to_string(),
                part,
                path: file.path.clone(),
            });
        }

        resolution
    }
}
