//! The block catalog.
//!
//! The catalog is an ordered list of known block identifiers, each paired
//! with a [`TexturingScheme`]. It is kept as a plain-text table rather than
//! code: one `<block_id> <scheme>` pair per line, `#` starts a comment.
//! The built-in table is embedded from `blocks.txt`; a file in the same
//! format can replace it.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{MaterialsError, Result};
use crate::types::TexturingScheme;

/// The built-in catalog table.
const BUILTIN_BLOCKS: &str = include_str!("blocks.txt");

/// A known block and its texturing scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub block_id: String,
    pub texturing: TexturingScheme,
}

/// Ordered, duplicate-free list of catalog entries.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// The catalog shipped with the tool.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_BLOCKS)
    }

    /// Load a catalog table from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MaterialsError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read catalog: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a catalog table.
    ///
    /// Fails on unknown schemes, malformed lines and duplicate block ids.
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = Vec::new();
        let mut seen = HashSet::new();

        for (index, raw) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let (Some(block_id), Some(scheme), None) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(MaterialsError::Catalog {
                    line: line_no,
                    message: format!("expected `<block_id> <scheme>`, found `{}`", line),
                });
            };

            let texturing = scheme.parse::<TexturingScheme>().map_err(|_| MaterialsError::Catalog {
                line: line_no,
                message: format!("unknown texturing scheme `{}` for `{}`", scheme, block_id),
            })?;

            if !seen.insert(block_id.to_string()) {
                return Err(MaterialsError::Catalog {
                    line: line_no,
                    message: format!("duplicate block id `{}`", block_id),
                });
            }

            entries.push(CatalogEntry {
                block_id: block_id.to_string(),
                texturing,
            });
        }

        Ok(Self { entries })
    }

    /// Entries in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up an entry by block id.
    pub fn get(&self, block_id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.block_id == block_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
