//! Resolver matches and output records.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{Colour, TexturingScheme};

/// A texture file associated with a block and an optional part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureMatch {
    pub block_id: String,
    /// `None` for the base texture, otherwise a descriptor like `top`.
    pub part: Option<String>,
    pub path: PathBuf,
}

impl TextureMatch {
    /// Label used in status output, e.g. `oak_log:top`.
    pub fn label(&self) -> String {
        match &self.part {
            Some(part) => format!("{}:{}", self.block_id, part),
            None => self.block_id.clone(),
        }
    }
}

/// One entry of the output dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub block_id: String,
    pub texturing: TexturingScheme,
    pub part: Option<String>,
    pub avg_color: Colour,
}
