//! Project manifest (materials.yaml) parsing.
//!
//! The manifest overrides the built-in defaults for a generate run. Every
//! key is optional; command-line flags override the manifest in turn.
//! Relative paths in a manifest file are taken relative to that file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::average::DEFAULT_ALPHA_THRESHOLD;
use crate::error::{MaterialsError, Result};
use crate::types::Colour;

/// The name of the manifest file looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "materials.yaml";

/// Default texture directory, relative to the working directory.
pub const DEFAULT_TEXTURE_DIR: &str = "minecraft/1.20.1/assets/minecraft/textures/block";

/// Default output file.
pub const DEFAULT_OUTPUT: &str = "materials.json";

/// What to do with a texture that has no pixels above the alpha threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPolicy {
    /// Abort the run.
    #[default]
    Error,
    /// Leave the texture out of the dataset.
    Skip,
    /// Emit the fill colour instead.
    Fill,
}

/// Generate settings loaded from materials.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directory containing the block textures.
    #[serde(default)]
    pub textures: Option<PathBuf>,

    /// Output JSON file.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Replacement catalog table.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Minimum alpha for a pixel to count.
    #[serde(default = "default_alpha_threshold")]
    pub alpha_threshold: u8,

    /// Handling of textures with no opaque pixels.
    #[serde(default)]
    pub on_empty: EmptyPolicy,

    /// Hex colour used when `on_empty` is `fill`.
    #[serde(default)]
    pub fill_colour: Option<String>,
}

fn default_alpha_threshold() -> u8 {
    DEFAULT_ALPHA_THRESHOLD
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            textures: None,
            output: None,
            catalog: None,
            alpha_threshold: default_alpha_threshold(),
            on_empty: EmptyPolicy::default(),
            fill_colour: None,
        }
    }
}

impl Manifest {
    /// Load manifest from a materials.yaml file.
    ///
    /// Relative `textures`, `output` and `catalog` paths are rebased onto
    /// the directory holding the file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MaterialsError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        let mut manifest = Self::parse(&content)?;
        if let Some(base) = path.parent() {
            manifest.rebase(base);
        }
        Ok(manifest)
    }

    fn rebase(&mut self, base: &Path) {
        if base.as_os_str().is_empty() || base == Path::new(".") {
            return;
        }
        for slot in [&mut self.textures, &mut self.output, &mut self.catalog] {
            if let Some(p) = slot.take() {
                *slot = Some(if p.is_relative() { base.join(p) } else { p });
            }
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| MaterialsError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Load `materials.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// The fill colour, defaulting to magenta.
    pub fn effective_fill_colour(&self) -> Result<Colour> {
        match &self.fill_colour {
            Some(hex) => Colour::from_hex(hex),
            None => Ok(Colour::MAGENTA),
        }
    }
}
