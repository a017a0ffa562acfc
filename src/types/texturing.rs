//! Texturing schemes describing how a block's faces vary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MaterialsError, Result};

/// How the faces of a block are textured.
///
/// Descriptive metadata only: the averager ignores it, the serializer passes
/// it through, and the closest-block lookup uses it to orient parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TexturingScheme {
    /// Every face uses the same texture.
    #[serde(rename = "uniform")]
    Uniform,
    /// Log-like blocks with distinct end and side textures along an axis.
    #[serde(rename = "axis")]
    Axis,
    /// Horizontally facing blocks (furnaces, pumpkins).
    #[serde(rename = "facing4")]
    Facing4,
    /// Blocks that can face any of the six directions (observers, pistons).
    #[serde(rename = "facing6")]
    Facing6,
    /// Blocks with a fixed top and sides.
    #[serde(rename = "upright")]
    Upright,
}

impl TexturingScheme {
    /// All schemes, in declaration order.
    pub const ALL: [TexturingScheme; 5] = [
        TexturingScheme::Uniform,
        TexturingScheme::Axis,
        TexturingScheme::Facing4,
        TexturingScheme::Facing6,
        TexturingScheme::Upright,
    ];

    /// The tag used in catalogs and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            TexturingScheme::Uniform => "uniform",
            TexturingScheme::Axis => "axis",
            TexturingScheme::Facing4 => "facing4",
            TexturingScheme::Facing6 => "facing6",
            TexturingScheme::Upright => "upright",
        }
    }
}

impl FromStr for TexturingScheme {
    type Err = MaterialsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| MaterialsError::Parse {
                message: format!("Unknown texturing scheme: {}", s),
                help: Some("Expected one of: uniform, axis, facing4, facing6, upright".to_string()),
            })
    }
}

impl fmt::Display for TexturingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
