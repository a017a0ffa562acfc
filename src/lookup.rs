//! Closest-block lookup over a colour dataset.
//!
//! Given a target colour and the direction a face points, finds the block
//! (and orientation property) whose texture on that face is nearest in RGB.

use std::fmt;
use std::str::FromStr;

use crate::error::{MaterialsError, Result};
use crate::types::{ColorRecord, Colour, TexturingScheme};

/// Outward normal of a block face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Direction {
    /// Build a direction from an axis-aligned unit-like vector.
    ///
    /// Returns `None` unless exactly one component is non-zero.
    pub fn from_unit(unit: (i32, i32, i32)) -> Option<Self> {
        match unit {
            (x, 0, 0) if x > 0 => Some(Self::PosX),
            (x, 0, 0) if x < 0 => Some(Self::NegX),
            (0, y, 0) if y > 0 => Some(Self::PosY),
            (0, y, 0) if y < 0 => Some(Self::NegY),
            (0, 0, z) if z > 0 => Some(Self::PosZ),
            (0, 0, z) if z < 0 => Some(Self::NegZ),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::PosX => Self::NegX,
            Self::NegX => Self::PosX,
            Self::PosY => Self::NegY,
            Self::NegY => Self::PosY,
            Self::PosZ => Self::NegZ,
            Self::NegZ => Self::PosZ,
        }
    }

    /// Value of the `axis` block property for this direction.
    pub fn axis(self) -> &'static str {
        match self {
            Self::PosX | Self::NegX => "x",
            Self::PosY | Self::NegY => "y",
            Self::PosZ | Self::NegZ => "z",
        }
    }

    /// Value of the `facing` block property for this direction.
    pub fn facing(self) -> &'static str {
        match self {
            Self::PosY => "up",
            Self::NegY => "down",
            Self::NegZ => "north",
            Self::PosZ => "south",
            Self::PosX => "east",
            Self::NegX => "west",
        }
    }

    pub fn is_horizontal(self) -> bool {
        !matches!(self, Self::PosY | Self::NegY)
    }
}

impl FromStr for Direction {
    type Err = MaterialsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "+x" | "x" | "east" => Ok(Self::PosX),
            "-x" | "west" => Ok(Self::NegX),
            "+y" | "y" | "up" => Ok(Self::PosY),
            "-y" | "down" => Ok(Self::NegY),
            "+z" | "z" | "south" => Ok(Self::PosZ),
            "-z" | "north" => Ok(Self::NegZ),
            _ => Err(MaterialsError::Parse {
                message: format!("Invalid direction: {}", s),
                help: Some("Use +x, -x, +y, -y, +z, -z or up, down, north, south, east, west".to_string()),
            }),
        }
    }
}

/// How a texture part must be placed to show on a given face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    /// The default block state works.
    AsIs,
    /// The block needs one state property set.
    With {
        name: &'static str,
        value: &'static str,
    },
}

impl Orient {
    fn with(name: &'static str, value: &'static str) -> Self {
        Self::With { name, value }
    }
}

/// Work out whether `part` of a block textured with `texturing` can face
/// `normal`, and with which block state property.
pub fn orient(texturing: TexturingScheme, part: Option<&str>, normal: Direction) -> Option<Orient> {
    let part = part.unwrap_or("");

    match texturing {
        TexturingScheme::Uniform => Some(Orient::AsIs),
        TexturingScheme::Axis => match part {
            "top" => Some(Orient::with("axis", normal.axis())),
            "" | "side" => match normal {
                Direction::PosX | Direction::NegX => Some(Orient::with("axis", "z")),
                _ => Some(Orient::with("axis", "x")),
            },
            _ => None,
        },
        TexturingScheme::Facing4 => match (part, normal) {
            ("top", Direction::PosY) | ("bottom", Direction::NegY) => Some(Orient::AsIs),
            ("front", n) if n.is_horizontal() => Some(Orient::with("facing", n.facing())),
            ("side", n) if n.is_horizontal() => Some(Orient::with("facing", n.opposite().facing())),
            _ => None,
        },
        TexturingScheme::Facing6 => match part {
            "front" => Some(Orient::with("facing", normal.facing())),
            "back" => Some(Orient::with("facing", normal.opposite().facing())),
            _ => None,
        },
        TexturingScheme::Upright => match (part, normal.is_horizontal()) {
            ("top", false) | ("" | "side", true) => Some(Orient::AsIs),
            _ => None,
        },
    }
}

/// A block id with at most one state property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockState {
    pub block_id: String,
    pub property: Option<(&'static str, &'static str)>,
}

impl BlockState {
    pub fn new(block_id: &str) -> Self {
        Self {
            block_id: block_id.to_string(),
            property: None,
        }
    }

    /// The state returned when nothing matches.
    pub fn air() -> Self {
        Self::new("air")
    }
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.property {
            Some((name, value)) => write!(f, "{}[{}={}]", self.block_id, name, value),
            None => f.write_str(&self.block_id),
        }
    }
}

/// A lookup result: the chosen state and the colour it was matched on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub state: BlockState,
    pub colour: Colour,
    pub distance: u32,
}

/// Find the record closest to `colour` that can be shown on a face
/// pointing along `normal`.
///
/// Ties go to the earliest record. Returns `None` when no record can be
/// oriented onto the face.
pub fn find_closest(records: &[ColorRecord], colour: Colour, normal: Direction) -> Option<Match> {
    let mut best: Option<Match> = None;

    for record in records {
        let Some(orient) = orient(record.texturing, record.part.as_deref(), normal) else {
            continue;
        };

        let distance = record.avg_color.distance_squared(colour);
        if best.as_ref().is_some_and(|b| distance >= b.distance) {
            continue;
        }

        let property = match orient {
            Orient::AsIs => None,
            Orient::With { name, value } => Some((name, value)),
        };
        best = Some(Match {
            state: BlockState {
                block_id: record.block_id.clone(),
                property,
            },
            colour: record.avg_color,
            distance,
        });
    }

    best
}

/// Like [`find_closest`], falling back to air.
pub fn closest_state(records: &[ColorRecord], colour: Colour, normal: Direction) -> BlockState {
    find_closest(records, colour, normal)
        .map(|m| m.state)
        .unwrap_or_else(BlockState::air)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(block_id: &str, texturing: TexturingScheme, part: Option<&str>, rgb: [u8; 3]) -> ColorRecord {
        ColorRecord {
            block_id: block_id.to_string(),
            texturing,
            part: part.map(str::to_string),
            avg_color: Colour::from(rgb),
        }
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("+y".parse::<Direction>().unwrap(), Direction::PosY);
        assert_eq!("North".parse::<Direction>().unwrap(), Direction::NegZ);
        assert_eq!("-x".parse::<Direction>().unwrap(), Direction::NegX);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_from_unit() {
        assert_eq!(Direction::from_unit((0, -3, 0)), Some(Direction::NegY));
        assert_eq!(Direction::from_unit((1, 0, 0)), Some(Direction::PosX));
        assert_eq!(Direction::from_unit((1, 1, 0)), None);
        assert_eq!(Direction::from_unit((0, 0, 0)), None);
    }

    #[test]
    fn test_orient_axis() {
        let top = |n| orient(TexturingScheme::Axis, Some("top"), n);
        assert_eq!(top(Direction::PosY), Some(Orient::with("axis", "y")));
        assert_eq!(top(Direction::NegZ), Some(Orient::with("axis", "z")));

        let side = |n| orient(TexturingScheme::Axis, None, n);
        assert_eq!(side(Direction::PosX), Some(Orient::with("axis", "z")));
        assert_eq!(side(Direction::PosY), Some(Orient::with("axis", "x")));
        assert_eq!(side(Direction::NegZ), Some(Orient::with("axis", "x")));

        assert_eq!(orient(TexturingScheme::Axis, Some("bottom"), Direction::PosY), None);
    }

    #[test]
    fn test_orient_facing4() {
        let f = |part, n| orient(TexturingScheme::Facing4, Some(part), n);
        assert_eq!(f("top", Direction::PosY), Some(Orient::AsIs));
        assert_eq!(f("top", Direction::NegY), None);
        assert_eq!(f("bottom", Direction::NegY), Some(Orient::AsIs));
        assert_eq!(f("front", Direction::NegZ), Some(Orient::with("facing", "north")));
        assert_eq!(f("front", Direction::PosX), Some(Orient::with("facing", "east")));
        assert_eq!(f("side", Direction::PosZ), Some(Orient::with("facing", "north")));
        assert_eq!(f("side", Direction::PosX), Some(Orient::with("facing", "west")));
        assert_eq!(f("front", Direction::PosY), None);
    }

    #[test]
    fn test_orient_facing6() {
        let f = |part, n| orient(TexturingScheme::Facing6, Some(part), n);
        assert_eq!(f("front", Direction::PosY), Some(Orient::with("facing", "up")));
        assert_eq!(f("back", Direction::PosY), Some(Orient::with("facing", "down")));
        assert_eq!(f("back", Direction::NegX), Some(Orient::with("facing", "east")));
        assert_eq!(f("side", Direction::NegX), None);
    }

    #[test]
    fn test_orient_upright_and_uniform() {
        assert_eq!(orient(TexturingScheme::Upright, Some("top"), Direction::NegY), Some(Orient::AsIs));
        assert_eq!(orient(TexturingScheme::Upright, None, Direction::PosZ), Some(Orient::AsIs));
        assert_eq!(orient(TexturingScheme::Upright, None, Direction::PosY), None);
        assert_eq!(orient(TexturingScheme::Upright, Some("bottom"), Direction::NegY), None);
        assert_eq!(orient(TexturingScheme::Uniform, Some("anything"), Direction::NegY), Some(Orient::AsIs));
    }

    #[test]
    fn test_find_closest_picks_nearest_orientable() {
        let records = vec![
            record("oak_log", TexturingScheme::Axis, None, [109, 85, 50]),
            record("oak_log", TexturingScheme::Axis, Some("top"), [151, 121, 73]),
            record("stone", TexturingScheme::Uniform, None, [125, 125, 125]),
        ];

        let m = find_closest(&records, Colour::rgb(150, 120, 70), Direction::PosY).unwrap();
        assert_eq!(m.state.to_string(), "oak_log[axis=y]");
        assert_eq!(m.colour, Colour::rgb(151, 121, 73));
        assert_eq!(m.distance, 1 + 1 + 9);

        let state = closest_state(&records, Colour::rgb(120, 120, 130), Direction::NegX);
        assert_eq!(state, BlockState::new("stone"));
    }

    #[test]
    fn test_find_closest_ties_keep_first() {
        let records = vec![
            record("white_wool", TexturingScheme::Uniform, None, [200, 200, 200]),
            record("white_concrete", TexturingScheme::Uniform, None, [200, 200, 200]),
        ];

        let state = closest_state(&records, Colour::WHITE, Direction::PosZ);
        assert_eq!(state.block_id, "white_wool");
    }

    #[test]
    fn test_find_closest_empty_is_air() {
        let records = vec![record("furnace", TexturingScheme::Facing4, Some("top"), [110, 110, 110])];

        assert_eq!(find_closest(&records, Colour::BLACK, Direction::NegY), None);
        assert_eq!(closest_state(&records, Colour::BLACK, Direction::NegY).to_string(), "air");
        assert_eq!(closest_state(&[], Colour::BLACK, Direction::PosY), BlockState::air());
    }
}
