//! Filename classification rules.
//!
//! A texture file belongs to a block when its name is `<block_id>.png` (the
//! base texture) or `<block_id>_<part>.png`. Texture naming across the asset
//! set is ad hoc, so after the structural check an ordered table of
//! exclusion rules rejects known collisions with unrelated blocks.

/// Rejects a cleaned part suffix for a given block id.
pub struct ExclusionRule {
    /// Short name reported when the rule fires.
    pub name: &'static str,
    /// Returns true when `(block_id, part)` must not be treated as a part.
    pub excludes: fn(block_id: &str, part: &str) -> bool,
}

/// Exclusion rules, evaluated in order after the structural check.
pub const EXCLUSION_RULES: &[ExclusionRule] = &[
    ExclusionRule {
        name: "multi-word suffix",
        excludes: |_, part| part.contains('_'),
    },
    ExclusionRule {
        name: "concrete powder",
        excludes: |block_id, part| block_id.ends_with("concrete") && part == "powder",
    },
    ExclusionRule {
        name: "stone bricks",
        excludes: |block_id, part| block_id == "stone" && part == "bricks",
    },
    ExclusionRule {
        name: "sculk vein",
        excludes: |block_id, part| block_id == "sculk" && part == "vein",
    },
    ExclusionRule {
        name: "melon stem",
        excludes: |block_id, part| block_id == "melon" && part == "stem",
    },
    ExclusionRule {
        name: "generic block suffix",
        excludes: |_, part| matches!(part, "block" | "bricks" | "tiles"),
    },
];

/// How a candidate filename relates to a block id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// `<block_id>.png`
    Base,
    /// `<block_id>_<part>.png`
    Part(String),
    /// Starts with the block id but is not one of its textures.
    Rejected(&'static str),
}

/// Classify a filename against a block id.
///
/// Returns `None` when the name is not a candidate at all: it does not start
/// with the block id followed by `.png` or `_`, or does not end in `.png`.
/// Only candidates turned away by [`EXCLUSION_RULES`] come back as
/// [`Classification::Rejected`]. Matching is case-sensitive.
pub fn classify(block_id: &str, file_name: &str) -> Option<Classification> {
    let suffix = file_name
        .strip_prefix(block_id)?
        .strip_suffix(".png")?;

    if suffix.is_empty() {
        return Some(Classification::Base);
    }

    // Another block sharing the prefix, e.g. "stone" and "stonecutter_saw.png".
    let part = suffix.strip_prefix('_')?;

    if let Some(rule) = EXCLUSION_RULES.iter().find(|r| (r.excludes)(block_id, part)) {
        return Some(Classification::Rejected(rule.name));
    }

    Some(Classification::Part(part.to_string()))
}
