//! The catalog → resolver → averager pipeline.
//!
//! Produces the full record list in memory. Nothing is written here; the
//! caller serializes the result once every texture has been averaged.

use crate::average::{average_colour, DEFAULT_ALPHA_THRESHOLD};
use crate::catalog::Catalog;
use crate::error::{MaterialsError, Result};
use crate::resolver::{Rejection, TextureResolver};
use crate::types::{ColorRecord, Colour, TextureMatch};

/// Resolved handling of textures with no opaque pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnEmpty {
    #[default]
    Error,
    Skip,
    Fill(Colour),
}

/// Averaging settings for a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    pub alpha_threshold: u8,
    pub on_empty: OnEmpty,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            on_empty: OnEmpty::Error,
        }
    }
}

/// Progress notifications emitted while the pipeline runs.
#[derive(Debug)]
pub enum PipelineEvent<'a> {
    /// A texture was averaged and recorded.
    Averaged {
        texture: &'a TextureMatch,
        colour: Colour,
    },
    /// A `<block_id>_<part>.png` file was turned away by an exclusion rule.
    Rejected {
        block_id: &'a str,
        rejection: &'a Rejection,
    },
    /// A texture had no opaque pixels and was skipped.
    SkippedEmpty { texture: &'a TextureMatch },
    /// A texture had no opaque pixels and was given the fill colour.
    FilledEmpty {
        texture: &'a TextureMatch,
        colour: Colour,
    },
}

/// Build one record per resolved texture, in catalog order.
///
/// Stops at the first texture that fails to decode. Blocks without
/// textures are left out silently.
pub fn build_records<F>(
    catalog: &Catalog,
    resolver: &TextureResolver,
    options: &PipelineOptions,
    mut on_event: F,
) -> Result<Vec<ColorRecord>>
where
    F: FnMut(PipelineEvent<'_>),
{
    let mut records = Vec::new();

    for entry in catalog.entries() {
        let resolution = resolver.resolve_detailed(&entry.block_id);

        for rejection in &resolution.rejected {
            on_event(PipelineEvent::Rejected {
                block_id: &entry.block_id,
                rejection,
            });
        }

        for texture in &resolution.matches {
            let colour = match average_colour(&texture.path, options.alpha_threshold) {
                Ok(colour) => {
                    on_event(PipelineEvent::Averaged { texture, colour });
                    colour
                }
                Err(MaterialsError::NoOpaquePixels { path, threshold }) => match options.on_empty {
                    OnEmpty::Error => return Err(MaterialsError::NoOpaquePixels { path, threshold }),
                    OnEmpty::Skip => {
                        on_event(PipelineEvent::SkippedEmpty { texture });
                        continue;
                    }
                    OnEmpty::Fill(colour) => {
                        on_event(PipelineEvent::FilledEmpty { texture, colour });
                        colour
                    }
                },
                Err(e) => return Err(e),
            };

            records.push(ColorRecord {
                block_id: entry.block_id.clone(),
                texturing: entry.texturing,
                part: texture.part.clone(),
                avg_color: colour,
            });
        }
    }

    Ok(records)
}
