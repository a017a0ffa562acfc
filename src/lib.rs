//! block-colours - Per-block average colours from Minecraft textures
//!
//! Matches texture files in a block texture directory against a catalog of
//! known blocks, averages each texture's opaque pixels, and writes the
//! result as a flat JSON dataset usable as a colour → block lookup table.

pub mod average;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod lookup;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod resolver;
pub mod serialize;
pub mod types;

pub use average::{average_colour, average_pixels, DEFAULT_ALPHA_THRESHOLD};
pub use catalog::{Catalog, CatalogEntry};
pub use error::{MaterialsError, Result};
pub use lookup::{closest_state, find_closest, BlockState, Direction};
pub use manifest::{EmptyPolicy, Manifest};
pub use pipeline::{build_records, OnEmpty, PipelineEvent, PipelineOptions};
pub use resolver::{Classification, TextureResolver};
pub use serialize::{read_materials, to_json_string, write_materials};
pub use types::{ColorRecord, Colour, TextureMatch, TexturingScheme};
