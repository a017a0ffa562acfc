//! Core data types.

mod colour;
mod record;
mod texturing;

pub use colour::Colour;
pub use record::{ColorRecord, TextureMatch};
pub use texturing::TexturingScheme;
