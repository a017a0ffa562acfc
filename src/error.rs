use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for block-colours operations
#[derive(Error, Diagnostic, Debug)]
pub enum MaterialsError {
    #[error("IO error: {0}")]
    #[diagnostic(code(block_colours::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(block_colours::io))]
    Io { path: PathBuf, message: String },

    #[error("Failed to decode image {path}: {message}")]
    #[diagnostic(
        code(block_colours::image_decode),
        help("Check that the file is a valid PNG; no output was written")
    )]
    ImageDecode { path: PathBuf, message: String },

    #[error("No pixels with alpha >= {threshold} in {path}")]
    #[diagnostic(
        code(block_colours::no_opaque_pixels),
        help("Use `--on-empty skip` or `--on-empty fill` to continue past fully transparent textures")
    )]
    NoOpaquePixels { path: PathBuf, threshold: u8 },

    #[error("Catalog error on line {line}: {message}")]
    #[diagnostic(code(block_colours::catalog))]
    Catalog { line: usize, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(block_colours::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Serialization error with {path}: {message}")]
    #[diagnostic(code(block_colours::serialize))]
    Serialize { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, MaterialsError>;
