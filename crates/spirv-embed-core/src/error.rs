//! Unified error types for spirv-embed.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while generating embedding sources.
#[derive(Error, Debug)]
pub enum SpirvEmbedError {
    // --- Inputs ---

    /// The word list could not be read (missing, unreadable, or not UTF-8).
    #[error("failed to read input {path}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input path has no final component to derive a symbol name from.
    #[error("input path has no file name: {0}")]
    NoFileName(PathBuf),

    /// `header` was asked to declare an empty set of arrays.
    #[error("no input files given for header generation")]
    NoHeaderInputs,

    // --- Outputs ---

    /// The generated file could not be written.
    #[error("failed to write {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),
}

/// Alias for `Result<T, SpirvEmbedError>`.
pub type Result<T> = std::result::Result<T, SpirvEmbedError>;
