//! Error types for the tagger.
//!
//! None of these escape [`crate::Tagger::transform`]; the host-facing entry
//! point degrades every failure to "leave the file untouched".

/// Failure while tagging a single source file.
#[derive(Debug, thiserror::Error)]
pub enum TaggerError {
    /// The parser reported syntax errors (or gave up) for the file.
    #[error("failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    /// Building or serializing the source map failed.
    #[error("source map error: {0}")]
    SourceMap(#[from] sourcemap::Error),

    /// Reading a file from disk failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Host supplied options that are not valid JSON for [`crate::TaggerOptions`].
    #[error("invalid tagger options: {0}")]
    Options(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaggerError>;
