//! Codegen error types
//!
//! The emitters have exactly one failure mode: the output sink refused a
//! write. Metadata irregularities are never errors — they resolve through
//! the documented precedence and fallback rules in [`crate::oneof`].

use thiserror::Error;

/// Result type for emitter operations.
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Errors surfaced by the emitters.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The underlying sink failed mid-emission. Output already written is
    /// not rolled back; callers must discard the affected file.
    #[error("write to output sink failed: {0}")]
    Write(#[from] std::io::Error),
}
