//! Input accumulation.
//!
//! The input stream is read to completion before any processing happens:
//! accumulation and summation are never interleaved. Reading is generic
//! over [`Read`] so tests can drive the pipeline with in-memory sources.

use crate::error::{IoError, Result};
use std::io::{self, Read};

/// Reads a source to completion and decodes it as UTF-8, lossily.
///
/// Invalid byte sequences decode to U+FFFD rather than failing the run; a
/// replacement character inside a token simply makes that token parse to
/// the sentinel.
///
/// # Arguments
///
/// * `source` - Any readable stream.
///
/// # Errors
///
/// Returns [`IoError::ReadFailed`] if the underlying read fails before
/// end-of-input.
///
/// # Examples
///
/// ```
/// use linesum_rs::io::read_to_string_lossy;
/// use std::io::Cursor;
///
/// let input = read_to_string_lossy(Cursor::new(b"1 2 3\n")).unwrap();
/// assert_eq!(input, "1 2 3\n");
/// ```
pub fn read_to_string_lossy<R: Read>(mut source: R) -> Result<String> {
    let mut bytes = Vec::new();
    source
        .read_to_end(&mut bytes)
        .map_err(|e| IoError::ReadFailed {
            reason: e.to_string(),
        })?;

    // Avoid the lossy copy when the input is already valid UTF-8.
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Reads all of standard input until end-of-input.
///
/// Blocks the caller until the stream is exhausted; the handle is locked
/// for the duration of the read.
///
/// # Errors
///
/// Returns [`IoError::ReadFailed`] if standard input fails before
/// end-of-input.
pub fn read_stdin() -> Result<String> {
    read_to_string_lossy(io::stdin().lock())
}
