//! Error types for huffzip.
//!
//! Every failure in the pipeline is recoverable at the call site: I/O
//! problems abort the current operation and surface here, and malformed
//! compressed data is reported rather than decoded into garbage.

use std::io;

use thiserror::Error;

/// All the ways compression or decompression can fail.
#[derive(Debug, Error)]
pub enum HuffError {
    /// A source or sink could not be opened.
    #[error("cannot open {path}: {source}")]
    StreamOpen { path: String, source: io::Error },

    /// An I/O error interrupted a read mid-stream.
    #[error("read failed mid-stream: {source}")]
    StreamRead { source: io::Error },

    /// An I/O error interrupted a write.
    #[error("write failed: {source}")]
    StreamWrite { source: io::Error },

    /// The encoder met a symbol with no entry in the code table.
    #[error("symbol {symbol:#04x} has no code in the supplied table")]
    MissingCode { symbol: u8 },

    /// The compressed bit stream ended in the middle of a code, or its
    /// header does not describe the payload that follows it.
    #[error("compressed stream is truncated or corrupt")]
    CorruptStream,

    /// No symbols were supplied, so there is nothing to build a tree from.
    #[error("input contains no symbols")]
    EmptyInput,

    /// The input does not start with the huffzip signature.
    #[error("missing huffzip signature")]
    BadMagic,

    /// Refusing to clobber an existing output file.
    #[error("{path} already exists (use --force to overwrite)")]
    WouldOverwrite { path: String },
}
