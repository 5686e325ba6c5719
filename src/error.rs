//! Error types for packing and unpacking operations

use std::io;
use thiserror::Error;

/// Errors surfaced by huffpress operations
#[derive(Error, Debug)]
pub enum Error {
    /// Source or sink could not be opened, read, or written
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A byte reached the packer without a code entry, meaning the
    /// frequency scan and the packing pass saw different data
    #[error("no code assigned for byte 0x{0:02X}; it was not observed during the frequency scan")]
    UnknownSymbol(u8),

    /// The packed stream is inconsistent with the codec or pad count
    #[error("corrupted packed stream: {0}")]
    Corrupted(String),

    /// Decompression was requested on a session that has not compressed
    /// anything; the packed format carries no code table of its own
    #[error("no compression has run in this session; the packed format is not self-describing")]
    MissingCodec,
}

/// Result type for huffpress operations
pub type Result<T> = std::result::Result<T, Error>;
