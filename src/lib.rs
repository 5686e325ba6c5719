//! # huffpress
//!
//! Frequency-driven prefix-free coding for byte streams.
//!
//! A full scan of the input counts every byte value, a greedy merge over a
//! min-priority queue builds the code tree, one tree walk assigns each
//! observed byte its bit string, and a bit-packing pass turns the source
//! into byte-aligned output. Decoding walks the same tree bit by bit,
//! trimming the recorded zero padding from the final byte.
//!
//! The packed format is deliberately not self-describing: no header, length
//! field, or code table is written. Decoding a stream requires the [`Codec`]
//! value and pad count produced when it was packed, either held explicitly
//! or carried by a [`Session`] that sequences one compression and one
//! decompression over files.
//!
//! ## Example
//!
//! ```
//! use huffpress::Codec;
//!
//! # fn main() -> Result<(), huffpress::Error> {
//! let data = b"abracadabra";
//!
//! let codec = Codec::for_data(data);
//! let (packed, pad_bits) = codec.encode(data)?;
//! assert!(packed.len() < data.len());
//!
//! let restored = codec.decode(&packed, pad_bits)?;
//! assert_eq!(restored, data);
//! # Ok(())
//! # }
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod code;
pub mod decode;
pub mod encode;
pub mod error;
pub mod freq;
pub mod session;
pub mod tree;

// Re-export commonly used types
pub use code::{Code, CodeBook};
pub use error::{Error, Result};
pub use freq::FrequencyTable;
pub use session::{Codec, Session};
pub use tree::{HuffmanTree, Node};
