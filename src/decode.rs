//! Tree-walking decoder: packed bits back to symbols

use crate::tree::{HuffmanTree, Node};
use crate::{Error, Result};
use std::io::{Read, Write};

/// Cursor over the code tree; consumes bits, yields symbols at leaves.
///
/// The cursor starts at the root and returns there after every emission,
/// so between symbols it is always either at the root or partway down an
/// internal path.
#[derive(Debug)]
pub struct TreeWalker<'a> {
    root: &'a Node,
    cursor: &'a Node,
}

impl<'a> TreeWalker<'a> {
    /// Positions a new cursor at the root.
    pub fn new(root: &'a Node) -> Self {
        Self { root, cursor: root }
    }

    /// Consumes one bit (`false` = left, `true` = right); returns the
    /// decoded symbol when a leaf is reached.
    ///
    /// A leaf root means a single observed symbol encoded one bit per
    /// occurrence, so every consumed bit emits that symbol directly.
    pub fn step(&mut self, bit: bool) -> Option<u8> {
        if let Node::Leaf { symbol, .. } = self.root {
            return Some(*symbol);
        }

        let next = match self.cursor {
            Node::Internal { left, right, .. } => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            // The cursor resets to the root after every emission and the
            // root is internal on this path
            Node::Leaf { .. } => self.root,
        };

        if let Node::Leaf { symbol, .. } = next {
            self.cursor = self.root;
            Some(*symbol)
        } else {
            self.cursor = next;
            None
        }
    }

    /// True when no codeword is in progress.
    pub fn at_root(&self) -> bool {
        std::ptr::eq(self.cursor, self.root)
    }
}

/// Walks the packed `input` stream bit by bit and writes decoded symbols
/// to `output`, returning the number of symbols emitted.
///
/// Bytes are consumed most significant bit first, matching the encoder.
/// The final byte's trailing `pad_bits` bits are zero filler, not data;
/// a single byte of look-ahead identifies the final byte without reading
/// past end of stream, and its pad bits are excluded from the walk.
pub fn unpack<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    tree: &HuffmanTree,
    pad_bits: u8,
) -> Result<u64> {
    if pad_bits > 7 {
        return Err(Error::Corrupted(format!(
            "pad width {} out of range 0-7",
            pad_bits
        )));
    }

    // No symbols observed at encode time: nothing can decode, so any
    // payload or recorded padding is spurious
    let Some(root) = tree.root() else {
        if pad_bits != 0 {
            return Err(Error::Corrupted(
                "pad width recorded for an empty tree".into(),
            ));
        }
        let mut byte = [0u8; 1];
        if input.read(&mut byte)? != 0 {
            return Err(Error::Corrupted(
                "packed bytes present for an empty tree".into(),
            ));
        }
        return Ok(0);
    };

    let mut walker = TreeWalker::new(root);
    let mut emitted = 0u64;
    let mut pending: Option<u8> = None;
    let mut buf = [0u8; 8192];

    loop {
        let n = input.read(&mut buf)?;
        if n == 0 {
            break;
        }
        for &byte in &buf[..n] {
            if let Some(previous) = pending.replace(byte) {
                emitted += feed_byte(&mut walker, previous, 8, &mut output)?;
            }
        }
    }

    match pending {
        Some(last) => {
            emitted += feed_byte(&mut walker, last, 8 - pad_bits, &mut output)?;
        }
        None if pad_bits != 0 => {
            return Err(Error::Corrupted(
                "pad width recorded for an empty stream".into(),
            ));
        }
        None => {}
    }

    if !walker.at_root() {
        return Err(Error::Corrupted("stream ended mid-codeword".into()));
    }

    output.flush()?;
    log::debug!("unpacked {} symbols", emitted);
    Ok(emitted)
}

// Feeds the high `bit_count` bits of `byte` through the walker.
fn feed_byte<W: Write>(
    walker: &mut TreeWalker<'_>,
    byte: u8,
    bit_count: u8,
    output: &mut W,
) -> Result<u64> {
    let mut emitted = 0;
    for position in 0..bit_count {
        let bit = byte & (0x80 >> position) != 0;
        if let Some(symbol) = walker.step(bit) {
            output.write_all(&[symbol])?;
            emitted += 1;
        }
    }
    Ok(emitted)
}
