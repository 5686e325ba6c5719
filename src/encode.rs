//! Bit-packing encoder: symbol codes to byte-aligned output

use crate::code::CodeBook;
use crate::{Error, Result};
use std::io::{Read, Write};

/// Accumulates bits and emits full bytes, most significant bit first.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    inner: W,
    current: u8,
    used: u8,
    bytes_out: u64,
}

impl<W: Write> BitWriter<W> {
    /// Wraps a byte sink.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            current: 0,
            used: 0,
            bytes_out: 0,
        }
    }

    /// Appends one bit, flushing a byte to the sink whenever eight have
    /// accumulated.
    pub fn push_bit(&mut self, bit: bool) -> Result<()> {
        self.current = (self.current << 1) | u8::from(bit);
        self.used += 1;
        if self.used == 8 {
            self.inner.write_all(&[self.current])?;
            self.bytes_out += 1;
            self.current = 0;
            self.used = 0;
        }
        Ok(())
    }

    /// Zero-fills the final partial byte, flushes, and returns the sink
    /// together with the pad width (0-7).
    ///
    /// The pad width is 0 exactly when the pushed bit count was already a
    /// multiple of eight.
    pub fn finish(mut self) -> Result<(W, u8)> {
        let mut pad_bits = 0u8;
        if self.used > 0 {
            pad_bits = 8 - self.used;
            self.current <<= pad_bits;
            self.inner.write_all(&[self.current])?;
            self.bytes_out += 1;
        }
        self.inner.flush()?;
        Ok((self.inner, pad_bits))
    }

    /// Whole bytes emitted so far, excluding any pending partial byte.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_out
    }
}

/// Replaces every byte of `input` with its code and packs the bits into
/// `output`, returning the number of zero pad bits in the final byte.
///
/// A byte with no code entry is an internal consistency failure (the
/// frequency scan and the packing pass saw different data) and aborts the
/// operation rather than silently emitting an empty code.
pub fn pack<R: Read, W: Write>(mut input: R, output: W, book: &CodeBook) -> Result<u8> {
    let mut writer = BitWriter::new(output);
    let mut buf = [0u8; 8192];

    loop {
        let n = input.read(&mut buf)?;
        if n == 0 {
            break;
        }
        for &symbol in &buf[..n] {
            let code = book.code(symbol).ok_or(Error::UnknownSymbol(symbol))?;
            for &bit in code.bits() {
                writer.push_bit(bit)?;
            }
        }
    }

    let bytes_out = writer.bytes_written();
    let (_, pad_bits) = writer.finish()?;
    log::debug!(
        "packed stream complete: {} full bytes, {} pad bits",
        bytes_out,
        pad_bits
    );
    Ok(pad_bits)
}
