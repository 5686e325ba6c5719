//! Compression sessions: the codec artifact and the file driver

use crate::code::CodeBook;
use crate::decode::unpack;
use crate::encode::pack;
use crate::freq::FrequencyTable;
use crate::tree::HuffmanTree;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// The code artifact produced by one frequency scan: tree plus code book.
///
/// The packed format is not self-describing (no header, length field, or
/// embedded table), so decoding a stream requires the same `Codec` value
/// and pad count that produced it. Holding the artifact explicitly keeps
/// that dependency visible in the interface.
#[derive(Debug, Clone)]
pub struct Codec {
    tree: HuffmanTree,
    book: CodeBook,
}

impl Codec {
    /// Derives the code set for a frequency table.
    pub fn from_frequencies(freq: &FrequencyTable) -> Self {
        let tree = HuffmanTree::from_frequencies(freq);
        let book = CodeBook::from_tree(&tree);
        Self { tree, book }
    }

    /// Scans `data` and derives the code set for it.
    pub fn for_data(data: &[u8]) -> Self {
        Self::from_frequencies(&FrequencyTable::from_bytes(data))
    }

    /// The code tree.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// The assigned codes.
    pub fn book(&self) -> &CodeBook {
        &self.book
    }

    /// Packs `input` through the code book into `output`; returns the pad
    /// width of the final byte.
    ///
    /// Every input byte must have been observed by the frequency scan this
    /// codec was built from; anything else is an internal consistency
    /// failure.
    pub fn encode_stream<R: Read, W: Write>(&self, input: R, output: W) -> Result<u8> {
        pack(input, output, &self.book)
    }

    /// Decodes a packed stream produced with this codec and pad width;
    /// returns the number of symbols emitted.
    pub fn decode_stream<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
        pad_bits: u8,
    ) -> Result<u64> {
        unpack(input, output, &self.tree, pad_bits)
    }

    /// Packs an in-memory buffer; returns the packed bytes and pad width.
    pub fn encode(&self, data: &[u8]) -> Result<(Vec<u8>, u8)> {
        let mut packed = Vec::new();
        let pad_bits = self.encode_stream(data, &mut packed)?;
        Ok((packed, pad_bits))
    }

    /// Decodes an in-memory packed buffer.
    pub fn decode(&self, packed: &[u8], pad_bits: u8) -> Result<Vec<u8>> {
        let mut restored = Vec::new();
        self.decode_stream(packed, &mut restored, pad_bits)?;
        Ok(restored)
    }
}

/// One compress/decompress sequence over files.
///
/// Holds the codec and pad count of the most recent compression. The
/// sequence is strictly sequential: a second compression replaces both, so
/// a decompression that follows always uses the newest code set, never the
/// one that packed an earlier file.
#[derive(Debug, Default)]
pub struct Session {
    state: Option<(Codec, u8)>,
}

impl Session {
    /// Creates a session with no compression on record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec of the most recent compression, if any.
    pub fn codec(&self) -> Option<&Codec> {
        self.state.as_ref().map(|(codec, _)| codec)
    }

    /// Pad width recorded by the most recent compression.
    pub fn pad_bits(&self) -> Option<u8> {
        self.state.as_ref().map(|(_, pad_bits)| *pad_bits)
    }

    /// Compresses `input` into `output`.
    ///
    /// Scans the input twice: once to count frequencies, once to pack. The
    /// output is written to a temporary file in the destination directory
    /// and persisted on success, so a failed operation commits no partial
    /// file.
    pub fn compress_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        input: P,
        output: Q,
    ) -> Result<()> {
        let input = input.as_ref();
        let output = output.as_ref();

        let freq = FrequencyTable::scan(BufReader::new(File::open(input)?))?;
        log::debug!(
            "scanned {}: {} bytes, {} distinct symbols",
            input.display(),
            freq.total(),
            freq.distinct()
        );
        let codec = Codec::from_frequencies(&freq);

        let reader = BufReader::new(File::open(input)?);
        let mut staged = NamedTempFile::new_in(output_dir(output))?;
        let pad_bits = {
            let mut writer = BufWriter::new(staged.as_file_mut());
            let pad_bits = codec.encode_stream(reader, &mut writer)?;
            writer.flush()?;
            pad_bits
        };
        staged.persist(output).map_err(|e| Error::Io(e.error))?;

        log::debug!("wrote {} ({} pad bits)", output.display(), pad_bits);
        self.state = Some((codec, pad_bits));
        Ok(())
    }

    /// Decompresses `input` into `output` using the codec and pad count of
    /// the most recent compression; returns the number of bytes restored.
    ///
    /// Fails with [`Error::MissingCodec`] when nothing has been compressed
    /// in this session.
    pub fn decompress_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<u64> {
        let input = input.as_ref();
        let output = output.as_ref();

        let (codec, pad_bits) = self.state.as_ref().ok_or(Error::MissingCodec)?;

        let reader = BufReader::new(File::open(input)?);
        let mut staged = NamedTempFile::new_in(output_dir(output))?;
        let restored = {
            let mut writer = BufWriter::new(staged.as_file_mut());
            let restored = codec.decode_stream(reader, &mut writer, *pad_bits)?;
            writer.flush()?;
            restored
        };
        staged.persist(output).map_err(|e| Error::Io(e.error))?;

        log::debug!("restored {} symbols to {}", restored, output.display());
        Ok(restored)
    }
}

fn output_dir(output: &Path) -> &Path {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
