//! Byte frequency accounting

use crate::Result;
use std::io::Read;

/// Number of distinct byte values a table tracks.
pub const SYMBOL_COUNT: usize = 256;

/// Occurrence counts for every byte value of a scanned input.
///
/// Populated by one full pass over the source; bytes that never occur
/// keep a count of zero and are excluded from tree construction.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; SYMBOL_COUNT],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    /// Creates an empty table with all counts at zero.
    pub fn new() -> Self {
        Self {
            counts: [0; SYMBOL_COUNT],
        }
    }

    /// Counts every byte of `input` until end of stream.
    ///
    /// Read failures are surfaced to the caller; there is no retry.
    pub fn scan<R: Read>(mut input: R) -> Result<Self> {
        let mut table = Self::new();
        let mut buf = [0u8; 8192];
        loop {
            let n = input.read(&mut buf)?;
            if n == 0 {
                break;
            }
            for &byte in &buf[..n] {
                table.counts[byte as usize] += 1;
            }
        }
        Ok(table)
    }

    /// Counts the bytes of an in-memory slice.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in data {
            table.counts[byte as usize] += 1;
        }
        table
    }

    /// Records one more occurrence of `symbol`.
    pub fn record(&mut self, symbol: u8) {
        self.counts[symbol as usize] += 1;
    }

    /// Occurrence count for `symbol`.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of distinct byte values observed at least once.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Iterates observed symbols in ascending byte order with their counts.
    pub fn observed(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(value, &count)| (value as u8, count))
    }
}
