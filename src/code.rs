//! Code assignment: root-to-leaf paths become bit strings

use crate::freq::SYMBOL_COUNT;
use crate::tree::{HuffmanTree, Node};
use std::fmt;

/// A prefix-free bit string assigned to one byte value.
///
/// Bits are stored in emission order, the first bit being the one packed
/// closest to the most significant end of its output byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    /// Number of bits in the code.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when the code has no bits. Never the case for an assigned code.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bits in emission order.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Byte value to code lookup produced by one walk of the tree.
///
/// Entries stay `None` for byte values absent from the scanned input, and
/// internal nodes never receive a code. The set of assigned codes is
/// prefix-free by construction: every code is a distinct root-to-leaf path.
#[derive(Debug, Clone)]
pub struct CodeBook {
    codes: Vec<Option<Code>>,
}

impl CodeBook {
    /// Walks the tree once, recording the path to every leaf ("0" = left,
    /// "1" = right).
    ///
    /// The walk uses an explicit stack, so heavily skewed trees cannot
    /// exhaust the call stack. A root that is itself a leaf gets the
    /// one-bit code "0": the zero-length path would pack every symbol
    /// into zero bits and make the stream undecodable.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = vec![None; SYMBOL_COUNT];

        match tree.root() {
            None => {}
            Some(Node::Leaf { symbol, .. }) => {
                codes[*symbol as usize] = Some(Code { bits: vec![false] });
            }
            Some(root) => {
                let mut stack: Vec<(&Node, Vec<bool>)> = vec![(root, Vec::new())];
                while let Some((node, path)) = stack.pop() {
                    match node {
                        Node::Leaf { symbol, .. } => {
                            codes[*symbol as usize] = Some(Code { bits: path });
                        }
                        Node::Internal { left, right, .. } => {
                            let mut left_path = path.clone();
                            left_path.push(false);
                            let mut right_path = path;
                            right_path.push(true);
                            stack.push((right, right_path));
                            stack.push((left, left_path));
                        }
                    }
                }
            }
        }

        CodeBook { codes }
    }

    /// Code for `symbol`, if it was observed during the frequency scan.
    pub fn code(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }

    /// Iterates assigned codes in ascending byte order.
    pub fn assigned(&self) -> impl Iterator<Item = (u8, &Code)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(value, code)| code.as_ref().map(|c| (value as u8, c)))
    }
}
