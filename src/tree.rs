//! Huffman tree construction by greedy merging

use crate::freq::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A node in the code tree.
///
/// Each internal node exclusively owns its children; no node is ever
/// shared across parents, so plain `Box` ownership suffices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node carrying exactly one observed byte value
    Leaf {
        /// The byte value this leaf encodes
        symbol: u8,
        /// Occurrence count of the symbol
        weight: u64,
    },
    /// Interior node with exactly two children and no symbol
    Internal {
        /// Combined occurrence count of the subtree
        weight: u64,
        /// Subtree reached on a `0` bit
        left: Box<Node>,
        /// Subtree reached on a `1` bit
        right: Box<Node>,
    },
}

impl Node {
    /// Combined occurrence count of the subtree rooted here.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// True when the node carries a symbol and has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// The code tree for one compression session.
///
/// The root is absent when the scanned input contained no bytes at all;
/// every downstream operation treats that state as "nothing to emit"
/// rather than dereferencing a nonexistent root.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    root: Option<Node>,
}

// Min-heap entry; `seq` preserves insertion order among equal weights so
// a given frequency table always produces the same tree.
#[derive(Debug)]
struct QueueEntry {
    weight: u64,
    seq: u32,
    node: Node,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two lightest nodes.
    ///
    /// Leaves are seeded in ascending byte order, ties are broken by
    /// insertion order, and the first node extracted in each merge becomes
    /// the left child. A single observed symbol yields a leaf root with no
    /// merge step; an empty table yields the explicit empty tree.
    pub fn from_frequencies(freq: &FrequencyTable) -> Self {
        let mut heap = BinaryHeap::new();
        let mut seq = 0u32;

        for (symbol, weight) in freq.observed() {
            heap.push(QueueEntry {
                weight,
                seq,
                node: Node::Leaf { symbol, weight },
            });
            seq += 1;
        }

        while heap.len() > 1 {
            let first = heap.pop().unwrap();
            let second = heap.pop().unwrap();
            let weight = first.weight + second.weight;

            heap.push(QueueEntry {
                weight,
                seq,
                node: Node::Internal {
                    weight,
                    left: Box::new(first.node),
                    right: Box::new(second.node),
                },
            });
            seq += 1;
        }

        HuffmanTree {
            root: heap.pop().map(|entry| entry.node),
        }
    }

    /// Root node, if any symbol was observed.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// True when no symbols were observed at build time.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_weight(node: &Node) -> u64 {
        match node {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal {
                weight,
                left,
                right,
            } => {
                let sum = checked_weight(left) + checked_weight(right);
                assert_eq!(sum, *weight, "internal weight must equal child sum");
                sum
            }
        }
    }

    #[test]
    fn test_empty_table_builds_empty_tree() {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::new());
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
    }

    #[test]
    fn test_single_symbol_root_is_a_leaf() {
        let freq = FrequencyTable::from_bytes(b"zzzz");
        let tree = HuffmanTree::from_frequencies(&freq);

        match tree.root() {
            Some(Node::Leaf { symbol, weight }) => {
                assert_eq!(*symbol, b'z');
                assert_eq!(*weight, 4);
            }
            other => panic!("expected leaf root, got {:?}", other),
        }
    }

    #[test]
    fn test_weights_sum_to_input_length() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let freq = FrequencyTable::from_bytes(data);
        let tree = HuffmanTree::from_frequencies(&freq);

        let root = tree.root().expect("tree should not be empty");
        assert_eq!(checked_weight(root), data.len() as u64);
    }

    #[test]
    fn test_equal_weights_merge_in_byte_order() {
        // All four symbols occur once; the first merge must take the two
        // lowest byte values in seeding order.
        let freq = FrequencyTable::from_bytes(b"dcba");
        let tree = HuffmanTree::from_frequencies(&freq);

        let root = tree.root().expect("tree should not be empty");
        match root {
            Node::Internal { left, .. } => match left.as_ref() {
                Node::Internal {
                    left: ll,
                    right: lr,
                    ..
                } => {
                    assert_eq!(ll.as_ref(), &Node::Leaf { symbol: b'a', weight: 1 });
                    assert_eq!(lr.as_ref(), &Node::Leaf { symbol: b'b', weight: 1 });
                }
                other => panic!("expected internal left child, got {:?}", other),
            },
            other => panic!("expected internal root, got {:?}", other),
        }
    }

    #[test]
    fn test_construction_is_deterministic() {
        let data = b"mississippi riverbed";
        let first = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(data));
        let second = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(data));
        assert_eq!(first.root(), second.root());
    }
}
