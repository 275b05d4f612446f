//! Code tree construction: the Huffman merge loop over the min-heap
//!
//! Seeding inserts one leaf per symbol into a [`MinHeap`] keyed by frequency.
//! The merge loop then repeatedly extracts the two lightest subtrees, joins
//! them under a synthetic parent carrying their summed weight, and reinserts
//! the result until a single node — the finished tree root — remains.
//!
//! Comparison is by weight *alone*: symbols with equal frequencies compare
//! equal and their relative order falls out of heap insertion order. That
//! nondeterminism is part of the construction being modeled, not a defect —
//! every resolution yields a tree of the same (minimal) weighted path length.

use std::cmp::Ordering;
use std::fmt;

use crate::heap::MinHeap;
use crate::symbol::Symbol;
use crate::traits::Compare;

/// Failure modes of [`CodeTree::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// The input alphabet was empty.
    EmptyInput,
    /// The glyph and weight slices differ in length.
    LengthMismatch {
        /// Number of glyphs supplied.
        glyphs: usize,
        /// Number of weights supplied.
        weights: usize,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::EmptyInput => write!(f, "cannot build a code tree for an empty alphabet"),
            BuildError::LengthMismatch { glyphs, weights } => write!(
                f,
                "glyph and weight slices differ in length ({glyphs} glyphs, {weights} weights)"
            ),
        }
    }
}

impl std::error::Error for BuildError {}

/// A node of the finished code tree.
///
/// The tree is strictly binary: it is built exclusively from pairwise
/// merges, so every node has zero or two children.
#[derive(Debug, Clone)]
pub struct CodeNode {
    symbol: Symbol,
    left: Option<Box<CodeNode>>,
    right: Option<Box<CodeNode>>,
}

impl CodeNode {
    fn leaf(symbol: Symbol) -> Self {
        CodeNode {
            symbol,
            left: None,
            right: None,
        }
    }

    /// Joins two subtrees under a synthetic parent. The first node extracted
    /// from the queue becomes the left child.
    fn merge(first: CodeNode, second: CodeNode) -> Self {
        let weight = first.symbol.weight() + second.symbol.weight();
        CodeNode {
            symbol: Symbol::merged(weight),
            left: Some(Box::new(first)),
            right: Some(Box::new(second)),
        }
    }

    /// The symbol at this node.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Left child (`0` branch).
    pub fn left(&self) -> Option<&CodeNode> {
        self.left.as_deref()
    }

    /// Right child (`1` branch).
    pub fn right(&self) -> Option<&CodeNode> {
        self.right.as_deref()
    }

    /// True when both children are absent.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Orders queued subtrees by root weight alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByWeight;

impl Compare<CodeNode> for ByWeight {
    fn compare(&self, a: &CodeNode, b: &CodeNode) -> Ordering {
        a.symbol.weight().cmp(&b.symbol.weight())
    }
}

/// The finished prefix-code tree for an alphabet.
#[derive(Debug, Clone)]
pub struct CodeTree {
    root: CodeNode,
}

impl CodeTree {
    /// Builds the weight-minimal code tree for parallel slices of characters
    /// and non-negative frequencies.
    ///
    /// A single-symbol alphabet yields a tree that is one leaf, with no
    /// merge. Zero-length input fails with [`BuildError::EmptyInput`] before
    /// anything is allocated.
    ///
    /// # Panics
    ///
    /// Panics if the priority queue runs dry mid-merge. The loop guard makes
    /// that unreachable; hitting it would mean the heap engine lost a node.
    pub fn build(glyphs: &[char], weights: &[u64]) -> Result<CodeTree, BuildError> {
        if glyphs.len() != weights.len() {
            return Err(BuildError::LengthMismatch {
                glyphs: glyphs.len(),
                weights: weights.len(),
            });
        }
        if glyphs.is_empty() {
            return Err(BuildError::EmptyInput);
        }

        let mut queue: MinHeap<CodeNode, ByWeight> = MinHeap::new();
        for (&glyph, &weight) in glyphs.iter().zip(weights) {
            queue.insert(CodeNode::leaf(Symbol::leaf(glyph, weight)));
        }

        while queue.len() > 1 {
            let first = queue.extract().expect("queue holds at least two nodes");
            let second = queue.extract().expect("queue holds at least two nodes");
            queue.insert(CodeNode::merge(first, second));
        }

        let root = queue.extract().expect("queue holds the finished root");
        Ok(CodeTree { root })
    }

    /// The tree root.
    pub fn root(&self) -> &CodeNode {
        &self.root
    }

    /// Sum over all leaves of `frequency × depth` — the total bit cost of
    /// coding the alphabet, minimal by construction. Zero for a single-leaf
    /// tree.
    pub fn weighted_path_length(&self) -> u64 {
        fn walk(node: &CodeNode, depth: u64) -> u64 {
            if node.is_leaf() {
                return node.symbol().weight() * depth;
            }
            let left = node.left().expect("internal node has two children");
            let right = node.right().expect("internal node has two children");
            walk(left, depth + 1) + walk(right, depth + 1)
        }
        walk(&self.root, 0)
    }
}
