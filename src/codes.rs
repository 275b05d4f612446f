//! Code emission: root-to-leaf walks producing each symbol's bitstring
//!
//! The emitter walks the finished tree depth-first, left subtree before
//! right, appending `0` on each left branch and `1` on each right. A leaf
//! reports its accumulated path as that symbol's code. Traversal order fixes
//! only the reporting order; the codes themselves depend solely on the path
//! taken.

use std::fmt;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::tree::{BuildError, CodeNode, CodeTree};

/// Inline capacity for the walk's bit-path buffer; a code longer than this
/// needs an alphabet of 60+ symbols with near-Fibonacci weights before the
/// buffer spills to the heap.
const PATH_INLINE: usize = 64;

type BitPath = SmallVec<[u8; PATH_INLINE]>;

/// One emitted `(character, bitstring)` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeAssignment {
    /// The character this code belongs to.
    pub glyph: char,
    /// The code as a string of `0`/`1` characters, most significant first.
    pub bits: String,
}

/// Encode/decode failures over a finished code book and tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodingError {
    /// The text contains a character outside the coded alphabet.
    UnknownGlyph(char),
    /// The bit stream contains a character other than `0` or `1`.
    InvalidBit(char),
    /// The bit stream ended in the middle of a code.
    TruncatedInput,
}

impl fmt::Display for CodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodingError::UnknownGlyph(glyph) => {
                write!(f, "character {glyph:?} is not in the coded alphabet")
            }
            CodingError::InvalidBit(bit) => {
                write!(f, "bit stream contains non-bit character {bit:?}")
            }
            CodingError::TruncatedInput => write!(f, "bit stream ended in the middle of a code"),
        }
    }
}

impl std::error::Error for CodingError {}

/// The emitted code list for a finished tree, in tree-walk order (left
/// subtree fully before right).
///
/// A single-leaf tree gets the one-bit code `0`: the degenerate one-symbol
/// alphabet still needs a nonempty code for its output to be decodable.
#[derive(Debug, Clone)]
pub struct CodeBook {
    entries: Vec<CodeAssignment>,
    index: FxHashMap<char, usize>,
}

impl CodeBook {
    /// Builds the tree and emits its codes in one call.
    pub fn build(glyphs: &[char], weights: &[u64]) -> Result<(CodeTree, CodeBook), BuildError> {
        let tree = CodeTree::build(glyphs, weights)?;
        let book = CodeBook::from_tree(&tree);
        Ok((tree, book))
    }

    /// Emits one code per leaf of `tree`.
    ///
    /// # Panics
    ///
    /// Panics if the tree contains an internal node with exactly one child.
    /// Pairwise merging cannot produce that shape, so it marks a defect in
    /// tree construction rather than an input condition to recover from.
    pub fn from_tree(tree: &CodeTree) -> CodeBook {
        let mut book = CodeBook {
            entries: Vec::new(),
            index: FxHashMap::default(),
        };
        let mut path = BitPath::new();
        if tree.root().is_leaf() {
            path.push(b'0');
            book.record(tree.root(), &path);
        } else {
            book.walk(tree.root(), &mut path);
        }
        book
    }

    fn walk(&mut self, node: &CodeNode, path: &mut BitPath) {
        if node.is_leaf() {
            self.record(node, path);
            return;
        }
        match (node.left(), node.right()) {
            (Some(left), Some(right)) => {
                path.push(b'0');
                self.walk(left, path);
                path.pop();
                path.push(b'1');
                self.walk(right, path);
                path.pop();
            }
            _ => panic!("malformed code tree: internal node with a single child"),
        }
    }

    fn record(&mut self, node: &CodeNode, path: &[u8]) {
        let glyph = node
            .symbol()
            .glyph()
            .expect("leaf carries a real character, not the merged sentinel");
        let bits: String = path.iter().map(|&bit| bit as char).collect();
        self.index.insert(glyph, self.entries.len());
        self.entries.push(CodeAssignment { glyph, bits });
    }

    /// The code for `glyph`, if it is in the alphabet.
    pub fn code_for(&self, glyph: char) -> Option<&str> {
        self.index.get(&glyph).map(|&i| self.entries[i].bits.as_str())
    }

    /// Assignments in tree-walk order.
    pub fn iter(&self) -> impl Iterator<Item = &CodeAssignment> {
        self.entries.iter()
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True only for a book emitted from nothing, which cannot happen via
    /// [`CodeBook::build`].
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Substitutes each character's code, producing a `0`/`1` string.
    pub fn encode(&self, text: &str) -> Result<String, CodingError> {
        let mut out = String::new();
        for glyph in text.chars() {
            match self.code_for(glyph) {
                Some(bits) => out.push_str(bits),
                None => return Err(CodingError::UnknownGlyph(glyph)),
            }
        }
        Ok(out)
    }
}

impl fmt::Display for CodeBook {
    /// One `<character>: <bitstring>` line per symbol, in walk order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}: {}", entry.glyph, entry.bits)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CodeBook {
    type Item = &'a CodeAssignment;
    type IntoIter = std::slice::Iter<'a, CodeAssignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl CodeTree {
    /// Decodes a bitstring produced by [`CodeBook::encode`] by walking the
    /// tree, one branch per bit, emitting a character at each leaf reached.
    ///
    /// For the single-leaf degenerate tree every `0` bit decodes to one
    /// occurrence of the lone symbol, mirroring its one-bit code.
    pub fn decode(&self, bits: &str) -> Result<String, CodingError> {
        let mut out = String::new();

        if self.root().is_leaf() {
            let glyph = self
                .root()
                .symbol()
                .glyph()
                .expect("leaf carries a real character, not the merged sentinel");
            for bit in bits.chars() {
                if bit != '0' {
                    return Err(CodingError::InvalidBit(bit));
                }
                out.push(glyph);
            }
            return Ok(out);
        }

        let mut node = self.root();
        for bit in bits.chars() {
            let next = match bit {
                '0' => node.left(),
                '1' => node.right(),
                other => return Err(CodingError::InvalidBit(other)),
            };
            node = next.expect("internal node has two children");
            if node.is_leaf() {
                let glyph = node
                    .symbol()
                    .glyph()
                    .expect("leaf carries a real character, not the merged sentinel");
                out.push(glyph);
                node = self.root();
            }
        }
        if !std::ptr::eq(node, self.root()) {
            return Err(CodingError::TruncatedInput);
        }
        Ok(out)
    }
}
