//! Optimal prefix-code construction for Rust
//!
//! Given an alphabet of characters and their occurrence frequencies, this
//! crate builds the weight-minimal binary code tree — every leaf a symbol,
//! every internal node the frequency sum of its children — and derives each
//! symbol's binary code from its root-to-leaf path. The total coded size,
//! Σ `frequency × depth` over the leaves, is minimal by construction.
//!
//! # Components
//!
//! - **[`MinHeap`]**: a priority queue kept as a pointer-linked complete
//!   binary tree over an arena, ordered by an injected [`Compare`] strategy;
//!   O(log n) insert and extract-min
//! - **[`CodeTree`]**: the Huffman construction — seed the heap with one
//!   leaf per symbol, then repeatedly merge the two lightest subtrees until
//!   one root remains
//! - **[`CodeBook`]**: per-symbol `0`/`1` codes emitted from root-to-leaf
//!   walks, with `encode`/`decode` helpers for round-tripping text
//!
//! # Example
//!
//! ```rust
//! use huffman_codes::CodeBook;
//!
//! let glyphs = ['a', 'b', 'c', 'd', 'e', 'f'];
//! let weights = [5, 9, 12, 13, 16, 45];
//! let (tree, book) = CodeBook::build(&glyphs, &weights)?;
//!
//! assert_eq!(book.code_for('f'), Some("0"));
//! assert_eq!(tree.weighted_path_length(), 224);
//!
//! // Prints one "<character>: <bitstring>" line per symbol.
//! print!("{book}");
//! # Ok::<(), huffman_codes::BuildError>(())
//! ```

pub mod codes;
pub mod heap;
pub mod symbol;
pub mod traits;
pub mod tree;

// Re-export the main types for convenience
pub use codes::{CodeAssignment, CodeBook, CodingError};
pub use heap::MinHeap;
pub use symbol::Symbol;
pub use traits::{Compare, NaturalOrder};
pub use tree::{BuildError, CodeTree};
