//! Leaf payloads: a character paired with its occurrence frequency

use std::fmt;

/// An immutable `(character, frequency)` pair.
///
/// Leaves of the code tree carry a real character. Merged internal nodes
/// carry the sentinel form (no glyph) whose weight is the sum of the two
/// children's weights; the sentinel is never emitted as a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    glyph: Option<char>,
    weight: u64,
}

impl Symbol {
    /// A leaf symbol for `glyph` occurring `weight` times.
    pub fn leaf(glyph: char, weight: u64) -> Self {
        Symbol {
            glyph: Some(glyph),
            weight,
        }
    }

    /// The synthetic symbol carried by a merged internal node.
    pub fn merged(weight: u64) -> Self {
        Symbol {
            glyph: None,
            weight,
        }
    }

    /// The character, or `None` for a merged node's sentinel.
    pub fn glyph(&self) -> Option<char> {
        self.glyph
    }

    /// The occurrence frequency (or subtree weight sum).
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// True for a real character, false for the merged sentinel.
    pub fn is_glyph(&self) -> bool {
        self.glyph.is_some()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.glyph {
            Some(glyph) => write!(f, "'{}' ({})", glyph, self.weight),
            None => write!(f, "<merged> ({})", self.weight),
        }
    }
}
