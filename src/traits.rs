//! Comparison strategy for the heap engine
//!
//! The heap does not require `Ord` on its payloads. Ordering is injected once
//! at construction as a [`Compare`] value and stays fixed for the heap's
//! lifetime, so the same total order drives both insertion and extraction.
//!
//! Two ready-made strategies are provided:
//!
//! - [`NaturalOrder`]: defers to the payload's `Ord` implementation
//! - any closure `Fn(&T, &T) -> Ordering`, via a blanket impl

use std::cmp::Ordering;

/// A total order over heap payloads.
///
/// `compare(a, b)` returns `Less`/`Equal`/`Greater` exactly as `Ord::cmp`
/// would. The heap relies on this being a consistent total order; an
/// inconsistent comparator cannot cause memory unsafety but will produce
/// arbitrary extraction order.
///
/// This is a strategy object rather than a trait bound on the payload so a
/// heap can order payloads by a projection of their data (the Huffman
/// construction orders whole subtrees by root weight alone) without wrapper
/// types or dynamic dispatch.
pub trait Compare<T> {
    /// Compares two payloads.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders payloads by their own `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Compare<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
