//! Linked complete-binary-tree min-heap
//!
//! Unlike the usual `Vec`-backed binary heap, this one keeps its elements in
//! an explicit node structure: every node holds a payload plus parent/left/
//! right links into an arena. The tree is *complete* at all times outside an
//! in-progress operation — level-order positions `1..=len` are filled row by
//! row, left to right, with no gaps — and satisfies min-heap order under the
//! injected [`Compare`] strategy.
//!
//! Nodes live in a [`slotmap`] arena, so parent links are plain generational
//! keys rather than owning references; there are no `Rc` cycles to break and
//! no recursive drop on teardown.
//!
//! Sifting swaps *payloads* between nodes and leaves the link structure
//! untouched. Navigation to a level-order position uses the bit-path
//! technique: the binary digits of the position below its leading bit spell
//! the root-to-node turns, `0` for left and `1` for right.
//!
//! # Example
//!
//! ```rust
//! use huffman_codes::{MinHeap, NaturalOrder};
//!
//! let mut heap: MinHeap<i32, NaturalOrder> = MinHeap::new();
//! heap.insert(3);
//! heap.insert(1);
//! heap.insert(2);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.extract(), Some(1));
//! assert_eq!(heap.extract(), Some(2));
//! assert_eq!(heap.extract(), Some(3));
//! assert_eq!(heap.extract(), None);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::mem;

use slotmap::{new_key_type, SlotMap};

use crate::traits::Compare;

new_key_type! {
    /// Generational key identifying a node in the heap arena.
    struct HeapKey;
}

#[derive(Debug)]
struct HeapNode<T> {
    payload: T,
    parent: Option<HeapKey>,
    left: Option<HeapKey>,
    right: Option<HeapKey>,
}

/// A min-heap kept as a pointer-linked complete binary tree.
///
/// The comparator `C` is supplied once at construction and fixed for the
/// heap's lifetime. Heap order means `compare(parent, child) <= Equal` for
/// every edge; equal keys are legal and their relative extraction order is
/// insertion-order dependent (sift-up only swaps on strictly-less).
#[derive(Debug)]
pub struct MinHeap<T, C: Compare<T>> {
    nodes: SlotMap<HeapKey, HeapNode<T>>,
    root: Option<HeapKey>,
    size: usize,
    cmp: C,
}

impl<T, C: Compare<T> + Default> MinHeap<T, C> {
    /// Creates an empty heap with the default-constructed comparator.
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Compare<T> + Default> Default for MinHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        MinHeap {
            nodes: SlotMap::with_key(),
            root: None,
            size: 0,
            cmp,
        }
    }

    /// Number of queued payloads.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The minimum payload, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.root.map(|key| &self.nodes[key].payload)
    }

    /// Inserts `payload` as the next leaf in level order, then sifts it
    /// upward by payload swaps while it compares strictly less than its
    /// parent. O(log n).
    pub fn insert(&mut self, payload: T) {
        let position = self.size + 1;
        if position == 1 {
            let key = self.nodes.insert(HeapNode {
                payload,
                parent: None,
                left: None,
                right: None,
            });
            self.root = Some(key);
            self.size = 1;
            return;
        }

        // The parent of level-order position n sits at position n / 2; an
        // even position is its parent's left child.
        let parent = self.node_at(position / 2);
        let key = self.nodes.insert(HeapNode {
            payload,
            parent: Some(parent),
            left: None,
            right: None,
        });
        let slot = if position % 2 == 0 {
            &mut self.nodes[parent].left
        } else {
            &mut self.nodes[parent].right
        };
        debug_assert!(slot.is_none(), "level-order slot already occupied");
        *slot = Some(key);
        self.size = position;
        self.sift_up(key);
    }

    /// Removes and returns the minimum payload, or `None` on an empty heap
    /// (which is left unmodified).
    ///
    /// The last level-order node's payload is swapped into the root, the
    /// last node is detached to keep the tree complete, and heap order is
    /// restored top-down from the root. O(log n).
    pub fn extract(&mut self) -> Option<T> {
        let root = self.root?;
        let last = self.node_at(self.size);

        if last == root {
            let node = self.nodes.remove(root).expect("root key is live");
            self.root = None;
            self.size = 0;
            return Some(node.payload);
        }

        let mut detached = self.nodes.remove(last).expect("last key is live");
        let parent = detached.parent.expect("non-root node has a parent");
        let parent_node = &mut self.nodes[parent];
        if parent_node.left == Some(last) {
            parent_node.left = None;
        } else {
            parent_node.right = None;
        }

        mem::swap(&mut detached.payload, &mut self.nodes[root].payload);
        self.size -= 1;
        self.sift_down(root);
        Some(detached.payload)
    }

    /// Checks the heap-order invariant: no parent compares greater than a
    /// child. Intended for tests and debugging.
    pub fn is_heap_ordered(&self) -> bool {
        self.nodes.iter().all(|(key, node)| match node.parent {
            Some(parent) => self.compare(parent, key) != Ordering::Greater,
            None => true,
        })
    }

    /// Checks the complete-tree shape invariant: a breadth-first walk visits
    /// exactly `len` nodes and no node follows a missing child slot.
    /// Intended for tests and debugging.
    pub fn is_complete(&self) -> bool {
        if self.nodes.len() != self.size {
            return false;
        }
        let Some(root) = self.root else {
            return self.size == 0;
        };
        let mut queue = VecDeque::from([root]);
        let mut visited = 0;
        let mut gap_seen = false;
        while let Some(key) = queue.pop_front() {
            visited += 1;
            let node = &self.nodes[key];
            for child in [node.left, node.right] {
                match child {
                    Some(child) => {
                        if gap_seen || self.nodes[child].parent != Some(key) {
                            return false;
                        }
                        queue.push_back(child);
                    }
                    None => gap_seen = true,
                }
            }
        }
        visited == self.size
    }

    /// Walks to the node at level-order `position` (1-indexed). The binary
    /// digits of `position` below the leading bit give the root-to-node
    /// turns, `0` = left, `1` = right.
    fn node_at(&self, position: usize) -> HeapKey {
        debug_assert!(position >= 1, "level-order positions are 1-indexed");
        let mut key = self.root.expect("heap is non-empty");
        let mut bit = usize::BITS - position.leading_zeros();
        while bit > 1 {
            bit -= 1;
            let node = &self.nodes[key];
            let next = if position & (1 << (bit - 1)) != 0 {
                node.right
            } else {
                node.left
            };
            key = next.expect("complete tree has a node at every path prefix");
        }
        key
    }

    fn sift_up(&mut self, mut key: HeapKey) {
        while let Some(parent) = self.nodes[key].parent {
            if self.compare(key, parent) != Ordering::Less {
                break;
            }
            self.swap_payloads(key, parent);
            key = parent;
        }
    }

    /// Restores heap order downward from `key`. When both children violate
    /// order equally the left child is the swap target; the right child wins
    /// only when strictly smaller than the left.
    fn sift_down(&mut self, mut key: HeapKey) {
        loop {
            let (left, right) = {
                let node = &self.nodes[key];
                (node.left, node.right)
            };
            let mut target = None;
            if let Some(left) = left {
                if self.compare(key, left) != Ordering::Less {
                    target = Some(left);
                }
            }
            if let Some(right) = right {
                if self.compare(key, right) != Ordering::Less
                    && target.map_or(true, |t| self.compare(t, right) == Ordering::Greater)
                {
                    target = Some(right);
                }
            }
            match target {
                Some(child) => {
                    self.swap_payloads(key, child);
                    key = child;
                }
                None => break,
            }
        }
    }

    fn compare(&self, a: HeapKey, b: HeapKey) -> Ordering {
        self.cmp
            .compare(&self.nodes[a].payload, &self.nodes[b].payload)
    }

    fn swap_payloads(&mut self, a: HeapKey, b: HeapKey) {
        let [a, b] = self
            .nodes
            .get_disjoint_mut([a, b])
            .expect("swap requires two live, distinct keys");
        mem::swap(&mut a.payload, &mut b.payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::NaturalOrder;

    fn assert_invariants<T, C: Compare<T>>(heap: &MinHeap<T, C>) {
        assert!(heap.is_heap_ordered(), "heap order violated");
        assert!(heap.is_complete(), "completeness violated");
    }

    #[test]
    fn basic_operations() {
        let mut heap: MinHeap<i32, NaturalOrder> = MinHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.extract(), None);

        heap.insert(5);
        heap.insert(1);
        heap.insert(10);
        heap.insert(3);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.peek(), Some(&1));

        assert_eq!(heap.extract(), Some(1));
        assert_eq!(heap.extract(), Some(3));
        assert_eq!(heap.extract(), Some(5));
        assert_eq!(heap.extract(), Some(10));
        assert_eq!(heap.extract(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn extract_on_empty_does_not_mutate() {
        let mut heap: MinHeap<i32, NaturalOrder> = MinHeap::new();
        assert_eq!(heap.extract(), None);
        assert_eq!(heap.len(), 0);
        heap.insert(7);
        assert_eq!(heap.extract(), Some(7));
        assert_eq!(heap.extract(), None);
        assert_eq!(heap.len(), 0);
        assert_invariants(&heap);
    }

    #[test]
    fn duplicate_keys() {
        let mut heap: MinHeap<i32, NaturalOrder> = MinHeap::new();
        heap.insert(1);
        heap.insert(1);
        heap.insert(1);

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.extract(), Some(1));
        assert_eq!(heap.extract(), Some(1));
        assert_eq!(heap.extract(), Some(1));
        assert_eq!(heap.extract(), None);
    }

    #[test]
    fn ascending_insertion() {
        let mut heap: MinHeap<i32, NaturalOrder> = MinHeap::new();
        for i in 0..100 {
            heap.insert(i);
        }
        for i in 0..100 {
            assert_eq!(heap.extract(), Some(i));
        }
    }

    #[test]
    fn descending_insertion() {
        let mut heap: MinHeap<i32, NaturalOrder> = MinHeap::new();
        for i in (0..100).rev() {
            heap.insert(i);
        }
        for i in 0..100 {
            assert_eq!(heap.extract(), Some(i));
        }
    }

    #[test]
    fn invariants_hold_after_every_operation() {
        let mut heap: MinHeap<i32, NaturalOrder> = MinHeap::new();
        let values = [42, 7, 7, 99, -3, 0, 18, -3, 56, 1];
        for &v in &values {
            heap.insert(v);
            assert_invariants(&heap);
        }
        while !heap.is_empty() {
            heap.extract();
            assert_invariants(&heap);
        }
    }

    #[test]
    fn closure_comparator_reverses_order() {
        let mut heap = MinHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        heap.insert(1);
        heap.insert(3);
        heap.insert(2);

        // Reversed comparator turns the engine into a max-heap.
        assert_eq!(heap.extract(), Some(3));
        assert_eq!(heap.extract(), Some(2));
        assert_eq!(heap.extract(), Some(1));
        assert_invariants(&heap);
    }

    #[test]
    fn interleaved_insert_extract() {
        let mut heap: MinHeap<i32, NaturalOrder> = MinHeap::new();
        heap.insert(5);
        heap.insert(2);
        assert_eq!(heap.extract(), Some(2));
        heap.insert(8);
        heap.insert(1);
        assert_eq!(heap.extract(), Some(1));
        assert_eq!(heap.extract(), Some(5));
        heap.insert(3);
        assert_eq!(heap.extract(), Some(3));
        assert_eq!(heap.extract(), Some(8));
        assert_eq!(heap.extract(), None);
    }
}
