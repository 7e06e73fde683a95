//! Comparator-Driven Binary Heap for Rust
//!
//! This crate provides a binary heap whose ordering is decided by a
//! caller-supplied comparator rather than fixed to the `Ord` trait, so the
//! same container serves as a min-heap, a max-heap, or a heap over any custom
//! ranking.
//!
//! # Features
//!
//! - **Priority-queue core**: O(log n) `push` and `pop`, O(1) `top`/`peek`
//! - **Pluggable ordering**: any [`Compare`] implementation, including plain
//!   closures; [`MinComparator`] (default), [`MaxComparator`], [`FnComparator`]
//!   and [`KeyComparator`] are provided
//! - **Bulk loading**: [`BinaryHeap::append_unordered`] followed by
//!   [`BinaryHeap::adjust`], which sorts the backing storage
//! - **Path search**: [`BinaryHeap::find`] follows a single comparator-guided
//!   path from the root; a hit is reliable, a miss is not
//! - **Checked or asserting access**: `top`/`pop` panic on an empty heap,
//!   `try_top`/`try_pop` return [`HeapError::Empty`] instead
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heap::{BinaryHeap, MaxComparator};
//!
//! let mut min_heap = BinaryHeap::new();
//! let mut max_heap = BinaryHeap::with_comparator(MaxComparator);
//! for v in [5, 3, 8, 1] {
//!     min_heap.push(v);
//!     max_heap.push(v);
//! }
//!
//! assert_eq!(min_heap.top(), 1);
//! assert_eq!(max_heap.top(), 8);
//! assert_eq!(max_heap.pop(), 8);
//! assert_eq!(max_heap.pop(), 5);
//! ```

pub mod binary_heap;
pub mod comparators;
pub mod traits;

pub use binary_heap::BinaryHeap;
pub use comparators::{FnComparator, KeyComparator, MaxComparator, MinComparator};
pub use traits::{Heap, HeapError};

// Re-export the comparator trait so callers can implement their own orderings
pub use compare::Compare;
