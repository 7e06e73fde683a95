//! Common traits for heap data structures
//!
//! This module provides the priority-queue surface shared by the heaps in this
//! crate:
//!
//! - [`Heap`]: push, peek and pop over a single element type, where the
//!   element's position is decided by the heap's comparator
//! - [`HeapError`]: the error returned by checked accessors
//!
//! The [`Heap`] trait mirrors Rust's standard heap API patterns: `pop` and
//! `peek` return `Option` and never panic. The concrete
//! [`BinaryHeap`](crate::BinaryHeap) additionally offers panicking accessors
//! (`top`, `pop`) for callers that treat an empty heap as a contract breach.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The operation needs at least one element but the heap is empty
    #[error("empty heap")]
    Empty,
}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the element ranked highest by the comparator
/// - `peek` returns that element without removing it
///
/// Unlike the standard `BinaryHeap`, which is always a max-heap over `Ord`,
/// the ranking is decided by the implementation's comparator. With the
/// default comparator this is a min-heap.
///
/// # Example
///
/// ```rust
/// use rust_binary_heap::{BinaryHeap, Heap};
///
/// fn drain<H: Heap<u32>>(mut heap: H) -> Vec<u32> {
///     let mut out = Vec::with_capacity(heap.len());
///     while let Some(item) = Heap::pop(&mut heap) {
///         out.push(item);
///     }
///     out
/// }
///
/// let mut heap: BinaryHeap<u32> = Heap::new();
/// Heap::push(&mut heap, 3);
/// Heap::push(&mut heap, 1);
/// Heap::push(&mut heap, 2);
///
/// assert_eq!(drain(heap), vec![1, 2, 3]);
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the top element without removing it, or `None` if empty
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the top element, or `None` if empty
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}
