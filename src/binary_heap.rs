//! Binary Heap implementation
//!
//! A binary heap stored densely in a `Vec` in level order, ordered by a
//! caller-supplied comparator. With the default
//! [`MinComparator`](crate::MinComparator) it is a min-heap; with
//! [`MaxComparator`](crate::MaxComparator) it is a max-heap.
//!
//! Element `i` has its parent at `(i - 1) / 2` and its children at `2i + 1`
//! and `2i + 2`. After every public operation returns, no element compares
//! as [`Less`](std::cmp::Ordering::Less) than its parent under the
//! comparator.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `top`     | O(1)       |
//! | `find`    | O(log n)   |
//! | `adjust`  | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//!
//! assert_eq!(heap.top(), 3);
//! assert_eq!(heap.pop(), 3);
//! assert_eq!(heap.pop(), 5);
//! assert_eq!(heap.pop(), 8);
//! assert!(heap.is_empty());
//! ```

use std::fmt;
use std::io::{self, Write};
use std::slice;

use compare::Compare;

use crate::comparators::MinComparator;
use crate::traits::{Heap, HeapError};

/// Number of elements per line written by [`BinaryHeap::dump_to`].
const DUMP_ROW_WIDTH: usize = 16;

#[inline]
fn parent(index: usize) -> usize {
    debug_assert!(index > 0, "the root has no parent");
    (index - 1) / 2
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// A binary heap ordered by a comparator
///
/// The comparator `C` decides which element sits at the top: `a` ranks above
/// `b` when `cmp.compare(a, b)` is `Less`. Cloning a heap deep-copies its
/// storage.
///
/// It is a logic error to change an element's ordering relative to the others
/// while it is in the heap (through interior mutability, for instance). The
/// heap will not cause undefined behavior, but results of later operations
/// are unspecified until [`adjust`](Self::adjust) is called.
#[derive(Clone)]
pub struct BinaryHeap<T, C = MinComparator> {
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty min-heap using natural ordering
    pub fn new() -> Self {
        Self::with_comparator(MinComparator)
    }

    /// Creates an empty min-heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, MinComparator)
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    ///
    /// ```rust
    /// use rust_binary_heap::{BinaryHeap, MaxComparator};
    ///
    /// let mut heap = BinaryHeap::with_comparator(MaxComparator);
    /// heap.push(1);
    /// heap.push(9);
    /// assert_eq!(heap.top(), 9);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Returns the comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts an element, moving it up until its parent no longer ranks below it
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.swim(self.data.len() - 1);
    }

    /// Removes and returns the top element
    ///
    /// The last element takes the root's place and is sunk back into position.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty. Use [`try_pop`](Self::try_pop) when that
    /// is an expected condition.
    pub fn pop(&mut self) -> T {
        assert!(!self.data.is_empty(), "empty heap");
        let item = self.data.swap_remove(0);
        self.sink(0);
        item
    }

    /// Removes and returns the top element, or [`HeapError::Empty`]
    pub fn try_pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        Ok(self.pop())
    }

    /// Returns a copy of the top element
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty. Use [`try_top`](Self::try_top) or
    /// [`peek`](Self::peek) when that is an expected condition.
    pub fn top(&self) -> T
    where
        T: Clone,
    {
        match self.data.first() {
            Some(item) => item.clone(),
            None => panic!("empty heap"),
        }
    }

    /// Returns a copy of the top element, or [`HeapError::Empty`]
    pub fn try_top(&self) -> Result<T, HeapError>
    where
        T: Clone,
    {
        self.data.first().cloned().ok_or(HeapError::Empty)
    }

    /// Returns a reference to the top element, or `None` if empty
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Sorts the backing storage into ascending order under the comparator
    ///
    /// This is a full O(n log n) sort, not a linear-time heapify. A sorted
    /// sequence satisfies the heap order, so this also repairs a heap filled
    /// through [`append_unordered`](Self::append_unordered).
    ///
    /// ```rust
    /// use rust_binary_heap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::new();
    /// heap.append_unordered([4, 1, 3, 2]);
    /// heap.adjust();
    /// assert_eq!(heap.as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn adjust(&mut self) {
        let cmp = &self.cmp;
        self.data.sort_by(|a, b| cmp.compare(a, b));
    }

    /// Appends elements without restoring the heap order
    ///
    /// Until [`adjust`](Self::adjust) is called the heap order may not hold,
    /// and `top`, `pop` and `find` give unspecified (but memory-safe) results.
    pub fn append_unordered<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.data.extend(items);
    }

    /// Searches for `item` starting at the root; see [`find_from`](Self::find_from)
    pub fn find(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_from(0, item)
    }

    /// Searches for `item` along a single path starting at `index`
    ///
    /// At each visited position, an equal element ends the search. Otherwise
    /// the search descends to the left child when `item` ranks above the
    /// current element, and to the right child when it does not. Returns the
    /// index of the match, or `None` once the path runs off the end.
    ///
    /// Heap order says nothing about how siblings compare, so only one path is
    /// examined and elements that are present can be missed. A hit is reliable
    /// and a miss is not.
    ///
    /// ```rust
    /// use rust_binary_heap::BinaryHeap;
    ///
    /// let heap: BinaryHeap<i32> = [10, 20, 30].into_iter().collect();
    /// assert_eq!(heap.find(&10), Some(0));
    /// assert_eq!(heap.find(&30), Some(2));
    /// assert_eq!(heap.find(&99), None);
    /// // 20 is at index 1, but the search walks right from the root.
    /// assert_eq!(heap.find(&20), None);
    /// ```
    pub fn find_from(&self, mut index: usize, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        while let Some(current) = self.data.get(index) {
            if current == item {
                return Some(index);
            }
            index = if self.cmp.compares_lt(item, current) {
                left_child(index)
            } else {
                right_child(index)
            };
        }
        None
    }

    /// Returns true if no element ranks above its parent
    pub fn is_heap(&self) -> bool {
        (1..self.data.len())
            .all(|i| !self.cmp.compares_lt(&self.data[i], &self.data[parent(i)]))
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the backing storage in level order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in level order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning the backing storage in level order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in ascending comparator order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.adjust();
        self.data
    }

    /// Writes the backing storage to stdout, sixteen elements per line
    pub fn dump(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        self.dump_to(io::stdout().lock())
    }

    /// Writes the backing storage in level order, sixteen elements per line
    ///
    /// Each element is followed by a space, every sixteenth by a line break,
    /// and the output ends with a line break.
    pub fn dump_to<W: Write>(&self, mut out: W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        for (n, item) in self.data.iter().enumerate() {
            write!(out, "{item} ")?;
            if (n + 1) % DUMP_ROW_WIDTH == 0 {
                writeln!(out)?;
            }
        }
        writeln!(out)
    }

    /// Move element at index up while it ranks above its parent
    fn swim(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if !self.cmp.compares_lt(&self.data[index], &self.data[parent]) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down while its better child ranks above it
    ///
    /// The right child is chosen only when it strictly ranks above the left,
    /// so equal children resolve to the left.
    fn sink(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = left_child(index);
            if left >= len {
                break;
            }
            let right = right_child(index);
            let child =
                if right < len && self.cmp.compares_lt(&self.data[right], &self.data[left]) {
                    right
                } else {
                    left
                };

            if !self.cmp.compares_lt(&self.data[child], &self.data[index]) {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
    }
}

impl<T, C: Compare<T> + Default> Heap<T> for BinaryHeap<T, C> {
    fn new() -> Self {
        Self::with_comparator(C::default())
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        BinaryHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        self.try_pop().ok()
    }
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}

impl<T, C: Compare<T> + Default> From<Vec<T>> for BinaryHeap<T, C> {
    /// Takes ownership of `vec` and sorts it with [`adjust`](BinaryHeap::adjust)
    fn from(vec: Vec<T>) -> Self {
        let mut heap = Self {
            data: vec,
            cmp: C::default(),
        };
        heap.adjust();
        heap
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparators::{KeyComparator, MaxComparator};

    fn drain<T, C: Compare<T>>(heap: &mut BinaryHeap<T, C>) -> Vec<T> {
        let mut out = Vec::with_capacity(heap.len());
        while !heap.is_empty() {
            out.push(heap.pop());
        }
        out
    }

    #[test]
    fn test_index_helpers() {
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(5), 2);
        assert_eq!(parent(6), 2);
        assert_eq!(left_child(0), 1);
        assert_eq!(right_child(0), 2);
        assert_eq!(left_child(3), 7);
        assert_eq!(right_child(3), 8);
    }

    #[test]
    fn test_basic_operations() {
        let mut heap = BinaryHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.push(3);
        heap.push(1);
        heap.push(2);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.top(), 1);
        assert_eq!(heap.peek(), Some(&1));

        assert_eq!(heap.pop(), 1);
        assert_eq!(heap.pop(), 2);
        assert_eq!(heap.pop(), 3);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_extraction_order() {
        let mut heap = BinaryHeap::new();
        for v in [5, 3, 8, 1, 9, 2] {
            heap.push(v);
        }

        let mut popped = Vec::new();
        while !heap.is_empty() {
            let top = heap.top();
            assert_eq!(heap.pop(), top);
            popped.push(top);
        }
        assert_eq!(popped, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_single_element_round_trip() {
        let mut heap = BinaryHeap::new();
        heap.push(42);
        assert_eq!(heap.top(), 42);
        heap.pop();
        assert!(heap.is_empty());
    }

    #[test]
    fn test_top_does_not_mutate() {
        let mut heap = BinaryHeap::new();
        heap.push(4);
        heap.push(2);
        let before = heap.as_slice().to_vec();
        assert_eq!(heap.top(), 2);
        assert_eq!(heap.top(), 2);
        assert_eq!(heap.as_slice(), before.as_slice());
    }

    #[test]
    fn test_max_comparator_order() {
        let mut heap = BinaryHeap::with_comparator(MaxComparator);
        for v in [5, 3, 8, 1] {
            heap.push(v);
        }
        assert_eq!(drain(&mut heap), vec![8, 5, 3, 1]);
    }

    #[test]
    fn test_closure_comparator_order() {
        let mut heap = BinaryHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        for v in [5, 3, 8, 1] {
            heap.push(v);
        }
        assert_eq!(drain(&mut heap), vec![8, 5, 3, 1]);
    }

    #[test]
    #[should_panic(expected = "empty heap")]
    fn test_top_on_empty_panics() {
        let heap: BinaryHeap<i32> = BinaryHeap::new();
        heap.top();
    }

    #[test]
    #[should_panic(expected = "empty heap")]
    fn test_pop_on_empty_panics() {
        let mut heap: BinaryHeap<i32> = BinaryHeap::new();
        heap.pop();
    }

    #[test]
    fn test_checked_access_on_empty() {
        let mut heap: BinaryHeap<i32> = BinaryHeap::new();
        assert_eq!(heap.try_top(), Err(HeapError::Empty));
        assert_eq!(heap.try_pop(), Err(HeapError::Empty));
        assert_eq!(heap.peek(), None);

        heap.push(7);
        assert_eq!(heap.try_top(), Ok(7));
        assert_eq!(heap.try_pop(), Ok(7));
        assert_eq!(heap.try_pop(), Err(HeapError::Empty));
    }

    #[test]
    fn test_sink_prefers_left_on_tie() {
        let mut heap = BinaryHeap::with_comparator(KeyComparator(|e: &(u32, &str)| e.0));
        heap.push((0, "root"));
        heap.push((5, "left"));
        heap.push((5, "right"));
        heap.push((7, "last"));
        assert_eq!(heap.as_slice()[1], (5, "left"));
        assert_eq!(heap.as_slice()[2], (5, "right"));

        // (7, "last") replaces the root and must sink towards the left child.
        assert_eq!(heap.pop(), (0, "root"));
        assert_eq!(heap.top(), (5, "left"));
        assert_eq!(heap.as_slice(), &[(5, "left"), (7, "last"), (5, "right")]);
    }

    #[test]
    fn test_swim_stops_at_equal_parent() {
        let mut heap = BinaryHeap::with_comparator(KeyComparator(|e: &(u32, char)| e.0));
        heap.push((1, 'a'));
        heap.push((1, 'b'));
        assert_eq!(heap.as_slice(), &[(1, 'a'), (1, 'b')]);
    }

    #[test]
    fn test_adjust_sorts() {
        let mut heap = BinaryHeap::new();
        heap.append_unordered([4, 1, 3, 2]);
        heap.adjust();
        assert_eq!(heap.as_slice(), &[1, 2, 3, 4]);
        assert!(heap.is_heap());
    }

    #[test]
    fn test_adjust_with_max_comparator() {
        let mut heap = BinaryHeap::with_comparator(MaxComparator);
        heap.append_unordered([4, 1, 3, 2]);
        heap.adjust();
        assert_eq!(heap.as_slice(), &[4, 3, 2, 1]);
    }

    #[test]
    fn test_adjust_repairs_unordered_append() {
        let mut heap = BinaryHeap::new();
        heap.push(10);
        heap.push(20);
        heap.append_unordered([1, 50, 0]);
        assert!(!heap.is_heap());

        heap.adjust();
        assert!(heap.is_heap());
        assert_eq!(drain(&mut heap), vec![0, 1, 10, 20, 50]);
    }

    #[test]
    fn test_adjust_on_empty() {
        let mut heap: BinaryHeap<i32> = BinaryHeap::new();
        heap.adjust();
        assert!(heap.is_empty());
    }

    #[test]
    fn test_find_on_findable_path() {
        let mut heap = BinaryHeap::new();
        heap.push(10);
        heap.push(20);
        heap.push(30);
        assert_eq!(heap.as_slice(), &[10, 20, 30]);

        assert_eq!(heap.find(&10), Some(0));
        assert_eq!(heap.find(&30), Some(2));
        assert_eq!(heap.find(&99), None);
    }

    #[test]
    fn test_find_misses_element_off_the_search_path() {
        let mut heap = BinaryHeap::new();
        heap.push(10);
        heap.push(20);
        heap.push(30);

        // 20 sits at index 1; the search goes right at the root, then left
        // below 30, and runs off the end.
        assert_eq!(heap.find(&20), None);
        assert_eq!(heap.find_from(1, &20), Some(1));
    }

    #[test]
    fn test_find_from_out_of_range() {
        let heap: BinaryHeap<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(heap.find_from(3, &1), None);
        assert_eq!(heap.find_from(usize::MAX / 4, &1), None);
    }

    #[test]
    fn test_find_on_empty() {
        let heap: BinaryHeap<i32> = BinaryHeap::new();
        assert_eq!(heap.find(&1), None);
    }

    #[test]
    fn test_duplicates() {
        let mut heap = BinaryHeap::new();
        for v in [2, 1, 2, 1, 2] {
            heap.push(v);
        }
        assert!(heap.is_heap());
        assert_eq!(heap.find(&1), Some(0));
        assert_eq!(drain(&mut heap), vec![1, 1, 2, 2, 2]);
    }

    #[test]
    fn test_dump_layout() {
        let heap: BinaryHeap<u32> = (1..=17).collect();
        let mut out = Vec::new();
        heap.dump_to(&mut out).unwrap();

        let mut expected: String = (1..=16).map(|n| format!("{n} ")).collect();
        expected.push_str("\n17 \n");
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_dump_does_not_alter_heap() {
        let mut heap = BinaryHeap::new();
        for v in [9, 4, 7, 1] {
            heap.push(v);
        }
        let before = heap.clone().into_vec();

        let mut out = Vec::new();
        heap.dump_to(&mut out).unwrap();
        assert_eq!(heap.as_slice(), before.as_slice());

        let empty: BinaryHeap<u8> = BinaryHeap::new();
        let mut out = Vec::new();
        empty.dump_to(&mut out).unwrap();
        assert_eq!(out, b"\n");
    }

    #[test]
    fn test_clone_is_deep() {
        let mut a = BinaryHeap::new();
        a.push(3);
        a.push(1);
        let mut b = a.clone();
        b.push(0);
        b.pop();
        b.pop();

        assert_eq!(a.len(), 2);
        assert_eq!(a.top(), 1);
        assert_eq!(b.len(), 1);
        assert_eq!(b.top(), 3);
    }

    #[test]
    fn test_from_vec_and_into_sorted_vec() {
        let heap = BinaryHeap::<i32>::from(vec![6, 2, 9, 2, 5]);
        assert!(heap.is_heap());
        assert_eq!(heap.into_sorted_vec(), vec![2, 2, 5, 6, 9]);
    }

    #[test]
    fn test_extend_keeps_heap_order() {
        let mut heap = BinaryHeap::with_comparator(MaxComparator);
        heap.extend([3, 9, 1, 7]);
        assert!(heap.is_heap());
        assert_eq!(heap.top(), 9);
    }

    #[test]
    fn test_clear_and_iter() {
        let mut heap: BinaryHeap<i32> = [3, 1, 2].into_iter().collect();
        let mut seen: Vec<i32> = heap.iter().copied().collect();
        seen.sort();
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!((&heap).into_iter().count(), 3);

        heap.clear();
        assert!(heap.is_empty());
    }

    #[test]
    fn test_debug_lists_storage() {
        let heap: BinaryHeap<i32> = [2, 1].into_iter().collect();
        assert_eq!(format!("{heap:?}"), "[1, 2]");
    }

    #[test]
    fn test_heap_trait_pop_returns_none_when_empty() {
        let mut heap: BinaryHeap<i32, MaxComparator> = Heap::new();
        Heap::push(&mut heap, 1);
        assert_eq!(Heap::peek(&heap), Some(&1));
        assert_eq!(Heap::pop(&mut heap), Some(1));
        assert_eq!(Heap::pop(&mut heap), None);
    }
}
