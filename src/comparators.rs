//! Comparators for [`BinaryHeap`](crate::BinaryHeap)
//!
//! A heap places element `a` above element `b` when its comparator reports
//! `a` as [`Ordering::Less`] than `b`. Any type implementing
//! [`compare::Compare`] can be used, including plain closures of the form
//! `Fn(&T, &T) -> Ordering`. The types here cover the common cases and, unlike
//! closures, are `Default`, so a heap using them can be built with
//! [`Heap::new`](crate::Heap::new).
//!
//! | Comparator | Top of the heap |
//! |------------|-----------------|
//! | [`MinComparator`] | smallest element (the default) |
//! | [`MaxComparator`] | largest element |
//! | [`FnComparator`] | whatever the wrapped function orders first |
//! | [`KeyComparator`] | element with the smallest extracted key |

use compare::Compare;
use std::cmp::Ordering;

/// Natural ascending order; makes a min-heap.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct MinComparator;

impl<T: Ord> Compare<T> for MinComparator {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Descending order; makes a max-heap.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct MaxComparator;

impl<T: Ord> Compare<T> for MaxComparator {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Wraps a comparison function.
///
/// ```rust
/// use rust_binary_heap::{BinaryHeap, FnComparator};
///
/// // Order by absolute value.
/// let mut heap = BinaryHeap::with_comparator(FnComparator(|a: &i32, b: &i32| {
///     a.abs().cmp(&b.abs())
/// }));
/// heap.push(-7);
/// heap.push(2);
/// heap.push(-1);
/// assert_eq!(heap.pop(), -1);
/// assert_eq!(heap.pop(), 2);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct FnComparator<F>(pub F);

impl<T, F> Compare<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Orders elements by a key extracted from each one, smallest key first.
///
/// ```rust
/// use rust_binary_heap::{BinaryHeap, KeyComparator};
///
/// let mut heap = BinaryHeap::with_comparator(KeyComparator(|job: &(u32, &str)| job.0));
/// heap.push((3, "compile"));
/// heap.push((1, "fetch"));
/// assert_eq!(heap.top(), (1, "fetch"));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct KeyComparator<F>(pub F);

impl<K: Ord, T, F> Compare<T> for KeyComparator<F>
where
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}
