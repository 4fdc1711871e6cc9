//! Fixed-Capacity Circular Buffer for Sensor History
//!
//! ## Overview
//!
//! A ring store that keeps the most recent `capacity` values pushed into it.
//! Capacity is chosen at runtime but never changes afterwards: storage is a
//! boxed slice allocated once at construction, and a full buffer makes room
//! by overwriting its oldest element instead of growing.
//!
//! ## Indexing
//!
//! Elements are addressed by *logical* index, where `0` is the oldest value
//! still held and `len() - 1` is the newest. The buffer tracks the physical
//! slot of the oldest element (`head`) and translates:
//!
//! ```text
//! Physical slots:  [D, E, A, B, C]   head = 2, len = 5
//!                   0  1  2  3  4
//!
//! Logical view:    [A, B, C, D, E]
//!                   0  1  2  3  4
//!
//! physical = (head + logical) % capacity
//! ```
//!
//! Pushing `F` into the buffer above writes slot `(2 + 5) % 5 = 2`, which is
//! where `A` lived, and moves `head` to 3. `A` is gone and `F` is now the
//! newest element.
//!
//! ## Bounds Checking
//!
//! Every accessor checks the logical index against `len()`:
//! - [`CircularBuffer::get`] / [`CircularBuffer::get_mut`] return `None`
//! - [`CircularBuffer::element_at`] / [`CircularBuffer::element_at_mut`]
//!   return [`MonitorError::OutOfRange`]
//! - `buffer[i]` panics with the index and element count
//!
//! ## Usage Example
//!
//! ```rust
//! use sensorwatch_core::buffer::CircularBuffer;
//!
//! let mut history = CircularBuffer::new(3).unwrap();
//! for reading in [10, 20, 30, 40] {
//!     history.push(reading);
//! }
//!
//! // 10 was evicted by the fourth push
//! assert_eq!(history.len(), 3);
//! assert_eq!(history.element_at(0), Ok(&20));
//! assert_eq!(history.last(), Some(&40));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use core::num::NonZeroUsize;
use core::ops::{Index, IndexMut};

use crate::errors::{MonitorError, MonitorResult};

/// Fixed-capacity ring buffer with overwrite-when-full semantics
///
/// ## Internal Invariants
///
/// - `len <= data.len()`
/// - `head < data.len()`
/// - the slots at `(head + i) % data.len()` for `i < len` are `Some`
///
/// Slots are `Option<T>` so no `Default` or `Clone` bound is needed on `T`
/// and no unsafe code is involved.
///
/// ## Thread Safety
///
/// Not synchronized. Share it across threads behind a mutex.
#[derive(Clone)]
pub struct CircularBuffer<T> {
    /// Backing storage, exactly `capacity` slots
    data: Box<[Option<T>]>,

    /// Physical slot of the logically-oldest element
    head: usize,

    /// Number of valid elements
    len: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` elements
    ///
    /// A capacity of zero is rejected with [`MonitorError::InvalidCapacity`].
    pub fn new(capacity: usize) -> MonitorResult<Self> {
        match NonZeroUsize::new(capacity) {
            Some(capacity) => Ok(Self::with_capacity(capacity)),
            None => {
                log_warn!("Rejected circular buffer with zero capacity");
                Err(MonitorError::InvalidCapacity { capacity })
            }
        }
    }

    /// Creates an empty buffer from a capacity already known to be non-zero
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        let data: Vec<Option<T>> = core::iter::repeat_with(|| None)
            .take(capacity.get())
            .collect();

        Self {
            data: data.into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    /// Maximum number of elements the buffer holds
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Adds a value as the newest element
    ///
    /// When the buffer is full the oldest element is overwritten and the
    /// element after it becomes the oldest. Never fails.
    ///
    /// ```rust
    /// # use sensorwatch_core::buffer::CircularBuffer;
    /// let mut buf = CircularBuffer::new(2).unwrap();
    /// buf.push(1);
    /// buf.push(2);
    /// buf.push(3); // overwrites 1
    ///
    /// assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    /// ```
    pub fn push(&mut self, value: T) {
        let slot = self.physical_index(self.len);
        self.data[slot] = Some(value);

        if self.is_full() {
            self.head = (self.head + 1) % self.capacity();
            log_trace!("Circular buffer full, overwrote slot {}", slot);
        } else {
            self.len += 1;
        }
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Element at a logical index (0 = oldest), or `None` if out of range
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        self.data[self.physical_index(index)].as_ref()
    }

    /// Mutable element at a logical index, or `None` if out of range
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }

        let slot = self.physical_index(index);
        self.data[slot].as_mut()
    }

    /// Element at a logical index (0 = oldest)
    ///
    /// Fails with [`MonitorError::OutOfRange`] when `index >= len()`.
    pub fn element_at(&self, index: usize) -> MonitorResult<&T> {
        let len = self.len;
        self.get(index).ok_or(MonitorError::OutOfRange { index, len })
    }

    /// Mutable element at a logical index, for in-place updates
    ///
    /// Fails with [`MonitorError::OutOfRange`] when `index >= len()`.
    pub fn element_at_mut(&mut self, index: usize) -> MonitorResult<&mut T> {
        let len = self.len;
        self.get_mut(index).ok_or(MonitorError::OutOfRange { index, len })
    }

    /// Oldest stored element
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Newest stored element
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buffer: self,
            front: 0,
            back: self.len,
        }
    }

    /// Drops every stored element, keeping the capacity
    pub fn clear(&mut self) {
        for slot in self.data.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    fn physical_index(&self, logical: usize) -> usize {
        (self.head + logical) % self.capacity()
    }
}

impl<T> Index<usize> for CircularBuffer<T> {
    type Output = T;

    /// Panics if `index >= len()`
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index {} out of range for {} stored elements",
                index, self.len
            ),
        }
    }
}

impl<T> IndexMut<usize> for CircularBuffer<T> {
    /// Panics if `index >= len()`
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index {} out of range for {} stored elements", index, len),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularBuffer")
            .field("capacity", &self.capacity())
            .field("elements", &DebugElements(self))
            .finish()
    }
}

struct DebugElements<'a, T>(&'a CircularBuffer<T>);

impl<T: fmt::Debug> fmt::Debug for DebugElements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Iterator over buffer contents, oldest first
pub struct Iter<'a, T> {
    buffer: &'a CircularBuffer<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let item = self.buffer.get(self.front)?;
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        self.buffer.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a CircularBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, values: impl IntoIterator<Item = i32>) -> CircularBuffer<i32> {
        let mut buffer = CircularBuffer::new(capacity).unwrap();
        for value in values {
            buffer.push(value);
        }
        buffer
    }

    #[test]
    fn empty_buffer() {
        let buffer: CircularBuffer<f32> = CircularBuffer::new(5).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 5);
        assert!(buffer.last().is_none());
        assert!(buffer.first().is_none());
    }

    #[test]
    fn zero_capacity_rejected() {
        let result = CircularBuffer::<u8>::new(0);
        assert_eq!(result.unwrap_err(), MonitorError::InvalidCapacity { capacity: 0 });
    }

    #[test]
    fn push_and_retrieve() {
        let mut buffer = CircularBuffer::new(5).unwrap();

        buffer.push(25.0_f32);
        assert_eq!(buffer.len(), 1);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.last(), Some(&25.0));
        assert_eq!(buffer.element_at(0), Ok(&25.0));
    }

    #[test]
    fn circular_overwrite() {
        let buffer = filled(3, 0..5);

        // Should only have 3 items
        assert_eq!(buffer.len(), 3);
        assert!(buffer.is_full());

        // 0 and 1 were overwritten
        let values: Vec<i32> = buffer.iter().copied().collect();
        assert_eq!(values, vec![2, 3, 4]);
    }

    #[test]
    fn eviction_drops_exactly_the_oldest() {
        let buffer = filled(4, [10, 20, 30, 40, 50]);

        assert_eq!(buffer.element_at(0), Ok(&20));
        assert_eq!(buffer.element_at(3), Ok(&50));
        assert_eq!(buffer.first(), Some(&20));
        assert_eq!(buffer.last(), Some(&50));
    }

    #[test]
    fn head_wraps_after_many_laps() {
        let buffer = filled(3, 0..1_000);

        let values: Vec<i32> = buffer.iter().copied().collect();
        assert_eq!(values, vec![997, 998, 999]);
    }

    #[test]
    fn out_of_range_is_reported() {
        let mut buffer = filled(4, [1, 2]);

        assert_eq!(
            buffer.element_at(2),
            Err(MonitorError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            buffer.element_at_mut(7).unwrap_err(),
            MonitorError::OutOfRange { index: 7, len: 2 }
        );
        assert!(buffer.get(2).is_none());
    }

    #[test]
    fn in_place_mutation() {
        let mut buffer = filled(3, [1, 2, 3, 4]);

        *buffer.element_at_mut(0).unwrap() += 100;
        buffer[2] = -1;

        let values: Vec<i32> = buffer.iter().copied().collect();
        assert_eq!(values, vec![102, 3, -1]);
    }

    #[test]
    #[should_panic(expected = "index 3 out of range for 3 stored elements")]
    fn index_operator_panics_past_len() {
        let buffer = filled(5, [1, 2, 3]);
        let _ = buffer[3];
    }

    #[test]
    fn iterator_order() {
        let buffer = filled(4, 0..6);

        let forward: Vec<i32> = buffer.iter().copied().collect();
        let backward: Vec<i32> = buffer.iter().rev().copied().collect();
        assert_eq!(forward, vec![2, 3, 4, 5]);
        assert_eq!(backward, vec![5, 4, 3, 2]);
        assert_eq!(buffer.iter().len(), 4);

        let mut total = 0;
        for value in &buffer {
            total += value;
        }
        assert_eq!(total, 14);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buffer = filled(3, 0..5);
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 3);

        buffer.push(42);
        assert_eq!(buffer.first(), Some(&42));
    }

    #[test]
    fn repeated_reads_are_stable() {
        let buffer = filled(3, [7, 8, 9, 10]);

        for _ in 0..3 {
            assert_eq!(buffer.len(), 3);
            assert_eq!(buffer.element_at(1), Ok(&9));
        }
    }

    #[test]
    fn works_without_clone_or_default() {
        struct Opaque(u32);

        let mut buffer = CircularBuffer::new(2).unwrap();
        buffer.push(Opaque(1));
        buffer.push(Opaque(2));
        buffer.push(Opaque(3));

        assert_eq!(buffer.first().map(|o| o.0), Some(2));
    }

    #[test]
    fn debug_lists_logical_order() {
        let buffer = filled(2, [1, 2, 3]);
        assert_eq!(
            format!("{:?}", buffer),
            "CircularBuffer { capacity: 2, elements: [2, 3] }"
        );
    }
}
