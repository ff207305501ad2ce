// This file is part of storage-kit.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Stack` type and its inherent API.
//!
//! `Stack<T>` owns a single contiguous buffer that it allocates and grows by
//! itself. Elements are constructed in place at the end of the live prefix and
//! destroyed in place when popped, cleared or dropped.

mod clone;
mod pop;
mod push;
mod raw;

pub(crate) use raw::RawBuffer;

// Core imports
use core::fmt;

/// A growable LIFO stack over a hand-managed buffer.
///
/// # Layout and invariants
///
/// `Stack<T>` maintains:
///
/// - a buffer of `capacity` slots, allocated lazily on the first push; and
/// - a logical length `len` with `0 <= len <= capacity`.
///
/// Slots `[0, len)` hold live `T` values in insertion order (`len - 1` is the
/// top). Slots `[len, capacity)` are allocated but uninitialized and are never
/// read, copied or dropped.
///
/// # States
///
/// - **Empty**: `capacity == 0`, nothing allocated. [`new`](Stack::new),
///   [`Default`], [`clear`](Stack::clear) and [`take`](Stack::take) (on the
///   source) produce this state.
/// - **Allocated**: `capacity > 0`, `len` anywhere in `0..=capacity`.
///
/// # Growth
///
/// When a push needs a slot past the end, the capacity becomes
/// [`DEFAULT_CAPACITY`](Stack::DEFAULT_CAPACITY) (from Empty) or doubles.
/// Growth allocates a fresh buffer, relocates the live prefix into it and frees
/// the old one; if allocation fails the old buffer is untouched. A stack whose
/// capacity has reached [`MAX_GROWTH_CAPACITY`](Stack::MAX_GROWTH_CAPACITY)
/// refuses to grow.
///
/// # Error policy
///
/// - [`push`](Stack::push) / [`emplace`](Stack::emplace) report refused growth
///   by returning `false`.
/// - [`pop`](Stack::pop) on an empty stack does nothing.
/// - [`top`](Stack::top) on an empty stack is a caller bug and panics; check
///   [`is_empty`](Stack::is_empty) first.
///
/// # Examples
///
/// ```rust
/// use storage_kit::Stack;
///
/// let mut s = Stack::new();
/// for i in 1..=6 {
///     assert!(s.push(i));
/// }
/// assert_eq!(s.len(), 6);
/// assert_eq!(s.capacity(), 10);
/// assert_eq!(*s.top(), 6);
///
/// s.pop();
/// s.pop();
/// assert_eq!(*s.top(), 4);
/// ```
pub struct Stack<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
}

impl<T> Stack<T> {
    /// Capacity of the first buffer allocated by a push.
    pub const DEFAULT_CAPACITY: usize = 5;

    /// A stack at or past this capacity never grows again.
    pub const MAX_GROWTH_CAPACITY: usize = usize::MAX / 3;

    /// Constructs an empty stack. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots, live or not.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the most recently pushed element.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[inline]
    #[track_caller]
    pub fn top(&self) -> &T {
        assert!(self.len != 0, "top() called on an empty stack");
        &self.as_slice()[self.len - 1]
    }

    /// Returns the most recently pushed element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[inline]
    #[track_caller]
    pub fn top_mut(&mut self) -> &mut T {
        assert!(self.len != 0, "top_mut() called on an empty stack");
        let last = self.len - 1;
        &mut self.as_mut_slice()[last]
    }

    /// Moves the contents out, leaving `self` Empty (`len == 0`, `capacity == 0`).
    ///
    /// O(1): only the buffer handle changes owner.
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: by invariant `buf[..len]` are initialized and `len <= capacity`.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, plus exclusive access through `&mut self`.
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    /// Compares live elements only; capacity is not part of the value.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for Stack<T> {}

#[cfg(test)]
mod tests {
    // Imports
    use super::Stack;
    use alloc::format;

    #[test]
    fn test_new_stack_is_unallocated() {
        let s: Stack<i32> = Stack::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 0);
    }

    #[test]
    fn test_push_six_then_pop_two() {
        let mut s = Stack::new();
        for i in 1..=6 {
            assert!(s.push(i));
        }
        assert_eq!(s.len(), 6);
        assert_eq!(s.capacity(), 10);
        assert_eq!(*s.top(), 6);

        s.pop();
        s.pop();
        assert_eq!(s.len(), 4);
        assert_eq!(*s.top(), 4);
    }

    #[test]
    fn test_top_mut_writes_through() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        *s.top_mut() = 20;
        assert_eq!(s.as_slice(), &[1, 20]);
    }

    #[test]
    #[should_panic(expected = "empty stack")]
    fn test_top_on_empty_panics() {
        let s: Stack<u8> = Stack::new();
        let _ = s.top();
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut from = Stack::new();
        from.push(8);
        let cap = from.capacity();

        let to = from.take();
        assert_eq!(from.len(), 0);
        assert_eq!(from.capacity(), 0);
        assert_eq!(to.len(), 1);
        assert_eq!(to.capacity(), cap);
        assert_eq!(*to.top(), 8);

        // The emptied source is fully usable again.
        assert!(from.push(9));
        assert_eq!(from.capacity(), Stack::<i32>::DEFAULT_CAPACITY);
    }

    #[test]
    fn test_move_assignment_replaces_destination() {
        let mut from = Stack::new();
        from.push(8);
        let mut to = Stack::new();
        to.push(1);
        to.push(2);

        to = from.take();
        assert_eq!(to.as_slice(), &[8]);
        assert!(from.is_empty());
    }

    #[test]
    fn test_eq_ignores_capacity() {
        let mut a = Stack::new();
        let mut b = Stack::new();
        for i in 0..3 {
            a.push(i);
            b.push(i);
        }
        for i in 3..8 {
            b.push(i);
        }
        for _ in 3..8 {
            b.pop();
        }
        assert_ne!(a.capacity(), b.capacity());
        assert_eq!(a, b);
    }

    #[test]
    fn test_debug_structure() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        let dbg = format!("{s:?}");
        assert!(dbg.contains("Stack"));
        assert!(dbg.contains("len: 2"));
        assert!(dbg.contains("capacity: 5"));
        assert!(dbg.contains("[1, 2]"));
    }

    #[test]
    fn test_zero_sized_elements_follow_growth_schedule() {
        let mut s: Stack<()> = Stack::new();
        for _ in 0..6 {
            assert!(s.push(()));
        }
        assert_eq!(s.len(), 6);
        assert_eq!(s.capacity(), 10);
    }
}
