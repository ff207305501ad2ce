// This file is part of storage-kit.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A FIFO queue over a singly linked chain.
//!
//! Only the head link is kept: front operations are O(1) and
//! [`push_back`](Queue::push_back) walks to the node with no successor.

// Crate imports
use crate::{dispose::dispose, error::Error};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::fmt;

struct Node<T> {
    value: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// A singly linked queue with head-only bookkeeping.
///
/// # Error policy
///
/// - [`front`](Queue::front) / [`front_mut`](Queue::front_mut) on an empty
///   queue return [`Error::Empty`].
/// - [`pop_front`](Queue::pop_front) on an empty queue does nothing and
///   returns `None`.
///
/// # Examples
///
/// ```rust
/// use storage_kit::{Error, Queue};
///
/// let mut q = Queue::new();
/// assert_eq!(q.front(), Err(Error::Empty));
/// q.push_back(1);
/// q.push_front(4);
/// assert_eq!(q.front(), Ok(&4));
/// assert_eq!(q.pop_front(), Some(4));
/// assert_eq!(q.front(), Ok(&1));
/// ```
pub struct Queue<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Queue<T> {
    /// Constructs an empty queue.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the head value, or [`Error::Empty`].
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        self.head
            .as_deref()
            .map(|node| &node.value)
            .ok_or(Error::Empty)
    }

    /// Returns the head value mutably, or [`Error::Empty`].
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        self.head
            .as_deref_mut()
            .map(|node| &mut node.value)
            .ok_or(Error::Empty)
    }

    /// Prepends `value`. O(1).
    #[inline]
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Appends `value` after the last node. O(n).
    ///
    /// The node is allocated before the chain is walked, so the queue is
    /// unchanged if allocation aborts.
    pub fn push_back(&mut self, value: T) {
        let node = Box::new(Node { value, next: None });
        let mut tail = &mut self.head;
        while let Some(current) = tail {
            tail = &mut current.next;
        }
        *tail = Some(node);
        self.len += 1;
    }

    /// Constructs a value from `make` and prepends it.
    #[inline]
    pub fn emplace_front<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        self.push_front(make());
    }

    /// Constructs a value from `make` and appends it.
    #[inline]
    pub fn emplace_back<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        self.push_back(make());
    }

    /// Removes the head and returns its value. Does nothing on an empty queue.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    /// Destroys every node.
    pub fn clear(&mut self) {
        let mut rest = self.head.take();
        while let Some(mut node) = rest {
            rest = node.next.take();
            dispose(node);
        }
        self.len = 0;
    }

    /// Moves the chain out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Copies the values into a `Vec`, front first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        self.walk(|value| out.push(value.clone()));
        out
    }

    /// Visits every value, front first.
    pub(crate) fn walk<'a>(&'a self, mut visit: impl FnMut(&'a T)) {
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            visit(&node.value);
            cursor = node.next.as_deref();
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Queue<T> {
    /// Deep copy, node by node from the front.
    ///
    /// The copy is grown inside a local queue; if a value's `clone` panics
    /// that queue is dropped while unwinding, freeing every node copied so far.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        let mut tail = &mut copy.head;
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            let value = node.value.clone();
            tail = &mut tail.insert(Box::new(Node { value, next: None })).next;
            copy.len += 1;
            cursor = node.next.as_deref();
        }
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        self.walk(|value| {
            entries.entry(value);
        });
        entries.finish()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let (mut a, mut b) = (self.head.as_deref(), other.head.as_deref());
        while let (Some(x), Some(y)) = (a, b) {
            if x.value != y.value {
                return false;
            }
            a = x.next.as_deref();
            b = y.next.as_deref();
        }
        true
    }
}
impl<T: Eq> Eq for Queue<T> {}

#[cfg(test)]
mod tests {
    use super::Queue;
    use crate::Error;
    use alloc::{format, rc::Rc, vec};
    use core::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_front_on_empty_is_error() {
        let mut q: Queue<i32> = Queue::new();
        assert_eq!(q.front(), Err(Error::Empty));
        assert_eq!(q.front_mut(), Err(Error::Empty));
    }

    #[test]
    fn test_pop_front_on_empty_is_noop() {
        let mut q: Queue<i32> = Queue::new();
        assert_eq!(q.pop_front(), None);
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn test_push_and_emplace_both_ends() {
        let mut q = Queue::new();
        q.push_back(1);
        q.push_front(4);
        q.emplace_back(|| 2);
        q.emplace_front(|| 3);
        assert_eq!(q.len(), 4);
        assert_eq!(q.to_vec(), vec![3, 4, 1, 2]);

        assert_eq!(q.pop_front(), Some(3));
        assert_eq!(q.front(), Ok(&4));
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.front(), Err(Error::Empty));
    }

    #[test]
    fn test_fifo_order() {
        let mut q = Queue::new();
        for i in 0..5 {
            q.push_back(i);
        }
        for i in 0..5 {
            assert_eq!(q.pop_front(), Some(i));
        }
        assert_eq!(q.pop_front(), None);
    }

    #[test]
    fn test_front_mut_writes_through() {
        let mut q = Queue::new();
        q.push_back(1);
        *q.front_mut().unwrap() = 10;
        assert_eq!(q.front(), Ok(&10));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut from = Queue::new();
        from.push_back(8);
        from.push_back(9);

        let mut to = from.clone();
        assert_eq!(to, from);
        to.pop_front();
        to.push_back(10);
        assert_eq!(from.to_vec(), vec![8, 9]);
        assert_eq!(to.to_vec(), vec![9, 10]);
    }

    #[test]
    fn test_copy_assignment() {
        let mut from = Queue::new();
        from.push_back(8);
        let mut to = Queue::new();
        to.push_back(1);
        to.push_back(2);
        to.clone_from(&from);
        assert_eq!(to.to_vec(), vec![8]);
        assert_eq!(from.len(), 1);
    }

    #[test]
    fn test_take_empties_source() {
        let mut from = Queue::new();
        from.push_back(8);
        let to = from.take();
        assert!(from.is_empty());
        assert_eq!(from.front(), Err(Error::Empty));
        assert_eq!(to.front(), Ok(&8));
    }

    #[test]
    fn test_clone_of_empty() {
        let q: Queue<u8> = Queue::new();
        let c = q.clone();
        assert!(c.is_empty());
    }

    #[test]
    fn test_clone_panic_unwinds_copied_nodes() {
        struct Counted {
            live: Rc<Cell<isize>>,
            fail: bool,
        }
        impl Clone for Counted {
            fn clone(&self) -> Self {
                if self.fail {
                    panic!("clone failed");
                }
                self.live.set(self.live.get() + 1);
                Counted {
                    live: self.live.clone(),
                    fail: false,
                }
            }
        }
        impl Drop for Counted {
            fn drop(&mut self) {
                self.live.set(self.live.get() - 1);
            }
        }

        let live = Rc::new(Cell::new(0));
        let mut q = Queue::new();
        for fail in [false, false, false, true] {
            live.set(live.get() + 1);
            q.push_back(Counted {
                live: live.clone(),
                fail,
            });
        }
        assert_eq!(live.get(), 4);

        assert!(catch_unwind(AssertUnwindSafe(|| q.clone())).is_err());
        assert_eq!(live.get(), 4);
        assert_eq!(q.len(), 4);
    }

    #[test]
    fn test_long_queue_drops_without_recursion() {
        let mut q = Queue::new();
        for i in 0..200_000u32 {
            q.push_front(i);
        }
        assert_eq!(q.front(), Ok(&199_999));
        drop(q);
    }

    #[test]
    fn test_debug_lists_front_first() {
        let mut q = Queue::new();
        q.push_back(1);
        q.push_back(2);
        assert_eq!(format!("{q:?}"), "[1, 2]");
    }
}
