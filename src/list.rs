// This file is part of storage-kit.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A singly linked list with tail insertion.
//!
//! Every node exclusively owns the next one, so the whole chain is owned by
//! the head link. Dropping and clearing walk the chain in a loop instead of
//! letting `Box` recurse, which keeps long lists from exhausting the stack.

// Crate imports
use crate::dispose::dispose;

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::fmt;

struct Node<T> {
    value: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// An ordered, singly linked sequence.
///
/// - [`insert`](List::insert) appends at the tail (O(n): the tail is found by
///   walking from the head).
/// - [`remove`](List::remove) unlinks **every** node equal to the value.
/// - [`Clone`] duplicates the chain node for node; [`take`](List::take) moves
///   the chain out in O(1) and leaves the source empty.
///
/// # Examples
///
/// ```rust
/// use storage_kit::List;
///
/// let mut l = List::from([1, 2, 3, 1]);
/// assert_eq!(l.remove(&1), 2);
/// assert_eq!(l.len(), 2);
/// assert_eq!(l.to_vec(), vec![2, 3]);
/// ```
pub struct List<T> {
    head: Link<T>,
    len: usize,
}

impl<T> List<T> {
    /// Constructs an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Constructs a list of `len` default-valued nodes.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut head = None;
        for _ in 0..len {
            head = Some(Box::new(Node {
                value: T::default(),
                next: head,
            }));
        }
        Self { head, len }
    }

    /// Number of nodes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value` after the current tail.
    pub fn insert(&mut self, value: T) {
        let node = Box::new(Node { value, next: None });
        let mut tail = &mut self.head;
        while let Some(current) = tail {
            tail = &mut current.next;
        }
        *tail = Some(node);
        self.len += 1;
    }

    /// Constructs a value from `make` and appends it.
    #[inline]
    pub fn emplace<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        self.insert(make());
    }

    /// Unlinks and destroys every node equal to `value`.
    ///
    /// Returns the number of nodes removed. Relative order of the remaining
    /// nodes is preserved. Nodes are unlinked one at a time, so if a
    /// comparison panics the list still holds every node not yet removed and
    /// `len` matches it.
    pub fn remove(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        let mut link = &mut self.head;
        let mut removed = 0;
        loop {
            let matched = match link.as_deref() {
                None => break,
                Some(node) => node.value == *value,
            };
            if matched {
                let Some(mut node) = link.take() else { break };
                *link = node.next.take();
                removed += 1;
                self.len -= 1;
                dispose(node);
            } else {
                let Some(node) = link else { break };
                link = &mut node.next;
            }
        }
        removed
    }

    /// Returns `true` if some node equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            if node.value == *value {
                return true;
            }
            cursor = node.next.as_deref();
        }
        false
    }

    /// Returns the head value, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns the value at position `index` (O(index)).
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut cursor = self.head.as_deref();
        for _ in 0..index {
            cursor = cursor?.next.as_deref();
        }
        cursor.map(|node| &node.value)
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

    /// Copies the values into a `Vec`, head first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        self.walk(|value| out.push(value.clone()));
        out
    }

    /// Visits every value, head first.
    pub(crate) fn walk<'a>(&'a self, mut visit: impl FnMut(&'a T)) {
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            visit(&node.value);
            cursor = node.next.as_deref();
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for value in iter {
            tail = &mut tail.insert(Box::new(Node { value, next: None })).next;
            list.len += 1;
        }
        list
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> Clone for List<T> {
    /// Node-for-node copy. If a value's `clone` panics, the nodes copied so
    /// far belong to a local list and are freed during unwinding.
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

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        self.walk(|value| {
            entries.entry(value);
        });
        entries.finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
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
impl<T: Eq> Eq for List<T> {}
