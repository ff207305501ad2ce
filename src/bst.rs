// This file is part of storage-kit.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! An unbalanced binary search tree keyed by a total order.
//!
//! Each node exclusively owns its left and right subtrees. No rebalancing is
//! done, so the height is whatever the insertion order makes it; lookups,
//! insertion and removal descend in a loop, and teardown uses an explicit
//! work list.

// Crate imports
use crate::dispose::dispose;

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::{cmp::Ordering, fmt};

struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

type Link<K, V> = Option<Box<Node<K, V>>>;

/// What [`Bst::insert`] did with the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertKind {
    /// The key was not present; a node was added.
    NewInsert,
    /// The key was present with equal data; the data was overwritten anyway.
    OverwriteSame,
    /// The key was present with different data, which was replaced.
    OverwriteDifferent,
}

/// Result of [`Bst::insert`]: whether the data was stored, and how.
pub type InsertResult = (bool, InsertKind);

/// A binary search tree mapping `K` to `V`.
///
/// # Examples
///
/// ```rust
/// use storage_kit::{Bst, InsertKind};
///
/// let mut t = Bst::new();
/// assert_eq!(t.insert(1, "a"), (true, InsertKind::NewInsert));
/// assert_eq!(t.insert(1, "a"), (true, InsertKind::OverwriteSame));
/// assert_eq!(t.insert(1, "b"), (true, InsertKind::OverwriteDifferent));
/// assert!(t.remove(&1));
/// assert!(!t.remove(&1));
/// ```
pub struct Bst<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Bst<K, V> {
    /// Constructs an empty tree.
    #[inline]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of keys.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Visits every entry in ascending key order.
    pub fn for_each_in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        let mut pending: Vec<&Node<K, V>> = Vec::new();
        let mut cursor = self.root.as_deref();
        loop {
            while let Some(node) = cursor {
                pending.push(node);
                cursor = node.left.as_deref();
            }
            match pending.pop() {
                Some(node) => {
                    visit(&node.key, &node.value);
                    cursor = node.right.as_deref();
                }
                None => break,
            }
        }
    }

    /// Destroys every node.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<K, V>>> = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
            dispose(node);
        }
        self.len = 0;
    }
}

impl<K: Ord, V> Bst<K, V> {
    /// Returns the data stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Returns the data stored under `key` mutably.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut cursor = self.root.as_deref_mut();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            };
        }
        None
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key` and its data. Returns `false` if the key was absent.
    ///
    /// A node with at most one child is replaced by that child. A node with
    /// two children is replaced by its in-order successor (the leftmost node
    /// of its right subtree), which is detached and given the removed node's
    /// children. Both descents are loops, so tree height is not bounded by
    /// the thread stack.
    pub fn remove(&mut self, key: &K) -> bool {
        let mut link = &mut self.root;
        loop {
            match link.as_deref().map(|node| key.cmp(&node.key)) {
                None => return false,
                Some(Ordering::Equal) => break,
                Some(ord) => {
                    let Some(node) = link else { return false };
                    link = if ord == Ordering::Less {
                        &mut node.left
                    } else {
                        &mut node.right
                    };
                }
            }
        }

        let Some(mut target) = link.take() else {
            return false;
        };
        *link = match (target.left.take(), target.right.take()) {
            (None, child) | (child, None) => child,
            (Some(left), right) => {
                let mut rest = right;
                match Self::take_leftmost(&mut rest) {
                    Some(mut successor) => {
                        successor.left = Some(left);
                        successor.right = rest;
                        Some(successor)
                    }
                    None => Some(left),
                }
            }
        };
        dispose(target);
        self.len -= 1;
        true
    }

    /// Detaches the leftmost node under `link`, splicing its right subtree
    /// into its place.
    fn take_leftmost(link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
        let mut link = link;
        while link.as_ref().is_some_and(|node| node.left.is_some()) {
            let Some(node) = link else { return None };
            link = &mut node.left;
        }
        let mut leftmost = link.take()?;
        *link = leftmost.right.take();
        Some(leftmost)
    }
}

impl<K: Ord, V: PartialEq> Bst<K, V> {
    /// Stores `data` under `key`.
    ///
    /// An existing key has its data overwritten; the returned kind says
    /// whether the old data compared equal to the new.
    pub fn insert(&mut self, key: K, data: V) -> InsertResult {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => {
                    let kind = if node.value == data {
                        InsertKind::OverwriteSame
                    } else {
                        InsertKind::OverwriteDifferent
                    };
                    node.value = data;
                    return (true, kind);
                }
            }
        }
        *link = Some(Box::new(Node {
            key,
            value: data,
            left: None,
            right: None,
        }));
        self.len += 1;
        (true, InsertKind::NewInsert)
    }
}

impl<K, V> Default for Bst<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Bst<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Bst<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_map();
        self.for_each_in_order(|k, v| {
            entries.entry(k, v);
        });
        entries.finish()
    }
}
