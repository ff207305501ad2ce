// This file is part of storage-kit.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `storage-kit`
//!
//! Four hand-built generic containers that manage their own storage:
//!
//! - [`Stack<T>`]: a growable LIFO over a single buffer the stack allocates,
//!   grows and frees itself. Growth goes `0 -> 5 -> 10 -> 20 -> ...`.
//! - [`List<T>`]: a singly linked list with tail insertion and
//!   remove-all-equal.
//! - [`Queue<T>`]: a FIFO over a singly linked chain with O(1) front
//!   operations.
//! - [`Bst<K, V>`]: an unbalanced binary search tree that reports how each
//!   insert treated its key ([`InsertKind`]).
//!
//! Every container is an exclusive owner: [`Clone`] makes an independent deep
//! copy, `take()` moves the contents out in O(1) and leaves the source empty,
//! and `Drop` destroys whatever is live.
//!
//! ## Failure policy
//!
//! - Refused stack growth is reported by a `false` return from
//!   [`Stack::push`] / [`Stack::emplace`]; the stack is unchanged.
//! - Reading the front of an empty queue returns [`Error::Empty`].
//! - [`Stack::try_clone`] returns [`Error::CapacityOverflow`] or
//!   [`Error::AllocFailed`] instead of aborting.
//! - Removal from an empty container, or of something that is not there, is a
//!   no-op (`pop`) or reports `false` / `0` (`remove`).
//!
//! A failed copy never leaves partial state behind: elements copied before the
//! failure are destroyed and the target is left as it was.
//!
//! ## Features
//!
//! - `std` (default)
//!   - A panic raised by an element destructor during `pop`, `clear`, `remove`
//!     or `Drop` is caught, logged with `tracing::warn!`, and discarded; the
//!     remaining elements are still destroyed.
//!   - Without it the crate is `no_std` + `alloc` and such a panic propagates.
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for all four containers.
//!   - Sequences for [`Stack`], [`List`] and [`Queue`]; a key-ordered map for
//!     [`Bst`].
//!
//! ## Logging
//!
//! Allocation and growth emit `trace` events, refused growth a `debug` event,
//! and suppressed destructor panics a `warn` event, all through [`tracing`].
//! Nothing is printed unless the application installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use storage_kit::{Bst, InsertKind, List, Queue, Stack};
//!
//! let mut s = Stack::new();
//! assert!(s.push(1));
//! assert_eq!(s.capacity(), 5);
//!
//! let mut l = List::from([1, 2, 1]);
//! assert_eq!(l.remove(&1), 2);
//!
//! let mut q = Queue::new();
//! q.push_back("a");
//! assert_eq!(q.front(), Ok(&"a"));
//!
//! let mut t = Bst::new();
//! assert_eq!(t.insert(7, 'x'), (true, InsertKind::NewInsert));
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// Modules
mod bst;
mod dispose;
mod error;
mod list;
mod queue;
#[cfg(feature = "serde")]
mod serde;
mod stack;

// Public exports (crate API surface)
pub use bst::{Bst, InsertKind, InsertResult};
pub use error::Error;
pub use list::List;
pub use queue::Queue;
pub use stack::Stack;
