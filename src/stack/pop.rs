// This file is part of storage-kit.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Element destruction: `pop`, `clear` and `Drop`.
//!
//! None of these propagate a panic raised by an element's destructor when the
//! `std` feature is enabled: the remaining elements are still destroyed and
//! the buffer is always released. Without `std` a panicking destructor
//! propagates and the elements after it in the buffer are leaked (the buffer
//! itself is still freed).

// Crate imports
use crate::{
    dispose::destroy_in_place,
    stack::{RawBuffer, Stack},
};

// Core imports
use core::mem;

/// Destroys slots `[0, len)` of `buf`, front to back.
///
/// # Safety
///
/// Slots `[0, len)` hold live values that are no longer reachable elsewhere.
pub(crate) unsafe fn destroy_prefix<T>(buf: &RawBuffer<T>, len: usize) {
    if !mem::needs_drop::<T>() {
        return;
    }
    for i in 0..len {
        // SAFETY: `i < len <= capacity`, and the slot is live per the caller.
        unsafe { destroy_in_place(buf.slot(i)) };
    }
}

impl<T> Stack<T> {
    /// Destroys the top element. Does nothing on an empty stack.
    #[inline]
    pub fn pop(&mut self) {
        if self.len == 0 {
            return;
        }
        // Shrink first so a destructor failure can never expose a dead slot.
        self.len -= 1;
        // SAFETY: slot `len` was the last live element and is now outside the
        // live prefix.
        unsafe { destroy_in_place(self.buf.slot(self.len)) };
    }

    /// Destroys every element and releases the buffer (back to Empty).
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        let buf = mem::replace(&mut self.buf, RawBuffer::new());
        // SAFETY: `buf[..len]` were the live elements and `self` no longer
        // refers to them. `buf` frees its memory when it goes out of scope,
        // also while unwinding.
        unsafe { destroy_prefix(&buf, len) };
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
