// This file is part of storage-kit.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    stack::{RawBuffer, Stack},
};

// Core imports
use core::{mem, ptr};

// External imports - tracing
use tracing::{debug, trace};

/// Capacity after the next growth step, or `None` once `cap` hit the bound.
#[inline]
pub(crate) const fn next_capacity(cap: usize, default: usize, max: usize) -> Option<usize> {
    if cap >= max {
        None
    } else if cap == 0 {
        Some(default)
    } else {
        Some(cap * 2)
    }
}

impl<T> Stack<T> {
    /// Pushes `value` on top, growing the buffer if it is full.
    ///
    /// Returns `false` (dropping `value` and leaving the stack unchanged) if
    /// the buffer cannot grow: the capacity bound was reached or the allocator
    /// refused.
    #[inline]
    pub fn push(&mut self, value: T) -> bool {
        self.emplace(|| value)
    }

    /// Constructs an element in place from `make` and pushes it.
    ///
    /// Room is secured first; `make` runs only once a slot is available, so a
    /// refused growth returns `false` without calling it. If `make` panics the
    /// length is unchanged (the buffer may already have grown).
    pub fn emplace<F>(&mut self, make: F) -> bool
    where
        F: FnOnce() -> T,
    {
        if let Err(err) = self.reserve_one() {
            debug!(len = self.len, capacity = self.capacity(), %err, "stack refused to grow");
            return false;
        }

        let value = make();
        // SAFETY: `reserve_one` guarantees `len < capacity`, so slot `len` is
        // allocated and outside the live prefix.
        unsafe { self.buf.slot(self.len).write(value) };
        self.len += 1;
        true
    }

    /// Like [`emplace`](Stack::emplace) for a fallible constructor.
    ///
    /// - `Ok(true)`: the element was constructed and pushed.
    /// - `Ok(false)`: growth was refused; `make` was not called.
    /// - `Err(e)`: `make` failed; the stack holds exactly what it held before.
    pub fn try_emplace<F, E>(&mut self, make: F) -> Result<bool, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Err(err) = self.reserve_one() {
            debug!(len = self.len, capacity = self.capacity(), %err, "stack refused to grow");
            return Ok(false);
        }

        let value = make()?;
        // SAFETY: see `emplace`.
        unsafe { self.buf.slot(self.len).write(value) };
        self.len += 1;
        Ok(true)
    }

    /// Ensures slot `len` is allocated.
    fn reserve_one(&mut self) -> Result<(), Error> {
        if self.len < self.capacity() {
            return Ok(());
        }
        let new_cap = next_capacity(
            self.capacity(),
            Self::DEFAULT_CAPACITY,
            Self::MAX_GROWTH_CAPACITY,
        )
        .ok_or(Error::CapacityOverflow)?;
        self.grow_to(new_cap)
    }

    /// Replaces the buffer with one of `new_cap` slots, relocating the live prefix.
    ///
    /// On failure nothing has changed: the fresh buffer is allocated before
    /// the old one is touched.
    fn grow_to(&mut self, new_cap: usize) -> Result<(), Error> {
        debug_assert!(new_cap >= self.len);
        let fresh = RawBuffer::<T>::allocate(new_cap)?;

        // SAFETY: both buffers have at least `len` slots and are distinct
        // allocations. Relocating a `T` is a bitwise copy that cannot fail;
        // afterwards the old slots are treated as uninitialized and the old
        // buffer only frees its memory.
        unsafe { ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_ptr(), self.len) };
        let old = mem::replace(&mut self.buf, fresh);
        trace!(from = old.capacity(), to = new_cap, len = self.len, "grew stack");
        drop(old);
        Ok(())
    }
}
