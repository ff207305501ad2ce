// This file is part of storage-kit.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Invariants for `RawBuffer<T>`:
// - `cap == 0` or `size_of::<T>() == 0` means nothing was allocated and `ptr`
//   is dangling; such a buffer is never passed to `dealloc`.
// - Otherwise `ptr` came from `alloc(Layout::array::<T>(cap))`.
// - The buffer never reads, writes or drops `T` values on its own. Which slots
//   are live is tracked by the owner (`Stack::len`).

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::alloc::{alloc, dealloc, Layout};

// Core imports
use core::{marker::PhantomData, mem, ptr::NonNull};

// External imports - tracing
use tracing::trace;

/// An untyped region of `cap` element slots with nothing constructed in it.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _owns: PhantomData<T>,
}

// SAFETY: `RawBuffer<T>` uniquely owns its allocation and the values its
// owner keeps in it, so sending it sends those `T`s.
unsafe impl<T: Send> Send for RawBuffer<T> {}

// SAFETY: `&RawBuffer<T>` only hands out raw pointers; shared access to the
// elements goes through `&Stack<T>`, which needs `T: Sync`.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    /// A buffer with zero slots. Does not allocate.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _owns: PhantomData,
        }
    }

    /// Allocates `cap` uninitialized slots.
    ///
    /// Fails with [`Error::CapacityOverflow`] when the byte size of the layout
    /// overflows `isize`, and with [`Error::AllocFailed`] when the global
    /// allocator returns null. Nothing is leaked on failure.
    pub(crate) fn allocate(cap: usize) -> Result<Self, Error> {
        if cap == 0 {
            return Ok(Self::new());
        }
        let layout = Layout::array::<T>(cap).map_err(|_| Error::CapacityOverflow)?;
        if layout.size() == 0 {
            // Zero-sized elements: every slot lives at the dangling address.
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap,
                _owns: PhantomData,
            });
        }

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(Error::AllocFailed)?;
        trace!(slots = cap, bytes = layout.size(), "allocated stack buffer");

        Ok(Self {
            ptr,
            cap,
            _owns: PhantomData,
        })
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to slot `i`.
    ///
    /// # Safety
    ///
    /// `i <= self.capacity()`. The slot may be uninitialized; the caller decides
    /// whether it can be read.
    #[inline]
    pub(crate) unsafe fn slot(&self, i: usize) -> *mut T {
        debug_assert!(i <= self.cap);
        // SAFETY: in bounds of the allocation (or a zero-sized offset) per the caller.
        unsafe { self.ptr.as_ptr().add(i) }
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return;
        }
        // The same layout was computed successfully in `allocate`.
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            // SAFETY: `ptr` was returned by `alloc` with exactly this layout and
            // has not been freed; live elements were destroyed by the owner.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
            trace!(slots = self.cap, "released stack buffer");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RawBuffer;
    use crate::Error;

    #[test]
    fn test_zero_capacity_does_not_allocate() {
        let b: RawBuffer<u64> = RawBuffer::allocate(0).unwrap();
        assert_eq!(b.capacity(), 0);
        assert_eq!(b.as_ptr(), core::ptr::NonNull::<u64>::dangling().as_ptr());
    }

    #[test]
    fn test_allocate_reports_capacity() {
        let b: RawBuffer<String> = RawBuffer::allocate(7).unwrap();
        assert_eq!(b.capacity(), 7);
        assert!(!b.as_ptr().is_null());
    }

    #[test]
    fn test_layout_overflow_is_capacity_overflow() {
        let err = RawBuffer::<u64>::allocate(usize::MAX).err();
        assert_eq!(err, Some(Error::CapacityOverflow));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_impossible_allocation_is_reported() {
        // One exbibyte is a valid layout but larger than any address space.
        let err = RawBuffer::<u8>::allocate(1 << 60).err();
        assert_eq!(err, Some(Error::AllocFailed));
    }

    #[test]
    fn test_thread_safety_follows_element_type() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<RawBuffer<u64>>();
        assert_send_sync::<crate::Stack<String>>();
    }

    #[test]
    fn test_stack_can_move_across_threads() {
        let mut s = crate::Stack::new();
        for i in 0..7 {
            s.push(i.to_string());
        }
        let handle = std::thread::spawn(move || {
            s.pop();
            s.len()
        });
        assert_eq!(handle.join().unwrap(), 6);
    }

    #[test]
    fn test_zero_sized_slots_are_tracked_without_memory() {
        let b: RawBuffer<()> = RawBuffer::allocate(1_000).unwrap();
        assert_eq!(b.capacity(), 1_000);
    }
}
