// This file is part of storage-kit.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Destruction on paths that must not propagate a failure.
//!
//! With the `std` feature, a panic raised while dropping an element is caught
//! here, logged, and discarded. Without `std` there is no way to stop an
//! unwind and the panic propagates.

// Core imports
use core::{mem::ManuallyDrop, ptr};

/// Runs the destructor of the value at `slot`.
///
/// # Safety
///
/// `slot` points to a live `T` that nothing will read or drop again.
#[inline]
pub(crate) unsafe fn destroy_in_place<T>(slot: *mut T) {
    #[cfg(feature = "std")]
    {
        use std::panic::{catch_unwind, AssertUnwindSafe};
        // SAFETY: forwarded from the caller.
        let outcome = catch_unwind(AssertUnwindSafe(|| unsafe { ptr::drop_in_place(slot) }));
        if outcome.is_err() {
            tracing::warn!(
                element = core::any::type_name::<T>(),
                "suppressed panic from element destructor"
            );
        }
    }
    #[cfg(not(feature = "std"))]
    {
        // SAFETY: forwarded from the caller.
        unsafe { ptr::drop_in_place(slot) }
    }
}

/// Drops `value` under the same containment as [`destroy_in_place`].
#[inline]
pub(crate) fn dispose<T>(value: T) {
    let mut value = ManuallyDrop::new(value);
    // SAFETY: `value` is owned here and never touched again after this call.
    unsafe { destroy_in_place(&mut *value as *mut T) }
}
