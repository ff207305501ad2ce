// This file is part of storage-kit.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the containers.
//!
//! Only reads of missing elements and refused allocations are reported here.
//! Capacity-bounded mutation on [`Stack`](crate::Stack) reports through a
//! plain `bool` instead, and [`Stack::top`](crate::Stack::top) treats an empty
//! stack as a caller bug.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on the containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Read access on an empty container (e.g. [`Queue::front`](crate::Queue::front)).
    Empty,
    /// The requested capacity is past the growth bound or its layout overflows `isize`.
    CapacityOverflow,
    /// The global allocator could not provide the requested buffer.
    AllocFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("access to an empty container"),
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocFailed => f.write_str("memory allocation failed"),
        }
    }
}

impl CoreError for Error {}
