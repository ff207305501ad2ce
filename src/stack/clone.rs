// This file is part of storage-kit.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    stack::{pop::destroy_prefix, RawBuffer, Stack},
};

// Alloc imports
use alloc::alloc::{handle_alloc_error, Layout};

// Core imports
use core::mem;

/// Undo list for a partially cloned buffer.
///
/// While armed, dropping it destroys the `done` elements already written into
/// `buf`. The buffer itself is released by its own `Drop` afterwards.
struct PartialClone<'a, T> {
    buf: &'a RawBuffer<T>,
    done: usize,
}

impl<T> Drop for PartialClone<'_, T> {
    fn drop(&mut self) {
        // SAFETY: exactly `done` slots were written and nothing else sees them.
        unsafe { destroy_prefix(self.buf, self.done) };
    }
}

impl<T: Clone> Stack<T> {
    /// Clones the live elements into an independent buffer of the same capacity.
    ///
    /// Only the `len` live elements are cloned; the uninitialized tail is
    /// never touched. Allocation failure is returned instead of aborting. If
    /// an element's `clone` panics, the clones made so far are destroyed and
    /// the new buffer is freed before the panic continues.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let buf = RawBuffer::<T>::allocate(self.capacity())?;
        let mut guard = PartialClone { buf: &buf, done: 0 };
        for (i, item) in self.as_slice().iter().enumerate() {
            let copy = item.clone();
            // SAFETY: `i < len <= capacity` and slot `i` has not been written.
            unsafe { buf.slot(i).write(copy) };
            guard.done += 1;
        }
        // Every slot is live now; ownership passes to the new stack.
        mem::forget(guard);
        Ok(Self {
            buf,
            len: self.len,
        })
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(Error::AllocFailed) => match Layout::array::<T>(self.capacity()) {
                Ok(layout) => handle_alloc_error(layout),
                Err(_) => panic!("capacity overflow"),
            },
            Err(err) => panic!("{err}"),
        }
    }

    /// Copy assignment with the strong guarantee: the copy is built first and
    /// only then swapped in, so a failed clone leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        mem::swap(self, &mut fresh);
    }
}

#[cfg(test)]
mod tests {
    use crate::Stack;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    /// Clones fine until the shared budget runs out, then panics.
    /// Every live instance is counted.
    struct Fragile {
        id: u32,
        budget: Rc<Cell<usize>>,
        live: Rc<Cell<isize>>,
    }

    impl Fragile {
        fn new(id: u32, budget: &Rc<Cell<usize>>, live: &Rc<Cell<isize>>) -> Self {
            live.set(live.get() + 1);
            Self {
                id,
                budget: budget.clone(),
                live: live.clone(),
            }
        }
    }

    impl Clone for Fragile {
        fn clone(&self) -> Self {
            let left = self.budget.get();
            if left == 0 {
                panic!("clone budget exhausted");
            }
            self.budget.set(left - 1);
            Fragile::new(self.id, &self.budget, &self.live)
        }
    }

    impl Drop for Fragile {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    #[test]
    fn test_clone_is_deep_and_independent() {
        let mut original = Stack::new();
        original.push(42);

        let mut copy = original.clone();
        assert_eq!(copy.len(), 1);
        assert_eq!(original.len(), 1);
        assert_eq!(*copy.top(), 42);
        assert_eq!(*original.top(), 42);

        copy.push(7);
        *copy.top_mut() = 8;
        assert_eq!(original.len(), 1);
        assert_eq!(*original.top(), 42);

        original.pop();
        assert_eq!(copy.as_slice(), &[42, 8]);
    }

    #[test]
    fn test_clone_keeps_capacity_and_clones_only_live() {
        let mut s = Stack::new();
        for i in 0..6 {
            s.push(i);
        }
        s.pop();
        let c = s.clone();
        assert_eq!(c.capacity(), 10);
        assert_eq!(c.len(), 5);
        assert_eq!(c, s);
    }

    #[test]
    fn test_clone_of_empty_stays_unallocated() {
        let s: Stack<u8> = Stack::new();
        let c = s.try_clone().unwrap();
        assert_eq!(c.capacity(), 0);
        assert!(c.is_empty());
    }

    #[test]
    fn test_clone_panic_midway_unwinds_partial_copy() {
        let budget = Rc::new(Cell::new(usize::MAX));
        let live = Rc::new(Cell::new(0));
        let mut s = Stack::new();
        for id in 0..4 {
            assert!(s.push(Fragile::new(id, &budget, &live)));
        }
        assert_eq!(live.get(), 4);

        // The third element clone fails.
        budget.set(2);
        let res = catch_unwind(AssertUnwindSafe(|| s.clone()));
        assert!(res.is_err());

        // The two successful clones were destroyed; the source is intact.
        assert_eq!(live.get(), 4);
        assert_eq!(s.len(), 4);
        assert_eq!(s.top().id, 3);
    }

    #[test]
    fn test_clone_from_failure_leaves_destination_untouched() {
        let budget = Rc::new(Cell::new(usize::MAX));
        let live = Rc::new(Cell::new(0));

        let mut source = Stack::new();
        source.push(Fragile::new(10, &budget, &live));
        source.push(Fragile::new(11, &budget, &live));

        let mut dest = Stack::new();
        dest.push(Fragile::new(1, &budget, &live));

        budget.set(1);
        let res = catch_unwind(AssertUnwindSafe(|| dest.clone_from(&source)));
        assert!(res.is_err());
        assert_eq!(dest.len(), 1);
        assert_eq!(dest.top().id, 1);
        assert_eq!(live.get(), 3);

        budget.set(usize::MAX);
        dest.clone_from(&source);
        assert_eq!(dest.len(), 2);
        assert_eq!(dest.top().id, 11);
        assert_eq!(live.get(), 4);
    }

    #[test]
    fn test_copy_assignment_overwrites() {
        let mut from = Stack::new();
        from.push(8);
        let mut to = Stack::new();
        to.push(1);
        to.push(2);
        to.clone_from(&from);
        assert_eq!(to.len(), 1);
        assert_eq!(*to.top(), 8);
        assert_eq!(from.len(), 1);
    }
}
