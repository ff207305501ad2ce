// This file is part of storage-kit.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Walks every container through its operations and copy/move paths.
//!
//! Run with `RUST_LOG=trace cargo run --example tour` to see buffer growth.

use storage_kit::{Bst, Error, InsertKind, List, Queue, Stack};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn stack_tour() {
    let mut s = Stack::new();
    info!(len = s.len(), capacity = s.capacity(), "empty stack");

    for i in 1..=6 {
        let stored = s.push(i);
        info!(value = i, stored, len = s.len(), capacity = s.capacity(), "push");
    }
    info!(top = *s.top(), "after six pushes");

    s.pop();
    s.pop();
    info!(top = *s.top(), len = s.len(), "after two pops");

    let mut names: Stack<String> = Stack::new();
    names.emplace(|| "built in place".to_owned());
    let parsed: Result<bool, std::num::ParseIntError> =
        Stack::<u32>::new().try_emplace(|| "12".parse::<u32>());
    info!(top = %names.top(), ?parsed, "emplace and try_emplace");

    let copy = s.clone();
    let mut assigned = Stack::new();
    assigned.push(99);
    assigned.clone_from(&s);
    info!(?copy, ?assigned, "copy construction and copy assignment");

    match s.try_clone() {
        Ok(fallible) => info!(len = fallible.len(), "try_clone"),
        Err(err) => info!(%err, "try_clone failed"),
    }

    let moved = s.take();
    info!(
        source_len = s.len(),
        source_capacity = s.capacity(),
        dest_len = moved.len(),
        dest_capacity = moved.capacity(),
        "move leaves the source empty"
    );

    let mut cleared = moved;
    cleared.clear();
    info!(capacity = cleared.capacity(), empty = cleared.is_empty(), "clear");
}

fn list_tour() {
    let mut l = List::from([1, 2, 3, 1]);
    let removed = l.remove(&1);
    info!(removed, list = ?l, "remove every match");

    l.insert(4);
    l.emplace(|| 5);
    info!(
        first = ?l.first(),
        third = ?l.get(2),
        has_three = l.contains(&3),
        "insert and emplace"
    );

    let sized: List<u8> = List::with_len(3);
    info!(list = ?sized, "default-valued nodes");

    let mut copy = l.clone();
    copy.insert(6);
    info!(original = ?l, copy = ?copy, "copy is independent");

    let moved = l.take();
    info!(source_empty = l.is_empty(), dest = ?moved.to_vec(), "move");

    let mut cleared = moved;
    cleared.clear();
    info!(len = cleared.len(), "clear");
}

fn queue_tour() {
    let mut q: Queue<i32> = Queue::new();
    match q.front() {
        Ok(v) => info!(front = v, "unexpected front"),
        Err(Error::Empty) => info!("front on an empty queue is an error"),
        Err(err) => info!(%err, "front failed"),
    }
    info!(popped = ?q.pop_front(), "pop_front on empty does nothing");

    q.push_back(1);
    q.push_front(4);
    q.emplace_back(|| 2);
    q.emplace_front(|| 3);
    info!(queue = ?q, "both ends");

    if let Ok(front) = q.front_mut() {
        *front *= 10;
    }
    info!(front = ?q.front(), "front_mut");

    let copy = q.clone();
    let mut assigned = Queue::new();
    assigned.push_back(0);
    assigned.clone_from(&q);
    info!(?copy, ?assigned, "copy construction and copy assignment");

    let moved = q.take();
    info!(source = ?q, dest = ?moved.to_vec(), "move");

    let mut drained = moved;
    while let Some(v) = drained.pop_front() {
        info!(value = v, remaining = drained.len(), "pop_front");
    }
    drained.push_back(7);
    drained.clear();
    info!(empty = drained.is_empty(), "clear");
}

fn bst_tour() {
    let mut t = Bst::new();
    for (k, v) in [(50, "fifty"), (30, "thirty"), (70, "seventy"), (60, "sixty"), (80, "eighty")] {
        let (stored, kind) = t.insert(k, v);
        info!(key = k, stored, ?kind, "insert");
    }

    let (_, same) = t.insert(30, "thirty");
    let (_, different) = t.insert(30, "THIRTY");
    assert_eq!(same, InsertKind::OverwriteSame);
    assert_eq!(different, InsertKind::OverwriteDifferent);
    info!(?same, ?different, "overwrite kinds");

    if let Some(v) = t.get_mut(&60) {
        *v = "sixty!";
    }
    info!(sixty = ?t.get(&60), has_40 = t.contains_key(&40), "lookups");

    let removed_inner = t.remove(&70);
    let removed_missing = t.remove(&40);
    info!(removed_inner, removed_missing, tree = ?t, "remove");

    let mut keys = Vec::new();
    t.for_each_in_order(|k, _| keys.push(*k));
    info!(?keys, len = t.len(), "in-order keys");

    t.clear();
    info!(empty = t.is_empty(), "clear");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    stack_tour();
    list_tour();
    queue_tour();
    bst_tour();
}
