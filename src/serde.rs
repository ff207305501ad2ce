// This file is part of storage-kit.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for the containers.
//!
//! - [`Stack`], [`List`] and [`Queue`] serialize as a sequence of their live
//!   elements: bottom to top for the stack, head to tail for the others.
//!   Deserializing pushes/appends in sequence order, so a round trip restores
//!   the same element order (a stack gets its capacity from the growth
//!   schedule, not from the input).
//! - [`Bst`] serializes as a map visited in ascending key order and
//!   deserializes by inserting every entry; a repeated key keeps the last data.
//!
//! A stack that refuses to grow while deserializing turns into a
//! `serde` custom error.

// Crate imports
use crate::{bst::Bst, list::List, queue::Queue, stack::Stack};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for Stack<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let live = self.as_slice();
        let mut seq = s.serialize_seq(Some(live.len()))?;
        for item in live {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl<T: Serialize> Serialize for List<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        let mut outcome = Ok(());
        self.walk(|item| {
            if outcome.is_ok() {
                outcome = seq.serialize_element(item);
            }
        });
        outcome?;
        seq.end()
    }
}

impl<T: Serialize> Serialize for Queue<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        let mut outcome = Ok(());
        self.walk(|item| {
            if outcome.is_ok() {
                outcome = seq.serialize_element(item);
            }
        });
        outcome?;
        seq.end()
    }
}

impl<K: Serialize, V: Serialize> Serialize for Bst<K, V> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeMap;
        let mut map = s.serialize_map(Some(self.len()))?;
        let mut outcome = Ok(());
        self.for_each_in_order(|k, v| {
            if outcome.is_ok() {
                outcome = map.serialize_entry(k, v);
            }
        });
        outcome?;
        map.end()
    }
}

struct StackVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for StackVisitor<T> {
    type Value = Stack<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of stack elements, bottom first")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = Stack::new();
        while let Some(elem) = a.next_element::<T>()? {
            if !out.push(elem) {
                return Err(de::Error::custom(format_args!(
                    "stack refused to grow past capacity {}",
                    out.capacity()
                )));
            }
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Stack<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(StackVisitor(PhantomData))
    }
}

struct ListVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for ListVisitor<T> {
    type Value = List<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of list elements, head first")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        // Collect first: appending one by one would walk the chain every time.
        let mut items = alloc::vec::Vec::with_capacity(a.size_hint().unwrap_or(0).min(4096));
        while let Some(elem) = a.next_element::<T>()? {
            items.push(elem);
        }
        Ok(items.into_iter().collect())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for List<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ListVisitor(PhantomData))
    }
}

struct QueueVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for QueueVisitor<T> {
    type Value = Queue<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of queue elements, front first")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut items = alloc::vec::Vec::with_capacity(a.size_hint().unwrap_or(0).min(4096));
        while let Some(elem) = a.next_element::<T>()? {
            items.push(elem);
        }
        // Build back to front so every insertion is an O(1) `push_front`.
        let mut out = Queue::new();
        while let Some(elem) = items.pop() {
            out.push_front(elem);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Queue<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(QueueVisitor(PhantomData))
    }
}

struct BstVisitor<K, V>(PhantomData<(K, V)>);

impl<'de, K, V> de::Visitor<'de> for BstVisitor<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de> + PartialEq,
{
    type Value = Bst<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of keys to data")
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = Bst::new();
        while let Some((k, v)) = a.next_entry::<K, V>()? {
            out.insert(k, v);
        }
        Ok(out)
    }
}

impl<'de, K, V> Deserialize<'de> for Bst<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de> + PartialEq,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_map(BstVisitor(PhantomData))
    }
}
