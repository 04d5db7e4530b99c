use crate::canonical::{self, CanonicalFormError};
use alloc::collections::BTreeMap;
use core::fmt::{self, Debug};
use core::ops::{Bound, Index, Range};
use alloc::vec::Vec;
use core::prelude::v1::*;

#[cfg(feature = "serde1")]
use core::marker::PhantomData;
#[cfg(feature = "serde1")]
use serde::{
    de::{self, Deserialize, Deserializer, SeqAccess, Visitor},
    ser::{Serialize, Serializer},
};

mod iterators;

pub use iterators::{Breakpoints, IntoIter, Run, Runs};

/// A map that assigns a value to every key of a totally ordered key space.
///
/// Every key starts out mapped to the base value given to
/// [`new`](IntervalMap::new). Half-open ranges `[begin, end)` are then
/// overwritten with [`assign`](IntervalMap::assign).
///
/// Only the keys at which the active value changes are stored, and they
/// are kept in canonical form: no two consecutive breakpoints carry the
/// same value, and the first breakpoint never carries the base value.
#[derive(Clone, PartialEq, Eq)]
pub struct IntervalMap<K, V> {
    // Active for every key below the first breakpoint.
    base: V,
    // Each entry is active from its key (inclusive) up to the next key.
    btm: BTreeMap<K, V>,
}

impl<K, V> Default for IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Eq + Clone + Default,
{
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<K, V> IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Eq + Clone,
{
    /// Makes a new `IntervalMap` mapping every key to `base`.
    pub fn new(base: V) -> Self {
        IntervalMap {
            base,
            btm: BTreeMap::new(),
        }
    }

    /// Rebuilds a map from its base value and breakpoints, given in
    /// ascending key order (as produced by [`breakpoints`](Self::breakpoints)).
    ///
    /// # Errors
    ///
    /// Returns the first [`CanonicalFormError`] found if the breakpoints
    /// are out of order or redundant.
    pub fn from_breakpoints<I>(base: V, breakpoints: I) -> Result<Self, CanonicalFormError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let entries: Vec<(K, V)> = breakpoints.into_iter().collect();
        canonical::check(&base, entries.iter().map(|(k, v)| (k, v)))?;
        Ok(IntervalMap {
            base,
            btm: entries.into_iter().collect(),
        })
    }

    /// Returns the value active below the first breakpoint.
    pub fn base_value(&self) -> &V {
        &self.base
    }

    /// Returns a reference to the value active at the given key.
    pub fn get(&self, key: &K) -> &V {
        // The active value comes from the last breakpoint whose key
        // is less than or equal to this key, if there is one.
        self.btm
            .range((Bound::Unbounded, Bound::Included(key)))
            .next_back()
            .map_or(&self.base, |(_key, value)| value)
    }

    /// Returns the maximal run of keys sharing the value active at `key`.
    pub fn get_run(&self, key: &K) -> Run<'_, K, V> {
        let (start, value) = match self
            .btm
            .range((Bound::Unbounded, Bound::Included(key)))
            .next_back()
        {
            Some((stored_key, value)) => (Bound::Included(stored_key), value),
            None => (Bound::Unbounded, &self.base),
        };
        let end = match self
            .btm
            .range((Bound::Excluded(key), Bound::Unbounded))
            .next()
        {
            Some((stored_key, _value)) => Bound::Excluded(stored_key),
            None => Bound::Unbounded,
        };
        Run { start, end, value }
    }

    // Value active immediately to the left of `key`.
    fn get_before(&self, key: &K) -> &V {
        self.btm
            .range((Bound::Unbounded, Bound::Excluded(key)))
            .next_back()
            .map_or(&self.base, |(_key, value)| value)
    }

    /// Returns the number of stored breakpoints, i.e. the number of
    /// places where the active value changes.
    pub fn num_breakpoints(&self) -> usize {
        self.btm.len()
    }

    /// Returns `true` if every key maps to the base value.
    pub fn is_uniform(&self) -> bool {
        self.btm.is_empty()
    }

    /// Gets an iterator over the stored breakpoints in ascending key order.
    ///
    /// The iterator element type is `(&'a K, &'a V)`.
    pub fn breakpoints(&self) -> Breakpoints<'_, K, V> {
        Breakpoints(self.btm.iter())
    }

    /// Gets an iterator over all maximal runs of keys sharing a value,
    /// in ascending key order.
    ///
    /// The first run is unbounded below and carries the base value;
    /// the last run is unbounded above. There is always at least one run.
    pub fn runs(&self) -> Runs<'_, K, V> {
        Runs {
            current: Some((Bound::Unbounded, &self.base)),
            inner: self.btm.iter(),
        }
    }

    /// Assigns `value` to every key `k` with `key_begin <= k < key_end`.
    ///
    /// Keys outside that interval keep their current value.
    /// If `!(key_begin < key_end)` the interval is empty and
    /// nothing happens.
    pub fn assign(&mut self, key_begin: K, key_end: K, value: V) {
        if key_begin >= key_end {
            #[cfg(feature = "tracing")]
            tracing::trace!("ignoring assignment to an empty interval");
            return;
        }

        // If the run to the left already carries the new value,
        // it just grows and `key_begin` must not become a breakpoint.
        let extends_left = *self.get_before(&key_begin) == value;

        // Whatever is active at `key_end` must still be active there
        // afterwards. Take it now; the breakpoint carrying it may lie
        // inside the interval and be removed below.
        let restored = self.get(&key_end).clone();

        while let Some(stored_key) = self
            .btm
            .range((Bound::Included(&key_begin), Bound::Excluded(&key_end)))
            .next()
            .map(|(stored_key, _value)| stored_key.clone())
        {
            self.btm.remove(&stored_key);
        }

        let restores_right = restored != value;
        if restores_right {
            // A breakpoint already stored at `key_end` carries `restored`.
            self.btm.entry(key_end).or_insert(restored);
        } else {
            // The assigned run continues past `key_end`.
            self.btm.remove(&key_end);
        }

        if !extends_left {
            self.btm.insert(key_begin, value);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            extends_left,
            restores_right,
            breakpoints = self.btm.len(),
            "assigned interval"
        );
    }

    /// Assigns `value` to every key in `range`. Equivalent to
    /// `assign(range.start, range.end, value)`.
    pub fn assign_range(&mut self, range: Range<K>, value: V) {
        self.assign(range.start, range.end, value);
    }

    /// Verifies that the stored breakpoints are in canonical form.
    ///
    /// This always succeeds for maps built through the public API;
    /// it exists to make that property checkable.
    pub fn check_canonical(&self) -> Result<(), CanonicalFormError> {
        canonical::check(&self.base, self.btm.iter())
    }

    /// Consumes the map, returning its base value and an iterator
    /// over its breakpoints in ascending key order.
    pub fn into_parts(self) -> (V, IntoIter<K, V>) {
        (self.base, IntoIter(self.btm.into_iter()))
    }
}

impl<K, V> Index<&K> for IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Eq + Clone,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.get(key)
    }
}

impl<'a, K, V> IntoIterator for &'a IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Eq + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Breakpoints<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.breakpoints()
    }
}

// Deriving this would print the field names of the inner tree.
// Print the base value and then the breakpoints the way `BTreeMap` does.
impl<K: Debug, V: Debug> Debug for IntervalMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalMap")
            .field("base", &self.base)
            .field("breakpoints", &self.btm)
            .finish()
    }
}

impl<K, V> Extend<(Range<K>, V)> for IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Eq + Clone,
{
    fn extend<T: IntoIterator<Item = (Range<K>, V)>>(&mut self, iter: T) {
        iter.into_iter().for_each(move |(range, value)| {
            self.assign_range(range, value);
        })
    }
}

#[cfg(feature = "serde1")]
impl<K, V> Serialize for IntervalMap<K, V>
where
    K: Ord + Clone + Serialize,
    V: Eq + Clone + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        // The base value first, then one `(key, value)` pair per breakpoint.
        let mut seq = serializer.serialize_seq(Some(self.btm.len() + 1))?;
        seq.serialize_element(&self.base)?;
        for (k, v) in self.btm.iter() {
            seq.serialize_element(&(k, v))?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde1")]
impl<'de, K, V> Deserialize<'de> for IntervalMap<K, V>
where
    K: Ord + Clone + Deserialize<'de>,
    V: Eq + Clone + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(IntervalMapVisitor::new())
    }
}

#[cfg(feature = "serde1")]
struct IntervalMapVisitor<K, V> {
    marker: PhantomData<fn() -> IntervalMap<K, V>>,
}

#[cfg(feature = "serde1")]
impl<K, V> IntervalMapVisitor<K, V> {
    fn new() -> Self {
        IntervalMapVisitor {
            marker: PhantomData,
        }
    }
}

#[cfg(feature = "serde1")]
impl<'de, K, V> Visitor<'de> for IntervalMapVisitor<K, V>
where
    K: Ord + Clone + Deserialize<'de>,
    V: Eq + Clone + Deserialize<'de>,
{
    type Value = IntervalMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("IntervalMap")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let base: V = access
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let mut breakpoints = Vec::new();
        while let Some((key, value)) = access.next_element::<(K, V)>()? {
            breakpoints.push((key, value));
        }
        IntervalMap::from_breakpoints(base, breakpoints).map_err(de::Error::custom)
    }
}

#[cfg(feature = "quickcheck")]
impl<K, V> quickcheck::Arbitrary for IntervalMap<K, V>
where
    K: quickcheck::Arbitrary + Ord,
    V: quickcheck::Arbitrary + Eq,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut interval_map = IntervalMap::new(V::arbitrary(g));
        // Empty and inverted intervals are left in on purpose;
        // they are no-ops.
        let assignments = <Vec<(K, K, V)> as quickcheck::Arbitrary>::arbitrary(g);
        for (key_begin, key_end, value) in assignments {
            interval_map.assign(key_begin, key_end, value);
        }
        interval_map
    }
}
