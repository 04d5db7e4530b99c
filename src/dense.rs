use alloc::{vec, vec::Vec};
use core::ops::Range;

use super::IntervalMap;

// A simple but infeasibly slow and memory-hungry
// version of `IntervalMap` for testing.
//
// Only understands `u32` keys from zero up to a fixed
// limit, and stores the value of every one of them.
// Keys at or above the limit are never assigned, so
// the value stored for the limit itself stands in
// for everything beyond it.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct DenseU32IntervalMap<V> {
    base: V,
    // One value per key in `0..=limit`.
    values: Vec<V>,
}

impl<V> DenseU32IntervalMap<V>
where
    V: Eq + Clone,
{
    pub fn new(base: V, limit: u32) -> DenseU32IntervalMap<V> {
        DenseU32IntervalMap {
            values: vec![base.clone(); limit as usize + 1],
            base,
        }
    }

    pub fn limit(&self) -> u32 {
        (self.values.len() - 1) as u32
    }

    pub fn assign(&mut self, range: Range<u32>, value: V) {
        // Keep the last slot untouched; see above.
        let end = range.end.min(self.limit());
        for k in range.start..end {
            self.values[k as usize] = value.clone();
        }
    }

    pub fn get(&self, key: u32) -> &V {
        &self.values[key.min(self.limit()) as usize]
    }

    // Every key whose value differs from the key before it
    // (or from the base value, for key zero).
    pub fn breakpoints(&self) -> Vec<(u32, V)> {
        let mut previous = &self.base;
        let mut breakpoints = Vec::new();
        for (k, value) in self.values.iter().enumerate() {
            if value != previous {
                breakpoints.push((k as u32, value.clone()));
            }
            previous = value;
        }
        breakpoints
    }
}

impl<V> From<&IntervalMap<u32, V>> for DenseU32IntervalMap<V>
where
    V: Eq + Clone,
{
    // Only valid for maps whose breakpoints all lie
    // at or below `DENSE_LIMIT`.
    fn from(interval_map: &IntervalMap<u32, V>) -> Self {
        let mut dense = Self::new(interval_map.base_value().clone(), DENSE_LIMIT);
        for key in 0..=DENSE_LIMIT {
            dense.values[key as usize] = interval_map.get(&key).clone();
        }
        dense
    }
}

// Largest key the tests drive into the dense model.
pub const DENSE_LIMIT: u32 = 40;
