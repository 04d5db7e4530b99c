use alloc::collections::btree_map;
use core::fmt::{self, Debug};
use core::iter::FusedIterator;
use core::ops::{Bound, RangeBounds};

/// A maximal run of keys that all map to the same value.
///
/// `start` is [`Bound::Unbounded`] for the run carrying the base value
/// below the first breakpoint, and `end` is [`Bound::Unbounded`] for the
/// run that follows the last breakpoint. Otherwise a run covers
/// `start..end` like a half-open range.
#[derive(Debug, PartialEq, Eq)]
pub struct Run<'a, K, V> {
    pub start: Bound<&'a K>,
    pub end: Bound<&'a K>,
    pub value: &'a V,
}

impl<K, V> Clone for Run<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K, V> Copy for Run<'_, K, V> {}

impl<K, V> RangeBounds<K> for Run<'_, K, V> {
    fn start_bound(&self) -> Bound<&K> {
        self.start
    }

    fn end_bound(&self) -> Bound<&K> {
        self.end
    }
}

/// An iterator over the breakpoints of an `IntervalMap`.
///
/// This `struct` is created by the [`breakpoints`] method on
/// [`IntervalMap`]. See its documentation for more.
///
/// [`breakpoints`]: super::IntervalMap::breakpoints
/// [`IntervalMap`]: super::IntervalMap
pub struct Breakpoints<'a, K, V>(pub(super) btree_map::Iter<'a, K, V>);
impl<K, V> Clone for Breakpoints<'_, K, V> {
    fn clone(&self) -> Self {
        Breakpoints(self.0.clone())
    }
}
impl<K: Debug, V: Debug> Debug for Breakpoints<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
impl<'a, K: 'a, V: 'a> Iterator for Breakpoints<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.0.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
    fn last(mut self) -> Option<(&'a K, &'a V)> {
        self.next_back()
    }
}
impl<K, V> FusedIterator for Breakpoints<'_, K, V> {}
impl<'a, K: 'a, V: 'a> DoubleEndedIterator for Breakpoints<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        self.0.next_back()
    }
}
impl<K, V> ExactSizeIterator for Breakpoints<'_, K, V> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// An owning iterator over the breakpoints of an `IntervalMap`.
///
/// This `struct` is created by the [`into_parts`] method on
/// [`IntervalMap`].
///
/// [`into_parts`]: super::IntervalMap::into_parts
/// [`IntervalMap`]: super::IntervalMap
pub struct IntoIter<K, V>(pub(super) btree_map::IntoIter<K, V>);
impl<K: Debug, V: Debug> Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.0.len())
            .finish()
    }
}
impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> {
        self.0.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
impl<K, V> FusedIterator for IntoIter<K, V> {}
impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.0.next_back()
    }
}
impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// An iterator over the maximal runs of an `IntervalMap`.
///
/// This `struct` is created by the [`runs`] method on [`IntervalMap`].
///
/// [`runs`]: super::IntervalMap::runs
/// [`IntervalMap`]: super::IntervalMap
pub struct Runs<'a, K, V> {
    // Start and value of the next run to yield; its end is
    // the next breakpoint. `None` once the last run is out.
    pub(super) current: Option<(Bound<&'a K>, &'a V)>,
    pub(super) inner: btree_map::Iter<'a, K, V>,
}
impl<K, V> Clone for Runs<'_, K, V> {
    fn clone(&self) -> Self {
        Runs {
            current: self.current,
            inner: self.inner.clone(),
        }
    }
}
impl<K: Debug, V: Debug> Debug for Runs<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
impl<'a, K: 'a, V: 'a> Iterator for Runs<'a, K, V> {
    type Item = Run<'a, K, V>;

    fn next(&mut self) -> Option<Run<'a, K, V>> {
        let (start, value) = self.current.take()?;
        let end = match self.inner.next() {
            Some((key, next_value)) => {
                self.current = Some((Bound::Included(key), next_value));
                Bound::Excluded(key)
            }
            None => Bound::Unbounded,
        };
        Some(Run { start, end, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}
// `Runs` is always fused; `current` stays `None` once taken at the end.
impl<K, V> FusedIterator for Runs<'_, K, V> {}
impl<K, V> ExactSizeIterator for Runs<'_, K, V> {
    fn len(&self) -> usize {
        match self.current {
            Some(_) => self.inner.len() + 1,
            None => 0,
        }
    }
}
