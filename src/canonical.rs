//! Canonical form checks for breakpoint sequences.
//!
//! A sequence of breakpoints is canonical relative to a base value when
//! its keys are strictly increasing, the first breakpoint does not carry
//! the base value, and no breakpoint carries the same value as the one
//! before it. [`IntervalMap`](crate::IntervalMap) maintains this form
//! after every operation; the checker here is what tests, deserialization
//! and [`IntervalMap::from_breakpoints`](crate::IntervalMap::from_breakpoints)
//! use to verify it.

/// The way in which a breakpoint sequence fails to be canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CanonicalFormError {
    /// The key of breakpoint `index` is not strictly greater than the key
    /// of the breakpoint before it.
    #[error("breakpoint {index} does not have a key strictly greater than the one before it")]
    KeysNotIncreasing { index: usize },

    /// The first breakpoint carries the base value, so it changes nothing.
    #[error("first breakpoint carries the base value")]
    DuplicatesBase,

    /// Breakpoint `index` carries the same value as the breakpoint before it.
    #[error("breakpoint {index} carries the same value as the one before it")]
    RedundantBreakpoint { index: usize },
}

/// Verifies that `breakpoints`, given in iteration order, are in canonical
/// form relative to `base`. Reports the first violation found.
pub(crate) fn check<'a, K, V, I>(base: &V, breakpoints: I) -> Result<(), CanonicalFormError>
where
    K: Ord + 'a,
    V: Eq + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let mut previous: Option<(&'a K, &'a V)> = None;
    for (index, (key, value)) in breakpoints.into_iter().enumerate() {
        match previous {
            None => {
                if value == base {
                    return Err(CanonicalFormError::DuplicatesBase);
                }
            }
            Some((previous_key, previous_value)) => {
                if previous_key >= key {
                    return Err(CanonicalFormError::KeysNotIncreasing { index });
                }
                if previous_value == value {
                    return Err(CanonicalFormError::RedundantBreakpoint { index });
                }
            }
        }
        previous = Some((key, value));
    }
    Ok(())
}
