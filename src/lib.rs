/*!
[`IntervalMap`] is a map data structure that assigns a value to _every_ key
of a totally ordered key space. The space starts out entirely covered by a
single base value; calling [`assign`](IntervalMap::assign) overwrites the
value of a half-open range of keys `[begin, end)`.

Internally the map stores only _breakpoints_: the keys at which the active
value changes, each paired with the value that starts there. These are
always kept in canonical form:

- no two consecutive breakpoints carry the same value, and
- the first breakpoint never carries the base value.

This means that two maps that answer every lookup the same way also
compare equal, and that the number of stored entries is the number of
value transitions, no matter how many assignments produced them.


# Example

```rust
use intervalmap::IntervalMap;

let mut map = IntervalMap::new('A');
map.assign(1, 4, 'B');
map.assign(3, 5, 'A');

assert_eq!(map[&0], 'A');
assert_eq!(map[&2], 'B');
assert_eq!(map[&3], 'A');

// No breakpoint at 5: the value there is already the base value.
let breakpoints: Vec<_> = map.breakpoints().collect();
assert_eq!(breakpoints, vec![(&1, &'B'), (&3, &'A')]);
```


# Keys without arithmetic

Keys only need to be ordered. `assign` never asks for the successor or
predecessor of a key, so the key domain can be dense: anything that
implements [`Ord`] works, including wrappers around floating point
numbers or timestamps.


## Crate features

By default this crate depends only on _thiserror_ (built without `std`).

If you enable the **serde1** feature it will introduce a dependency on
the _serde_ crate and provide `Serialize` and `Deserialize`
implementations for [`IntervalMap`]. Deserialization rejects input that
is not in canonical form.

You can enable the **serde1** feature in your _Cargo.toml_ file like so:

```toml
[dependencies]
intervalmap = { version = "0.1", features = ["serde1"] }
```

You can similarly enable support for _quickcheck_ by enabling
the **quickcheck** feature, and emit _tracing_ events from
[`assign`](IntervalMap::assign) by enabling the **tracing** feature.


## Building without the Rust standard library

This crate can work without the full standard library available
(e.g. when running on bare metal without an operating system)
but relies on the presence of a global allocator &mdash;
i.e. it links the `core` and `alloc` crates, but not `std`.


[`IntervalMap`]: crate::IntervalMap
[`Ord`]: core::cmp::Ord

*/

#![no_std]
extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod canonical;
pub mod map;

#[cfg(test)]
mod dense;

pub use canonical::CanonicalFormError;
pub use map::IntervalMap;
