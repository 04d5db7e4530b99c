#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use intervalmap::IntervalMap;

#[derive(Clone, Debug, Arbitrary)]
struct Assign {
    key_begin: u8,
    key_end: u8,
    value: u8,
}

fuzz_target!(|input: (u8, Vec<Assign>)| {
    let (base, assigns) = input;
    let mut map = IntervalMap::new(base);

    for assign in assigns {
        map.assign(assign.key_begin, assign.key_end, assign.value);
    }

    let mut previous = map.base_value();
    for (_key, value) in map.breakpoints() {
        if value == previous {
            panic!()
        }
        previous = value;
    }
});
