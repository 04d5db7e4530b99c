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
    // Every `u8` key, plus one slot standing in for 256 and beyond.
    let mut dense = vec![base; 257];

    for assign in assigns {
        map.assign(assign.key_begin as u16, assign.key_end as u16, assign.value);
        for key in assign.key_begin..assign.key_end {
            dense[key as usize] = assign.value;
        }
    }

    for key in 0..=256u16 {
        assert_eq!(*map.get(&key), dense[key as usize]);
    }
});
