use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use intervalmap::*;
use proptest::{prelude::*, strategy::ValueTree, test_runner::TestRunner};
use std::{any::type_name, fmt::Debug};
use test_strategy::Arbitrary;

type Key = i64;
type Value = i64;

const COUNT: usize = 100000;
const OPERATIONS: usize = 100000;
const LOOKUPS: usize = 1000000;

#[derive(Debug, Clone, Arbitrary)]
enum Operation<K, V> {
    Assign(K, K, V),
    Lookup(K),
}

fn interval_map<K: Ord + Debug + Clone, V: Eq + Clone + Debug>(
    base: V,
    values: impl Strategy<Value = (K, K, V)>,
    size: usize,
) -> impl Strategy<Value = IntervalMap<K, V>> {
    prop::collection::vec(values, size).prop_map(move |assignments| {
        let mut map = IntervalMap::new(base.clone());
        for (key_begin, key_end, value) in assignments {
            map.assign(key_begin, key_end, value);
        }
        map
    })
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut runner = TestRunner::deterministic();

    let mut group = c.benchmark_group(format!(
        "IntervalMap<{}, {}>",
        type_name::<Key>(),
        type_name::<Value>()
    ));

    group.throughput(Throughput::Elements(COUNT as u64));
    group.bench_function("assign", |b| {
        let entries = prop::collection::vec(any::<(Key, Key, Value)>(), COUNT)
            .new_tree(&mut runner)
            .unwrap()
            .current();
        b.iter_with_large_drop(|| {
            let mut map = IntervalMap::new(0);
            for (key_begin, key_end, value) in entries.clone().into_iter() {
                map.assign(key_begin, key_end, value);
            }
            map
        })
    });

    group.throughput(Throughput::Elements(OPERATIONS as u64));
    group.bench_function("operations", |b| {
        let map = interval_map(0, any::<(Key, Key, Value)>(), COUNT)
            .new_tree(&mut runner)
            .unwrap()
            .current();
        let operations = prop::collection::vec(any::<Operation<Key, Value>>(), OPERATIONS)
            .new_tree(&mut runner)
            .unwrap()
            .current();
        b.iter_with_large_drop(|| {
            let mut map = map.clone();
            for operation in operations.clone().into_iter() {
                match operation {
                    Operation::Assign(key_begin, key_end, value) => {
                        map.assign(key_begin, key_end, value)
                    }
                    Operation::Lookup(key) => {
                        black_box(map.get(&key));
                    }
                }
            }
            map
        })
    });

    group.throughput(Throughput::Elements(LOOKUPS as u64));
    group.bench_function("lookups", |b| {
        let map = interval_map(0, any::<(Key, Key, Value)>(), COUNT)
            .new_tree(&mut runner)
            .unwrap()
            .current();
        let lookups = prop::collection::vec(any::<Key>(), LOOKUPS)
            .new_tree(&mut runner)
            .unwrap()
            .current();
        b.iter(|| {
            for lookup in lookups.iter() {
                black_box(map.get(lookup));
            }
        })
    });

    group.bench_function("runs", |b| {
        let map = interval_map(0, any::<(Key, Key, Value)>(), COUNT)
            .new_tree(&mut runner)
            .unwrap()
            .current();
        b.iter(|| black_box(map.runs().count()))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
