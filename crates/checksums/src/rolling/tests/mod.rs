use super::*;

use proptest::prelude::*;
use std::num::NonZeroUsize;

mod checksum;
mod properties;

fn capacity(value: usize) -> NonZeroUsize {
    NonZeroUsize::new(value).expect("non-zero capacity")
}

fn fresh_value(capacity_bytes: usize, contents: &[u8]) -> u32 {
    let mut fresh = RollingChecksum::new(capacity(capacity_bytes));
    fresh.init(contents).expect("contents fit the window");
    fresh.value()
}

/// One step applied to a rolling checksum in property tests.
#[derive(Clone, Debug)]
enum Step {
    Ingest(u8),
    Eject,
}

fn step_sequences() -> impl Strategy<Value = (usize, Vec<Step>)> {
    let step = prop_oneof![
        3 => any::<u8>().prop_map(Step::Ingest),
        1 => Just(Step::Eject),
    ];
    (1usize..=32, prop::collection::vec(step, 0..=256))
}
