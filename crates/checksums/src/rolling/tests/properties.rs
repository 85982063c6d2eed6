use super::*;

proptest! {
    #[test]
    fn incremental_value_matches_fresh_init((cap, steps) in step_sequences()) {
        let mut rolling = RollingChecksum::new(capacity(cap));
        let mut shadow: Vec<u8> = Vec::new();

        for step in steps {
            match step {
                Step::Ingest(byte) => {
                    let value = rolling.ingest(byte);
                    if shadow.len() == cap {
                        shadow.remove(0);
                    }
                    shadow.push(byte);
                    prop_assert_eq!(value, rolling.value());
                }
                Step::Eject => {
                    let expected = if shadow.is_empty() { None } else { Some(shadow.remove(0)) };
                    prop_assert_eq!(rolling.eject().ok(), expected);
                }
            }

            prop_assert!(rolling.len() <= cap);
            prop_assert_eq!(rolling.window_bytes(), shadow.clone());
            prop_assert_eq!(rolling.value(), fresh_value(cap, &shadow));
            prop_assert_eq!(rolling.digest(), RollingDigest::from_bytes(&shadow));
        }
    }

    #[test]
    fn init_equals_byte_by_byte_ingest(data in prop::collection::vec(any::<u8>(), 0..=64)) {
        let cap = data.len().max(1);
        let mut bulk = RollingChecksum::new(capacity(cap));
        bulk.init(&data).expect("fits");

        let mut incremental = RollingChecksum::new(capacity(cap));
        for &byte in &data {
            incremental.ingest(byte);
        }

        prop_assert_eq!(bulk.value(), incremental.value());
        prop_assert_eq!(bulk.window_bytes(), incremental.window_bytes());
    }

    #[test]
    fn every_window_length_round_trips(data in prop::collection::vec(any::<u8>(), 1..=48)) {
        let cap = data.len();
        let mut rolling = RollingChecksum::new(capacity(cap));
        rolling.init(&data).expect("fits");

        for removed in 1..=cap {
            rolling.eject().expect("non-empty");
            prop_assert_eq!(rolling.value(), fresh_value(cap, &data[removed..]));
        }
    }
}
