#![allow(dead_code)]

use byteset::{fnv1a, ByteSet};

/// The first `n` four-byte keys whose home slot is `home` in a table of
/// `capacity` slots.
pub fn keys_with_home(capacity: usize, home: usize, n: usize) -> Vec<[u8; 4]> {
    (0u32..)
        .map(u32::to_le_bytes)
        .filter(|key| fnv1a(key) as usize % capacity == home)
        .take(n)
        .collect()
}

/// Checks that every stored item is reachable from its home slot through an
/// unbroken run of occupied slots no longer than `max_probes`, and that the
/// slot count agrees with `len`.
pub fn assert_probe_invariant(set: &ByteSet) {
    let capacity = set.capacity();
    let mut occupied = 0;

    for index in 0..capacity {
        let Some(item) = set.slot(index) else {
            continue;
        };
        occupied += 1;

        let home = set.home_slot(item);
        let distance = (index + capacity - home) % capacity;
        assert!(
            distance < set.max_probes(),
            "item in slot {index} is {distance} slots from home {home}, max_probes {}",
            set.max_probes()
        );
        for step in 0..distance {
            assert!(
                set.is_slot_occupied((home + step) % capacity),
                "gap at slot {} breaks the probe path of slot {index}",
                (home + step) % capacity
            );
        }
        assert!(set.contains(item));
    }

    assert_eq!(occupied, set.len());
}
