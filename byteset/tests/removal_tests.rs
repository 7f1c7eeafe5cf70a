mod common;

use byteset::ByteSet;
use common::{assert_probe_invariant, keys_with_home};

const CAPACITY: usize = 16;

fn set_with(items: &[[u8; 4]]) -> ByteSet {
    let mut set = ByteSet::new(4, CAPACITY).unwrap();
    for item in items {
        set.insert(item).unwrap();
    }
    assert_eq!(set.capacity(), CAPACITY);
    assert_eq!(set.len(), items.len());
    set
}

#[test]
fn test_shift_back_whole_cluster() {
    let home3 = keys_with_home(CAPACITY, 3, 3);
    let home4 = keys_with_home(CAPACITY, 4, 1);
    let (a, b, d) = (home3[0], home3[1], home3[2]);
    let c = home4[0];

    // a@3 b@4 c@5 d@6
    let mut set = set_with(&[a, b, c, d]);
    assert_eq!(set.slot(3), Some(&a[..]));
    assert_eq!(set.slot(6), Some(&d[..]));

    assert!(set.remove(&a).unwrap());

    assert_eq!(set.slot(3), Some(&b[..]));
    assert_eq!(set.slot(4), Some(&c[..]));
    assert_eq!(set.slot(5), Some(&d[..]));
    assert_eq!(set.slot(6), None);
    assert_probe_invariant(&set);
}

#[test]
fn test_candidate_at_home_stays() {
    let a = keys_with_home(CAPACITY, 3, 1)[0];
    let b = keys_with_home(CAPACITY, 4, 1)[0];

    let mut set = set_with(&[a, b]);
    assert!(set.remove(&a).unwrap());

    assert_eq!(set.slot(3), None);
    assert_eq!(set.slot(4), Some(&b[..]));
    assert!(set.contains(&b));
    assert_probe_invariant(&set);
}

#[test]
fn test_skip_unmovable_then_move_later() {
    let home3 = keys_with_home(CAPACITY, 3, 2);
    let home4 = keys_with_home(CAPACITY, 4, 1);
    let (a, c) = (home3[0], home3[1]);
    let b = home4[0];

    // a@3 b@4 (home) c@5 (home 3): b cannot move, c can
    let mut set = set_with(&[a, b, c]);
    assert_eq!(set.slot(5), Some(&c[..]));

    assert!(set.remove(&a).unwrap());

    assert_eq!(set.slot(3), Some(&c[..]));
    assert_eq!(set.slot(4), Some(&b[..]));
    assert_eq!(set.slot(5), None);
    assert_probe_invariant(&set);
}

#[test]
fn test_shift_across_wraparound() {
    let home15 = keys_with_home(CAPACITY, 15, 3);
    let home0 = keys_with_home(CAPACITY, 0, 1);
    let (a, b, d) = (home15[0], home15[1], home15[2]);
    let c = home0[0];

    // a@15 b@0 c@1 d@2
    let mut set = set_with(&[a, b, c, d]);
    assert_eq!(set.slot(15), Some(&a[..]));
    assert_eq!(set.slot(0), Some(&b[..]));
    assert_eq!(set.slot(1), Some(&c[..]));
    assert_eq!(set.slot(2), Some(&d[..]));

    assert!(set.remove(&a).unwrap());

    assert_eq!(set.slot(15), Some(&b[..]));
    assert_eq!(set.slot(0), Some(&c[..]));
    assert_eq!(set.slot(1), Some(&d[..]));
    assert_eq!(set.slot(2), None);
    assert_probe_invariant(&set);
}

#[test]
fn test_hole_after_wraparound() {
    let home14 = keys_with_home(CAPACITY, 14, 4);
    let home1 = keys_with_home(CAPACITY, 1, 1);

    // 14,15,0,1 hold home-14 items, the home-1 item spills to 2
    let mut items = home14.clone();
    items.push(home1[0]);
    let mut set = set_with(&items);
    assert_eq!(set.slot(2), Some(&home1[0][..]));

    // removing the item at slot 0 leaves the hole before the candidate
    assert!(set.remove(&home14[2]).unwrap());

    assert_eq!(set.slot(0), Some(&home14[3][..]));
    assert_eq!(set.slot(1), Some(&home1[0][..]));
    assert_eq!(set.slot(2), None);
    assert_probe_invariant(&set);
}

/// Builds clusters from the given home slots, then removes every member in
/// turn from a fresh copy and checks all remaining members.
fn remove_each_member(homes: &[usize]) {
    let mut used = vec![0; CAPACITY];
    let items: Vec<[u8; 4]> = homes
        .iter()
        .map(|&home| {
            used[home] += 1;
            keys_with_home(CAPACITY, home, used[home])[used[home] - 1]
        })
        .collect();

    let original = set_with(&items);
    assert_probe_invariant(&original);

    for (removed_index, removed) in items.iter().enumerate() {
        let mut set = original.clone();
        assert!(set.remove(removed).unwrap());
        assert!(!set.contains(removed));
        assert_eq!(set.len(), items.len() - 1);

        for (i, item) in items.iter().enumerate() {
            if i != removed_index {
                assert!(
                    set.contains(item),
                    "homes {homes:?}: removing #{removed_index} lost #{i}"
                );
            }
        }
        assert_probe_invariant(&set);
    }
}

#[test]
fn test_remove_each_member_of_wrapping_clusters() {
    remove_each_member(&[14, 14, 15, 15, 0, 14, 1, 15, 0, 2]);
    remove_each_member(&[15, 15, 15, 15, 15, 15, 15, 15, 15, 15]);
    remove_each_member(&[0, 15, 0, 15, 1, 14, 13, 1]);
    remove_each_member(&[15, 1, 0, 15, 2, 2, 0]);
}

#[test]
fn test_remove_each_member_of_interior_clusters() {
    remove_each_member(&[3, 3, 4, 3, 5, 7, 7, 4, 6]);
    remove_each_member(&[8, 9, 10, 8, 9, 10]);
    remove_each_member(&[5, 5, 5, 6, 6, 6, 11, 11, 12, 12]);
}

#[test]
fn test_drain_in_every_rotation() {
    let homes = [14, 15, 15, 0, 14, 1, 0, 15, 2, 14];
    let mut used = vec![0; CAPACITY];
    let items: Vec<[u8; 4]> = homes
        .iter()
        .map(|&home: &usize| {
            used[home] += 1;
            keys_with_home(CAPACITY, home, used[home])[used[home] - 1]
        })
        .collect();

    for start in 0..items.len() {
        let mut set = set_with(&items);
        let order: Vec<usize> = (0..items.len())
            .map(|step| (start + step) % items.len())
            .collect();

        for (removed_count, &victim) in order.iter().enumerate() {
            assert!(set.remove(&items[victim]).unwrap());
            assert_probe_invariant(&set);
            for &still_present in &order[removed_count + 1..] {
                assert!(set.contains(&items[still_present]));
            }
        }
        assert!(set.is_empty());
        assert!(set.occupancy().iter().all(|&b| b == 0));
    }
}
