use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rbtree::{NaturalOrder, RedBlackTree};
use std::collections::BTreeMap;
use std::time::Instant;

#[test]
fn test_random_operations_match_btreemap() {
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Debug, simplelog::Config::default());

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut tree = RedBlackTree::new(NaturalOrder);
    let mut model = BTreeMap::new();

    for step in 0..5000 {
        let key: u16 = rng.gen_range(0..400);
        match rng.gen_range(0..10) {
            0..=5 => {
                let value = rng.gen::<u32>();
                assert_eq!(tree.put(key, value), model.insert(key, value), "step {}", step);
            }
            6..=8 => {
                assert_eq!(tree.remove(&key), model.remove(&key).is_some(), "step {}", step);
            }
            _ => {
                assert_eq!(tree.get(&key), model.get(&key), "step {}", step);
            }
        }
        assert_eq!(tree.len(), model.len());
    }

    assert!(tree.check_invariants());
    let ours: Vec<(u16, u32)> = tree.iter().map(|(k, v)| (*k, *v)).collect();
    let theirs: Vec<(u16, u32)> = model.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(ours, theirs);
    assert_eq!(tree.first().map(|(k, _)| *k), model.keys().next().copied());
    assert_eq!(tree.last().map(|(k, _)| *k), model.keys().next_back().copied());
}

#[test]
fn test_floor_ceiling_against_linear_scan() {
    let mut rng = StdRng::seed_from_u64(1000);

    for round in 0..1000 {
        let mut tree = RedBlackTree::new(NaturalOrder);
        let mut inserted = Vec::new();
        let count = rng.gen_range(0..40);
        for _ in 0..count {
            let key: i32 = rng.gen_range(-50..50);
            tree.put(key, round);
            inserted.push(key);
        }

        for _ in 0..10 {
            let probe: i32 = rng.gen_range(-60..60);
            let floor = inserted.iter().copied().filter(|k| *k <= probe).max();
            let ceiling = inserted.iter().copied().filter(|k| *k >= probe).min();
            assert_eq!(tree.floor(&probe).map(|(k, _)| *k), floor, "round {} probe {}", round, probe);
            assert_eq!(
                tree.ceiling(&probe).map(|(k, _)| *k),
                ceiling,
                "round {} probe {}",
                round,
                probe
            );
        }
    }
}

#[test]
fn test_insertion_vs_btreemap() {
    const TEST_SIZE: usize = 10000;

    let data: Vec<(i32, String)> = (0..TEST_SIZE)
        .map(|i| (i as i32, format!("value_{}", i)))
        .collect();

    let start = Instant::now();
    let mut btree_map = BTreeMap::new();
    for (key, value) in &data {
        btree_map.insert(*key, value.clone());
    }
    let btree_duration = start.elapsed();

    let start = Instant::now();
    let mut rb_tree = RedBlackTree::new(NaturalOrder);
    for (key, value) in &data {
        rb_tree.put(*key, value.clone());
    }
    let rb_duration = start.elapsed();

    println!("=== INSERTION PERFORMANCE vs BTreeMap ===");
    println!("std::collections::BTreeMap: {:?}", btree_duration);
    println!("RedBlackTree: {:?}", rb_duration);
    println!(
        "BTreeMap vs RedBlackTree ratio: {:.2}",
        btree_duration.as_nanos() as f64 / rb_duration.as_nanos().max(1) as f64
    );

    assert_eq!(btree_map.len(), TEST_SIZE);
    assert_eq!(rb_tree.len(), TEST_SIZE);
    assert!(rb_tree.check_invariants());
    // Sequential keys: height stays within 2 * log2(n + 1).
    assert!(rb_tree.height() <= 27, "height {}", rb_tree.height());
}

#[test]
fn test_custom_comparator_matches_sorted_vec() {
    let words = ["pear", "Apple", "fig", "banana", "Cherry", "apple", "FIG"];
    let mut tree = RedBlackTree::new(|a: &String, b: &String| {
        a.to_lowercase().cmp(&b.to_lowercase())
    });
    for word in words {
        tree.put(word.to_string(), word.len());
    }

    // Case-insensitive duplicates collapse onto one key; the first spelling
    // stays, only the value is replaced.
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.keys(), vec!["Apple", "banana", "Cherry", "fig", "pear"]);
    assert_eq!(tree.get(&"APPLE".to_string()), Some(&5));
}
