// Copyright 2026 Llrbmap Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structural invariant tests
//!
//! Drives the map through deterministic and randomized operation
//! sequences, re-checking the red-black invariants, the balance bound,
//! and the alive/node count relationships after every batch.

use rand::Rng;

use llrbmap::{verify, LlrbMap};

/// Red-black balance bound: height never exceeds 2·log2(n + 1).
fn assert_height_bound(map: &LlrbMap<i32, i32>) {
    let nodes = map.num_nodes();
    if nodes == 0 {
        assert_eq!(map.height(), -1);
        return;
    }
    let bound = 2.0 * ((nodes + 1) as f64).log2();
    assert!(
        (map.height() as f64) <= bound,
        "height {} exceeds bound {:.2} for {} nodes",
        map.height(),
        bound,
        nodes
    );
}

fn assert_counts_consistent(map: &LlrbMap<i32, i32>) {
    assert!(map.len() <= map.num_nodes());
    assert_eq!(map.iter().count(), map.len());
    assert_eq!(map.iter_structural().count(), map.num_nodes());
    assert_eq!(map.iter_level_order().count(), map.num_nodes());
}

fn assert_sorted(map: &LlrbMap<i32, i32>) {
    let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]), "unsorted: {:?}", keys);

    let structural: Vec<i32> = map.iter_structural().map(|n| *n.key()).collect();
    assert!(structural.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_ascending_inserts_stay_balanced() {
    let mut map = LlrbMap::new();
    for i in 0..1000 {
        map.insert(i, i);
    }
    assert_eq!(verify::check(&map), Ok(()));
    assert_height_bound(&map);
    assert!(map.height() <= 20);
}

#[test]
fn test_descending_inserts_stay_balanced() {
    let mut map = LlrbMap::new();
    for i in (0..1000).rev() {
        map.insert(i, i);
    }
    assert_eq!(verify::check(&map), Ok(()));
    assert_height_bound(&map);
    assert!(map.height() <= 20);
}

#[test]
fn test_tombstones_preserve_structure() {
    let mut map = LlrbMap::new();
    for i in 0..200 {
        map.insert(i, i);
    }
    let height_before = map.height();
    let nodes_before = map.num_nodes();

    for i in (0..200).step_by(3) {
        map.erase(&i);
    }

    // Erasure is purely logical: the physical tree is untouched.
    assert_eq!(map.height(), height_before);
    assert_eq!(map.num_nodes(), nodes_before);
    assert_eq!(verify::check(&map), Ok(()));
    assert_counts_consistent(&map);
    assert_sorted(&map);
}

#[test]
fn test_rehash_restores_compactness() {
    let mut map = LlrbMap::new();
    for i in 0..500 {
        map.insert(i, i);
    }
    for i in 100..400 {
        map.erase(&i);
    }
    map.rehash();

    assert_eq!(map.len(), map.num_nodes());
    assert_eq!(map.len(), 200);
    assert_eq!(verify::check(&map), Ok(()));
    assert_height_bound(&map);
}

#[test]
fn test_random_operation_stress() {
    let mut rng = rand::rng();
    let mut map = LlrbMap::new();
    let mut shadow = std::collections::BTreeMap::new();

    for round in 0..50 {
        for _ in 0..100 {
            let key: i32 = rng.random_range(0..500);
            match rng.random_range(0..10) {
                0..=4 => {
                    let value = rng.random_range(0..1_000_000);
                    map.insert(key, value);
                    shadow.insert(key, value);
                }
                5..=7 => {
                    map.erase(&key);
                    shadow.remove(&key);
                }
                8 => {
                    assert_eq!(map.get(&key), shadow.get(&key), "key {}", key);
                }
                _ => {
                    let value = rng.random_range(0..1_000_000);
                    *map.get_or_default(&key) = value;
                    shadow.insert(key, value);
                }
            }
        }

        if round % 10 == 9 {
            map.rehash();
            assert_eq!(map.len(), map.num_nodes());
        }

        assert_eq!(verify::check(&map), Ok(()), "round {}", round);
        assert_counts_consistent(&map);
        assert_sorted(&map);
        assert_height_bound(&map);
        assert_eq!(map.len(), shadow.len(), "round {}", round);

        let got: Vec<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let want: Vec<(i32, i32)> = shadow.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(got, want, "round {}", round);
    }
}

#[test]
fn test_reverse_iteration_mirrors_forward() {
    let mut rng = rand::rng();
    let mut map = LlrbMap::new();
    for _ in 0..300 {
        let key: i32 = rng.random_range(0..1000);
        map.insert(key, key);
    }
    for _ in 0..100 {
        let key: i32 = rng.random_range(0..1000);
        map.erase(&key);
    }

    let mut forward: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
    forward.reverse();
    let backward: Vec<i32> = map.iter_rev().map(|(k, _)| *k).collect();
    assert_eq!(forward, backward);
}

#[test]
fn test_clone_equality_under_stress() {
    let mut rng = rand::rng();
    let mut map = LlrbMap::new();
    for _ in 0..200 {
        map.insert(rng.random_range(0..300), rng.random_range(0..100));
    }
    for _ in 0..80 {
        map.erase(&rng.random_range(0..300));
    }

    let copy = map.clone();
    assert_eq!(copy, map);
    assert_eq!(copy.num_nodes(), map.num_nodes());
    assert_eq!(verify::check(&copy), Ok(()));

    // Compaction changes structure but not content.
    map.rehash();
    assert_eq!(copy, map);
}
