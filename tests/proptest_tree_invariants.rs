/*
 * proptest_tree_invariants.rs -- Property tests for the segment tree
 * Copyright (C) 2022 Arnoldas Rauba
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 *
 */

use maxseg::kadane::max_subarray;
use maxseg::{merge, MaxSubarrayTree, Node, TreeError};
use proptest::prelude::*;

fn values_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..=50, 1..=20)
}

/// Quadratic scan over every non-empty subarray.
fn brute_force(values: &[i64]) -> i64 {
    let mut best = i64::MIN;
    for i in 0..values.len() {
        let mut sum = 0;
        for &v in &values[i..] {
            sum += v;
            best = best.max(sum);
        }
    }
    best
}

fn summarize(values: &[i64]) -> Node {
    values.iter().map(|&v| Node::leaf(v)).reduce(merge).unwrap()
}

proptest! {
    #[test]
    fn construct_matches_brute_force(values in values_strategy()) {
        let tree = MaxSubarrayTree::new(&values).unwrap();
        prop_assert_eq!(tree.query_max_subarray(), brute_force(&values));
        prop_assert_eq!(Some(tree.query_max_subarray()), max_subarray(&values));
    }

    #[test]
    fn root_summarizes_whole_array(values in values_strategy()) {
        let tree = MaxSubarrayTree::new(&values).unwrap();
        prop_assert_eq!(tree.root(), summarize(&values));
    }

    #[test]
    fn updates_match_brute_force(
        values in values_strategy(),
        updates in prop::collection::vec((0usize..20, -50i64..=50), 0..30),
    ) {
        let mut tree = MaxSubarrayTree::new(&values).unwrap();
        let mut model = values.clone();
        for (pos, v) in updates {
            let pos = pos % model.len();
            tree.update(pos, v).unwrap();
            model[pos] = v;
            prop_assert_eq!(tree.values(), &model[..]);
            prop_assert_eq!(tree.query_max_subarray(), brute_force(&model));
        }
    }

    #[test]
    fn update_is_idempotent(values in values_strategy(), pos in 0usize..20, v in -50i64..=50) {
        let pos = pos % values.len();
        let mut once = MaxSubarrayTree::new(&values).unwrap();
        once.update(pos, v).unwrap();
        let mut twice = once.clone();
        twice.update(pos, v).unwrap();
        prop_assert_eq!(once.root(), twice.root());
        prop_assert_eq!(once.values(), twice.values());
    }

    #[test]
    fn out_of_range_is_rejected(values in values_strategy(), extra in 0usize..5, v in -50i64..=50) {
        let mut tree = MaxSubarrayTree::new(&values).unwrap();
        let root = tree.root();
        let position = values.len() + extra;
        prop_assert_eq!(
            tree.update(position, v),
            Err(TreeError::OutOfRange { position, len: values.len() })
        );
        prop_assert_eq!(tree.root(), root);
        prop_assert_eq!(tree.values(), &values[..]);
    }

    #[test]
    fn merge_bracketing_does_not_matter(
        values in prop::collection::vec(-50i64..=50, 3..=20),
        cut_a in 1usize..20,
        cut_b in 1usize..20,
    ) {
        let n = values.len();
        let a = 1 + cut_a % (n - 2);
        let b = a + 1 + cut_b % (n - a - 1);
        let (x, y, z) = (
            summarize(&values[..a]),
            summarize(&values[a..b]),
            summarize(&values[b..]),
        );
        prop_assert_eq!(merge(merge(x, y), z), merge(x, merge(y, z)));
        prop_assert_eq!(merge(merge(x, y), z), summarize(&values));
    }
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(MaxSubarrayTree::new(&[]).unwrap_err(), TreeError::EmptyInput);
}
