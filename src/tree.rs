/*
 * tree.rs -- Segment tree answering maximum subarray queries
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

use crate::error::TreeError;
use crate::node::Node;
use tracing::{debug, trace};

const ROOT: usize = 1;

fn left_child_index(idx: usize) -> usize {
    idx << 1
}

fn right_child_index(idx: usize) -> usize {
    (idx << 1) | 1
}

fn midpoint(left: usize, right: usize) -> usize {
    left + (right - left) / 2
}

/// Total of absolute values, or `None` if it does not fit in `i64`.
/// No sum computed by the tree can exceed it.
pub fn magnitude_sum<I>(values: I) -> Option<i64>
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().try_fold(0i64, |acc, v| {
        i64::try_from(v.unsigned_abs())
            .ok()
            .and_then(|m| acc.checked_add(m))
    })
}

/// Segment tree over a fixed-length array which keeps the best
/// contiguous subarray sum up to date under point updates.
///
/// Node `i` covers a range split in half between nodes `2i` and `2i + 1`;
/// node 1 covers the whole array.
///
/// Sums are plain `i64`, so the absolute values of the elements must add up
/// to at most `i64::MAX` (see `magnitude_sum`).
#[derive(Clone, Debug)]
pub struct MaxSubarrayTree {
    // slots outside the 2n - 1 reachable nodes keep `Node::default()`
    // and are never read
    nodes: Vec<Node>,
    values: Vec<i64>,
}

impl MaxSubarrayTree {
    pub fn new(values: &[i64]) -> Result<MaxSubarrayTree, TreeError> {
        if values.is_empty() {
            return Err(TreeError::EmptyInput);
        }
        let n = values.len();
        let mut tree = MaxSubarrayTree {
            nodes: vec![Node::default(); 4 * n],
            values: values.to_vec(),
        };
        tree.build(ROOT, 0, n - 1);
        debug!(len = n, best = tree.query_max_subarray(), "built tree");
        Ok(tree)
    }

    fn build(&mut self, idx: usize, left: usize, right: usize) {
        if left == right {
            self.nodes[idx] = Node::leaf(self.values[left]);
        } else {
            let mid = midpoint(left, right);
            self.build(left_child_index(idx), left, mid);
            self.build(right_child_index(idx), mid + 1, right);
            self.pull(idx);
        }
    }

    fn pull(&mut self, idx: usize) {
        let left = self.nodes[left_child_index(idx)];
        let right = self.nodes[right_child_index(idx)];
        self.nodes[idx] = left.merge(right);
    }

    /// Replaces the value at `position`. Nothing changes when the
    /// position is out of range.
    pub fn update(&mut self, position: usize, value: i64) -> Result<(), TreeError> {
        let len = self.len();
        if position >= len {
            return Err(TreeError::OutOfRange { position, len });
        }
        self.values[position] = value;
        self.update_inner(ROOT, 0, len - 1, position, value);
        trace!(position, value, best = self.query_max_subarray(), "updated");
        Ok(())
    }

    fn update_inner(&mut self, idx: usize, left: usize, right: usize, pos: usize, value: i64) {
        if left == right {
            self.nodes[idx] = Node::leaf(value);
        } else {
            let mid = midpoint(left, right);
            if pos <= mid {
                self.update_inner(left_child_index(idx), left, mid, pos, value);
            } else {
                self.update_inner(right_child_index(idx), mid + 1, right, pos, value);
            }
            self.pull(idx);
        }
    }

    /// Best sum of a non-empty contiguous subarray of the whole array.
    pub fn query_max_subarray(&self) -> i64 {
        self.nodes[ROOT].best_sum
    }

    pub fn root(&self) -> Node {
        self.nodes[ROOT]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; a tree cannot be built over an empty array.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value_at(&self, position: usize) -> Option<i64> {
        self.values.get(position).copied()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }
}
