/*
 * node.rs -- Range summaries and their combinator
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

use serde::Serialize;

/// Summary of a contiguous, non-empty range of values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Total of all values in the range.
    pub sum: i64,
    /// Best sum of a prefix (at least one element).
    pub best_prefix: i64,
    /// Best sum of a suffix (at least one element).
    pub best_suffix: i64,
    /// Best sum of any contiguous sub-range (at least one element).
    pub best_sum: i64,
}

impl Node {
    pub fn leaf(value: i64) -> Node {
        Node {
            sum: value,
            best_prefix: value,
            best_suffix: value,
            best_sum: value,
        }
    }

    /// Combines the summary of a range with the summary of the range
    /// immediately following it.
    pub fn merge(self, rhs: Node) -> Node {
        Node {
            sum: self.sum + rhs.sum,
            best_prefix: self.best_prefix.max(self.sum + rhs.best_prefix),
            best_suffix: rhs.best_suffix.max(rhs.sum + self.best_suffix),
            best_sum: self
                .best_sum
                .max(rhs.best_sum)
                .max(self.best_suffix + rhs.best_prefix),
        }
    }
}

pub fn merge(left: Node, right: Node) -> Node {
    left.merge(right)
}
