/*
 * kadane.rs -- Linear scan reference for the best subarray sum
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

/// Best sum of a non-empty contiguous subarray, or `None` for an empty slice.
pub fn max_subarray(values: &[i64]) -> Option<i64> {
    let (&first, rest) = values.split_first()?;
    let mut current = first;
    let mut best = first;
    for &v in rest {
        current = current.max(0) + v;
        best = best.max(current);
    }
    Some(best)
}
