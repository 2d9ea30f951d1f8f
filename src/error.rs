/*
 * error.rs -- Errors reported by the tree
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

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// The tree was constructed from an empty sequence.
    EmptyInput,
    /// An update addressed a position past the end of the array.
    OutOfRange { position: usize, len: usize },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "cannot build a tree over an empty array"),
            Self::OutOfRange { position, len } => {
                write!(f, "position {} is out of range for length {}", position, len)
            }
        }
    }
}

impl std::error::Error for TreeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            TreeError::EmptyInput.to_string(),
            "cannot build a tree over an empty array"
        );
        assert_eq!(
            TreeError::OutOfRange {
                position: 9,
                len: 4
            }
            .to_string(),
            "position 9 is out of range for length 4"
        );
    }
}
