/*
 * lib.rs -- Maximum subarray segment tree library
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

extern crate json;
extern crate serde;
extern crate tracing;

pub mod error;
pub mod file;
pub mod kadane;
pub mod node;
pub mod tree;

pub use error::TreeError;
pub use node::{merge, Node};
pub use tree::{magnitude_sum, MaxSubarrayTree};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
