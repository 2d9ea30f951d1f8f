/*
 * session.rs -- Interactive session over a tree
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

use crate::cli::{Command, HELP};
use maxseg::kadane::max_subarray;
use maxseg::{magnitude_sum, MaxSubarrayTree, TreeError};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

pub struct SessionArgs {
    /// Compare every answer against a linear scan of the array.
    pub verify: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub struct Session {
    pub tree: MaxSubarrayTree,
    pub args: SessionArgs,
    mismatches: usize,
}

impl Session {
    pub fn new(tree: MaxSubarrayTree, args: SessionArgs) -> Session {
        Session {
            tree,
            args,
            mismatches: 0,
        }
    }

    pub fn mismatches(&self) -> usize {
        self.mismatches
    }

    /// Whether the array with `value` at `position` keeps every sum in `i64`.
    fn fits(&self, position: usize, value: i64) -> bool {
        let values = self.tree.values().iter().enumerate();
        magnitude_sum(values.map(|(i, &v)| if i == position { value } else { v })).is_some()
    }

    /// Writes the tree answer, plus the reference answer when they differ.
    fn check<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let best = self.tree.query_max_subarray();
        match max_subarray(self.tree.values()) {
            Some(expected) if expected == best => writeln!(out, "ok: {}", best),
            expected => {
                self.mismatches += 1;
                warn!(best, ?expected, "tree disagrees with linear scan");
                writeln!(out, "MISMATCH: tree {} vs scan {:?}", best, expected)
            }
        }
    }

    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<Flow> {
        match cmd {
            Command::Set { position, value } if !self.fits(position, value) => {
                writeln!(out, "error: {} would make sums overflow", value)?
            }
            Command::Set { position, value } => match self.tree.update(position, value) {
                Ok(()) => {
                    info!(position, value, "set");
                    if self.args.verify {
                        self.check(out)?;
                    } else {
                        writeln!(out, "{}", self.tree.query_max_subarray())?;
                    }
                }
                Err(e) => writeln!(out, "error: {}", e)?,
            },
            Command::Get { position } => match self.tree.value_at(position) {
                Some(v) => writeln!(out, "{}", v)?,
                None => {
                    let len = self.tree.len();
                    writeln!(out, "error: {}", TreeError::OutOfRange { position, len })?
                }
            },
            Command::Best => writeln!(out, "{}", self.tree.query_max_subarray())?,
            Command::Show => {
                writeln!(out, "{:?}", self.tree.values())?;
                let root = serde_json::to_string(&self.tree.root())
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
                writeln!(out, "{}", root)?;
            }
            Command::Check => self.check(out)?,
            Command::Help => write!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    /// Reads commands line by line until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(cmd) => {
                    if self.execute(cmd, out)? == Flow::Stop {
                        break;
                    }
                }
                Err(e) => writeln!(out, "error: {}", e)?,
            }
            out.flush()?;
        }
        Ok(())
    }
}
