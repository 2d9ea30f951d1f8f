/*
 * main.rs -- Core application
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

extern crate clap;
extern crate crossterm;
extern crate ctrlc;
extern crate rand;
extern crate serde_json;

mod args;
mod cli;
mod session;

use clap::Parser;
use maxseg::file::load_values;
use maxseg::MaxSubarrayTree;
use rand::prelude::*;
use session::{Session, SessionArgs};
use std::error::Error;
use std::io::Write;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init(quiet: bool) -> std::io::Result<()> {
    if let Err(e) = ctrlc::set_handler(|| {
        let _ = cli::show_cursor();
        println!();
        std::process::exit(0);
    }) {
        warn!("cannot install interrupt handler: {}", e);
    }

    if !quiet {
        cli::cls()?;
        print!(
            "    MAXSEG {} -- Maximum subarray segment tree
    Copyright (C) 2022 Arnoldas Rauba

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.

{}
    Press ENTER to begin
",
            maxseg::version(),
            cli::HELP
        );
        let mut stdout = std::io::stdout();
        stdout.flush()?;
        cli::standby(&mut std::io::stdin().lock(), &mut stdout)?;
    }
    Ok(())
}

/// Draws `len` values from `[-bound, bound]`. Fails when `len` values of
/// that magnitude could overflow a sum.
fn random_values(len: usize, bound: i64, seed: Option<u64>) -> Result<Vec<i64>, String> {
    let bound = i64::try_from(bound.unsigned_abs())
        .ok()
        .filter(|b| {
            i64::try_from(len)
                .ok()
                .and_then(|n| b.checked_mul(n))
                .is_some()
        })
        .ok_or_else(|| format!("{} values bounded by {} may overflow", len, bound))?;
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    Ok((0..len).map(|_| rng.gen_range(-bound..=bound)).collect())
}

fn run(args: args::Args) -> Result<(), Box<dyn Error>> {
    init(args.quiet)?;
    let values = match (&args.inpath, args.random) {
        (Some(path), _) => load_values(path)?,
        (None, Some(len)) => random_values(len, args.bound, args.seed)?,
        (None, None) => Vec::new(),
    };
    debug!(len = values.len(), "loaded values");
    let tree = MaxSubarrayTree::new(&values)?;
    let mut session = Session::new(
        tree,
        SessionArgs {
            verify: args.verify,
        },
    );
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(stdin.lock(), &mut stdout.lock())?;
    if session.mismatches() > 0 {
        return Err(format!("{} mismatched answers", session.mismatches()).into());
    }
    Ok(())
}

fn main() {
    init_logging();
    let args = args::Args::parse();
    if let Err(e) = run(args) {
        eprintln!("maxseg: {}", e);
        std::process::exit(1);
    }
}
