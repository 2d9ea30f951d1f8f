/*
 * args.rs -- Command line arguments
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

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// The path to a JSON-formatted input file:
    ///   {"version": 1, "data": [..integers..]}
    /// (for example data/sample.json)
    #[clap(required_unless_present = "random", conflicts_with = "random")]
    pub inpath: Option<PathBuf>,

    /// Generate an array of the given length instead of reading a file.
    #[clap(short, long)]
    pub random: Option<usize>,

    /// Generated values are drawn from [-bound, bound].
    #[clap(short, long, default_value_t = 10)]
    pub bound: i64,

    /// Seed for generated values.
    /// If the flag is not specified, a random seed is used.
    #[clap(short, long)]
    pub seed: Option<u64>,

    /// Compare every answer against a linear scan of the array.
    #[clap(short, long)]
    pub verify: bool,

    /// Do not print the banner or clear the screen.
    #[clap(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_input_path() {
        let args = Args::try_parse_from(["maxseg", "input.json", "--verify"]).unwrap();
        assert_eq!(args.inpath, Some(PathBuf::from("input.json")));
        assert!(args.verify);
        assert_eq!(args.bound, 10);
    }

    #[test]
    fn parses_random_mode() {
        let args =
            Args::try_parse_from(["maxseg", "--random", "16", "--bound", "5", "--seed", "7"])
                .unwrap();
        assert_eq!(args.inpath, None);
        assert_eq!(args.random, Some(16));
        assert_eq!(args.bound, 5);
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn needs_some_input() {
        assert!(Args::try_parse_from(["maxseg"]).is_err());
        assert!(Args::try_parse_from(["maxseg", "in.json", "--random", "3"]).is_err());
    }
}
