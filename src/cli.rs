/*
 * cli.rs -- Terminal helpers and command parsing
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

use crossterm::{cursor, terminal, ExecutableCommand};
use std::fmt;
use std::io::{self, stdout, BufRead, Write};
use std::str::FromStr;

pub fn cls() -> io::Result<()> {
    stdout()
        .lock()
        .execute(terminal::Clear(terminal::ClearType::All))?
        .execute(cursor::MoveTo(0, 1))?;
    Ok(())
}

pub fn show_cursor() -> io::Result<()> {
    stdout().lock().execute(cursor::Show)?;
    Ok(())
}

/// Hides the cursor until a line is read from `input`.
pub fn standby<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    out.execute(cursor::Hide)?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    out.execute(cursor::Show)?;
    Ok(())
}

pub const HELP: &str = "Commands:
    set <pos> <value>   replace the value at position <pos>
    get <pos>           print the value at position <pos>
    best                print the best subarray sum
    show                print the array and the root summary
    check               compare the answer with a linear scan
    help                print this message
    quit                leave the program
";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Set { position: usize, value: i64 },
    Get { position: usize },
    Best,
    Show,
    Check,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument,
    BadNumber(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::Unknown(s) => write!(f, "unknown command '{}' (try 'help')", s),
            Self::MissingArgument => write!(f, "missing argument (try 'help')"),
            Self::BadNumber(s) => write!(f, "'{}' is not a valid number", s),
        }
    }
}

impl std::error::Error for CommandError {}

fn number<'a, T, I>(words: &mut I) -> Result<T, CommandError>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    let word = words.next().ok_or(CommandError::MissingArgument)?;
    word.parse()
        .map_err(|_| CommandError::BadNumber(word.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let cmd = match words.next().ok_or(CommandError::Empty)? {
            "set" | "s" => Command::Set {
                position: number(&mut words)?,
                value: number(&mut words)?,
            },
            "get" | "g" => Command::Get {
                position: number(&mut words)?,
            },
            "best" | "b" => Command::Best,
            "show" => Command::Show,
            "check" | "c" => Command::Check,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standby_restores_cursor() {
        let mut input: &[u8] = b"\nset 0 1\n";
        let mut out = Vec::new();
        standby(&mut input, &mut out).unwrap();
        assert_eq!(out, b"\x1b[?25l\x1b[?25h");
        assert_eq!(input, b"set 0 1\n");
    }

    #[test]
    fn parses_set() {
        assert_eq!(
            "set 7 0".parse::<Command>(),
            Ok(Command::Set {
                position: 7,
                value: 0
            })
        );
        assert_eq!(
            "  s 2   -15 ".parse::<Command>(),
            Ok(Command::Set {
                position: 2,
                value: -15
            })
        );
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!("best".parse::<Command>(), Ok(Command::Best));
        assert_eq!("show".parse::<Command>(), Ok(Command::Show));
        assert_eq!("check".parse::<Command>(), Ok(Command::Check));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("get 3".parse::<Command>(), Ok(Command::Get { position: 3 }));
    }

    #[test]
    fn reports_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "jump 1".parse::<Command>(),
            Err(CommandError::Unknown("jump".to_string()))
        );
        assert_eq!("set 1".parse::<Command>(), Err(CommandError::MissingArgument));
        assert_eq!(
            "set -1 4".parse::<Command>(),
            Err(CommandError::BadNumber("-1".to_string()))
        );
        assert_eq!(
            "set 1 x".parse::<Command>(),
            Err(CommandError::BadNumber("x".to_string()))
        );
    }
}
