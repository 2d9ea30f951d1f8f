/*
 * file.rs -- Loading input arrays
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

use crate::tree::magnitude_sum;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const FORMAT_VERSION: i32 = 1;

#[derive(Debug)]
pub enum FileError {
    Io(std::io::Error),
    Parse(json::Error),
    UnsupportedVersion,
    /// `data` is missing or is not an array.
    NoData,
    /// Element at `index` is not an integer.
    BadValue { index: usize },
    /// Absolute values add up to more than `i64::MAX`.
    TooLarge,
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read input: {}", e),
            Self::Parse(e) => write!(f, "malformed JSON: {}", e),
            Self::UnsupportedVersion => {
                write!(f, "unsupported input version (expected {})", FORMAT_VERSION)
            }
            Self::NoData => write!(f, "input has no \"data\" array"),
            Self::BadValue { index } => write!(f, "data[{}] is not an integer", index),
            Self::TooLarge => {
                write!(f, "values are too large to be summed without overflow")
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FileError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<json::Error> for FileError {
    fn from(e: json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Parses a document of the form `{"version": 1, "data": [..]}`.
pub fn parse_values(text: &str) -> Result<Vec<i64>, FileError> {
    let input = json::parse(text)?;
    if input["version"] != FORMAT_VERSION {
        return Err(FileError::UnsupportedVersion);
    }
    let data = &input["data"];
    if !data.is_array() {
        return Err(FileError::NoData);
    }
    let values = data
        .members()
        .enumerate()
        .map(|(index, x)| x.as_i64().ok_or(FileError::BadValue { index }))
        .collect::<Result<Vec<i64>, FileError>>()?;
    if magnitude_sum(values.iter().copied()).is_none() {
        return Err(FileError::TooLarge);
    }
    Ok(values)
}

pub fn load_values(path: &Path) -> Result<Vec<i64>, FileError> {
    let mut file_data = String::new();
    File::open(path)?.read_to_string(&mut file_data)?;
    parse_values(&file_data)
}
