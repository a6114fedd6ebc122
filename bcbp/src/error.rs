// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error;
use std::fmt;
use std::io;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The input doesn't start with the format code `M`.
    InvalidFormatCode {
        found: Option<char>,
    },
    /// The character after the format code isn't a decimal digit.
    InvalidLegCount {
        found: Option<char>,
    },
    /// The number of legs found differs from the declared number of legs.
    LegCountMismatch {
        declared: usize,
        actual: usize,
    },
    /// The input is too short to read a field at its fixed position.
    FieldExtraction {
        field: &'static str,
        offset: usize,
        length: usize,
        actual: usize,
    },
    /// A leg of an itinerary failed to parse.
    Leg {
        index: usize,
        raw: String,
        source: Box<Error>,
    },
    /// The date of flight can't be converted to a calendar date.
    InvalidDate {
        value: String,
    },
    NotANumber {
        field: &'static str,
        value: String,
    },
    /// A numeric value contains something else than digits.
    InvalidNumber {
        value: String,
    },
    InvalidUri {
        uri: String,
        reason: String,
    },
    UnknownScheme {
        scheme: String,
    },
    DuplicateScheme {
        scheme: String,
    },
    /// An error reported by a barcode implementation.
    Barcode(String),
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormatCode { found: Some(c) } => {
                write!(f, "BCBP string must start with M but starts with \"{c}\"")
            }
            Self::InvalidFormatCode { found: None } => {
                write!(f, "BCBP string must start with M but is empty")
            }
            Self::InvalidLegCount { found: Some(c) } => {
                write!(f, "number of legs should be a digit but is \"{c}\"")
            }
            Self::InvalidLegCount { found: None } => {
                write!(f, "number of legs is missing")
            }
            Self::LegCountMismatch { declared, actual } => {
                write!(
                    f,
                    "BCBP string declares {declared} leg(s) but contains {actual}"
                )
            }
            Self::FieldExtraction {
                field,
                offset,
                length,
                actual,
            } => {
                write!(
                    f,
                    "{field} needs {length} byte at offset {offset} but the leg is {actual} byte long"
                )
            }
            Self::Leg { index, raw, source } => {
                write!(f, "failed to parse leg at offset {index} ({raw}): {source}")
            }
            Self::InvalidDate { value } => {
                write!(f, "date of flight \"{value}\" is not a valid Julian day")
            }
            Self::NotANumber { field, value } => {
                write!(f, "{field} should be a number but is \"{value}\"")
            }
            Self::InvalidNumber { value } => {
                write!(f, "\"{value}\" is not a number")
            }
            Self::InvalidUri { uri, reason } => write!(f, "invalid URI \"{uri}\": {reason}"),
            Self::UnknownScheme { scheme } => {
                write!(f, "no barcode registered for scheme \"{scheme}\"")
            }
            Self::DuplicateScheme { scheme } => {
                write!(f, "barcode scheme \"{scheme}\" is already registered")
            }
            Self::Barcode(e) => write!(f, "barcode error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Leg { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
