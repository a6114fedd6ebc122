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

use std::fmt;

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{Error, Leg};

/// Separates the legs of a multi-leg boarding pass (ASCII Group Separator).
pub const GROUP_SEPARATOR: char = '\x1D';

/// The format code every BCBP string starts with.
pub const FORMAT_CODE: char = 'M';

/// A decoded boarding pass with all its legs in the order they are encoded.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Itinerary<'a> {
    pub legs: Vec<Leg<'a>>,
}

impl<'a> Itinerary<'a> {
    pub fn new(legs: Vec<Leg<'a>>) -> Self {
        Self { legs }
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Leg<'a>> {
        self.legs.iter()
    }

    /// Parses the raw BCBP string.
    ///
    /// The number of legs declared after the format code must match the
    /// number of legs found. Issuers are known to violate this, but those
    /// strings are rejected rather than guessing which leg is which.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a BCBP string, if the number of
    /// legs doesn't match or if any leg fails to parse.
    pub fn parse(raw: &'a str) -> Result<Self, Error> {
        let mut chars = raw.chars();

        match chars.next() {
            Some(FORMAT_CODE) => {}
            found => return Err(Error::InvalidFormatCode { found }),
        }

        let declared = chars
            .next()
            .ok_or(Error::InvalidLegCount { found: None })
            .and_then(|c| {
                c.to_digit(10)
                    .ok_or(Error::InvalidLegCount { found: Some(c) })
            })? as usize;

        let parts: Vec<&str> = raw.split(GROUP_SEPARATOR).collect();

        if declared != parts.len() {
            warn!(
                "BCBP declares {} leg(s) but contains {}",
                declared,
                parts.len()
            );
            return Err(Error::LegCountMismatch {
                declared,
                actual: parts.len(),
            });
        }

        let legs = parts
            .into_iter()
            .enumerate()
            .map(|(index, part)| {
                Leg::try_from(part).map_err(|e| Error::Leg {
                    index,
                    raw: part.to_owned(),
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("BCBP decoded: {} leg(s)", legs.len());
        Ok(Self { legs })
    }
}

impl<'a> TryFrom<&'a str> for Itinerary<'a> {
    type Error = Error;

    fn try_from(raw: &'a str) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl<'a> IntoIterator for Itinerary<'a> {
    type Item = Leg<'a>;
    type IntoIter = std::vec::IntoIter<Leg<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.legs.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b Itinerary<'a> {
    type Item = &'b Leg<'a>;
    type IntoIter = std::slice::Iter<'b, Leg<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.legs.iter()
    }
}

/// Writes the legs separated by the [`GROUP_SEPARATOR`].
///
/// Nothing is validated, an itinerary without legs is an empty string.
impl fmt::Display for Itinerary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, leg) in self.legs.iter().enumerate() {
            if i > 0 {
                write!(f, "{GROUP_SEPARATOR}")?;
            }
            write!(f, "{leg}")?;
        }
        Ok(())
    }
}
