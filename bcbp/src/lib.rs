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

//! IATA Bar-Coded Boarding Pass (BCBP) parser.
//!
//! This crate decodes the string encoded in the barcode of a boarding pass
//! into an [`Itinerary`] of [`Leg`]s and writes them back. Each leg starts
//! with a mandatory block of 60 characters whose [fields] are at fixed
//! positions, optionally followed by data of variable length. The legs
//! reference the parsed string and copy nothing.
//!
//! # Examples
//!
//! Lets parse a boarding pass from Montréal to Frankfurt:
//!
//! ```
//! # fn main() -> Result<(), bcbp::Error> {
//! let raw = "M1DESMARAIS/LUC       EABC123 YULFRAAC 00834226F001A00025100";
//! let itinerary = bcbp::parse(raw)?;
//!
//! for leg in &itinerary {
//!     println!(
//!         "{} from {} to {} on flight {}{}",
//!         leg.passenger_name,
//!         leg.departure_airport,
//!         leg.arrival_airport,
//!         leg.operating_carrier_designator,
//!         leg.flight_number,
//!     ); // => "DESMARAIS/LUC from YUL to FRA on flight AC834"
//! }
//!
//! // the itinerary is written back with the original padding
//! assert_eq!(bcbp::format(&itinerary), raw);
//! #     Ok(())
//! # }
//! ```
//!
//! [fields]: crate::Field

mod error;
mod field;
mod itinerary;
mod leg;
mod record;
mod schema;

pub mod barcode;
pub mod julian;

pub(crate) use bcbp_derive::Record;

pub use error::Error;
pub use field::{Code, DataSize, FixedField, Numeric, Text};
pub use itinerary::{Itinerary, FORMAT_CODE, GROUP_SEPARATOR};
pub use leg::Leg;
pub use record::{Fields, Record, Writer};
pub use schema::{Field, BLOCK_LENGTH, OPTIONAL_DATA_OFFSET};

/// Parses the raw BCBP string.
///
/// # Errors
///
/// Returns an error if the string is not a valid BCBP string. See
/// [`Itinerary::parse`].
pub fn parse(raw: &str) -> Result<Itinerary<'_>, Error> {
    Itinerary::parse(raw)
}

/// Returns the BCBP string of the itinerary.
pub fn format(itinerary: &Itinerary<'_>) -> String {
    itinerary.to_string()
}
