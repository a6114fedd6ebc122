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

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::julian::{civil_to_julian, julian_to_civil, CivilDate};
use crate::{Code, DataSize, Error, Numeric, Record, Text};

/// A flight segment of a boarding pass.
///
/// The leg references the raw string it was parsed from. Text fields are
/// trimmed and numeric fields have their leading zeros removed, the padding
/// is restored when the leg is written back.
///
/// # Examples
///
/// ```
/// use bcbp::Leg;
///
/// # fn main() -> Result<(), bcbp::Error> {
/// let leg = Leg::try_from("M1DESMARAIS/LUC       EABC123 YULFRAAC 00834226F001A00025100")?;
/// assert_eq!(leg.departure_airport.as_str(), "YUL");
/// assert_eq!(leg.flight_number.as_str(), "834");
/// assert_eq!(leg.seat_number.as_str(), "1A");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Record)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Leg<'a> {
    #[bcbp(field = FormatCode)]
    pub format_code: Code<'a, 1>,
    #[bcbp(field = NumberOfLegs)]
    pub number_of_legs: Code<'a, 1>,
    #[bcbp(field = PassengerName)]
    pub passenger_name: Text<'a, 20>,
    #[bcbp(field = ElectronicTicketIndicator)]
    pub electronic_ticket_indicator: Code<'a, 1>,
    #[bcbp(field = OperatingCarrierPnr)]
    pub operating_carrier_pnr: Text<'a, 7>,
    #[bcbp(field = DepartureAirport)]
    #[cfg_attr(feature = "serde", serde(rename = "from_airport"))]
    pub departure_airport: Text<'a, 3>,
    #[bcbp(field = ArrivalAirport)]
    #[cfg_attr(feature = "serde", serde(rename = "to_airport"))]
    pub arrival_airport: Text<'a, 3>,
    #[bcbp(field = OperatingCarrierDesignator)]
    pub operating_carrier_designator: Text<'a, 3>,
    #[bcbp(field = FlightNumber)]
    pub flight_number: Numeric<'a, 5>,
    #[bcbp(field = DateOfFlight)]
    pub date_of_flight: Code<'a, 3>,
    #[bcbp(field = CompartmentCode)]
    pub compartment_code: Code<'a, 1>,
    #[bcbp(field = SeatNumber)]
    pub seat_number: Numeric<'a, 4>,
    #[bcbp(field = CheckInSequenceNumber)]
    #[cfg_attr(feature = "serde", serde(rename = "checkin_sequence_number"))]
    pub check_in_sequence_number: Numeric<'a, 5>,
    #[bcbp(field = PassengerStatus)]
    pub passenger_status: Code<'a, 1>,
    #[bcbp(field = VariableFieldSize)]
    pub variable_field_size: Code<'a, 2>,
    #[bcbp(field = OptionalDataSize)]
    pub optional_data_size: Option<DataSize<'a>>,
    /// The optional data as is. It isn't cut to the declared size.
    #[bcbp(tail)]
    pub optional_data: &'a str,
}

impl<'a> Leg<'a> {
    /// Returns the month and day of the flight.
    ///
    /// The date of flight is read as Julian day. Note that issuers encode the
    /// day of the year (001 to 366) in this field, which results in a date in
    /// 4712 BC. Use [`flight_date`](Leg::flight_date) to read the field as
    /// day of the year.
    ///
    /// # Errors
    ///
    /// Returns an error if the date of flight is not a number.
    pub fn month_day(&self) -> Result<(u8, u8), Error> {
        let value = self.date_of_flight.as_str();
        let jd: f64 = value
            .parse()
            .ok()
            .filter(|jd: &f64| jd.is_finite())
            .ok_or_else(|| Error::InvalidDate {
                value: value.to_owned(),
            })?;

        let date = julian_to_civil(jd);
        Ok((date.month, date.day.floor() as u8))
    }

    /// Returns the date of flight as day of the year from 1 to 366.
    ///
    /// # Errors
    ///
    /// Returns an error if the date of flight is not a day of a year.
    pub fn day_of_year(&self) -> Result<u16, Error> {
        let value = self.date_of_flight.as_str().trim();
        let invalid = || Error::InvalidDate {
            value: value.to_owned(),
        };

        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        match value.parse::<u16>() {
            Ok(day @ 1..=366) => Ok(day),
            _ => Err(invalid()),
        }
    }

    /// Returns the date of the flight in the `year`.
    ///
    /// A boarding pass doesn't encode the year, thus it needs to be provided
    /// e.g. from the date the pass was issued or scanned. Years before 1583
    /// are counted in the Julian calendar.
    ///
    /// # Errors
    ///
    /// Returns an error if the date of flight is not a day of the `year`.
    pub fn flight_date(&self, year: i32) -> Result<CivilDate, Error> {
        let day = f64::from(self.day_of_year()?);

        // January 0.0 in the calendar used in that year
        let start = civil_to_julian(CivilDate::new(year, 1, 0.0));
        let end = civil_to_julian(CivilDate::new(year + 1, 1, 0.0));

        if day > end - start {
            return Err(Error::InvalidDate {
                value: self.date_of_flight.as_str().to_owned(),
            });
        }

        Ok(julian_to_civil(start + day))
    }
}

impl fmt::Display for Leg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
