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

//! Positions of the fixed fields within a leg.
//!
//! ```text
//! M|1|DESMARAIS/LUC       |E|ABC123 |YUL|FRA|AC |00834|226|F|001A|00025|1|00|..
//! ```

use log::trace;

use crate::Error;

/// The length of the mandatory block of a leg in bytes.
pub const BLOCK_LENGTH: usize = 60;

/// The offset at which the optional data of a leg starts.
pub const OPTIONAL_DATA_OFFSET: usize = 62;

/// A fixed field of a leg.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Field {
    FormatCode,
    NumberOfLegs,
    PassengerName,
    ElectronicTicketIndicator,
    OperatingCarrierPnr,
    DepartureAirport,
    ArrivalAirport,
    OperatingCarrierDesignator,
    FlightNumber,
    DateOfFlight,
    CompartmentCode,
    SeatNumber,
    CheckInSequenceNumber,
    PassengerStatus,
    /// Length of the variable size field (IATA item 6), kept verbatim.
    VariableFieldSize,
    OptionalDataSize,
}

impl Field {
    /// The fields of the mandatory block in the order they appear.
    pub const MANDATORY: [Field; 15] = [
        Self::FormatCode,
        Self::NumberOfLegs,
        Self::PassengerName,
        Self::ElectronicTicketIndicator,
        Self::OperatingCarrierPnr,
        Self::DepartureAirport,
        Self::ArrivalAirport,
        Self::OperatingCarrierDesignator,
        Self::FlightNumber,
        Self::DateOfFlight,
        Self::CompartmentCode,
        Self::SeatNumber,
        Self::CheckInSequenceNumber,
        Self::PassengerStatus,
        Self::VariableFieldSize,
    ];

    const fn span(self) -> (usize, usize) {
        match self {
            Self::FormatCode => (0, 1),
            Self::NumberOfLegs => (1, 1),
            Self::PassengerName => (2, 20),
            Self::ElectronicTicketIndicator => (22, 1),
            Self::OperatingCarrierPnr => (23, 7),
            Self::DepartureAirport => (30, 3),
            Self::ArrivalAirport => (33, 3),
            Self::OperatingCarrierDesignator => (36, 3),
            Self::FlightNumber => (39, 5),
            Self::DateOfFlight => (44, 3),
            Self::CompartmentCode => (47, 1),
            Self::SeatNumber => (48, 4),
            Self::CheckInSequenceNumber => (52, 5),
            Self::PassengerStatus => (57, 1),
            Self::VariableFieldSize => (58, 2),
            Self::OptionalDataSize => (60, 2),
        }
    }

    /// The zero based offset of this field from the start of a leg.
    #[inline]
    pub const fn offset(self) -> usize {
        self.span().0
    }

    /// The fixed length of this field in bytes.
    #[inline]
    pub const fn length(self) -> usize {
        self.span().1
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::FormatCode => "Format Code",
            Self::NumberOfLegs => "Number of Legs Encoded",
            Self::PassengerName => "Passenger Name",
            Self::ElectronicTicketIndicator => "Electronic Ticket Indicator",
            Self::OperatingCarrierPnr => "Operating Carrier PNR Code",
            Self::DepartureAirport => "From City Airport Code",
            Self::ArrivalAirport => "To City Airport Code",
            Self::OperatingCarrierDesignator => "Operating Carrier Designator",
            Self::FlightNumber => "Flight Number",
            Self::DateOfFlight => "Date of Flight",
            Self::CompartmentCode => "Compartment Code",
            Self::SeatNumber => "Seat Number",
            Self::CheckInSequenceNumber => "Check-In Sequence Number",
            Self::PassengerStatus => "Passenger Status",
            Self::VariableFieldSize => "Field Size of Variable Size Field",
            Self::OptionalDataSize => "Optional Data Size",
        }
    }

    /// Returns the bytes of this field within `raw`.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` ends before the field does.
    pub fn extract(self, raw: &str) -> Result<&str, Error> {
        let (offset, length) = self.span();

        match raw.get(offset..offset + length) {
            Some(value) => {
                trace!("{}: {:?} at {}..{}", self.name(), value, offset, offset + length);
                Ok(value)
            }
            None => Err(Error::FieldExtraction {
                field: self.name(),
                offset,
                length,
                actual: raw.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // M|1|DESMARAIS/LUC       |E|ABC123 |YUL|FRA|AC |00834|226|F|001A|00025|1|00|05|1A2B3
    const LEG: &str = "M1DESMARAIS/LUC       EABC123 YULFRAAC 00834226F001A00025100051A2B3";

    macro_rules! span_test {
        ($name:ident: $field:ident => $offset:expr, $length:expr, $value:expr) => {
            #[test]
            fn $name() {
                assert_eq!(Field::$field.offset(), $offset);
                assert_eq!(Field::$field.length(), $length);
                assert_eq!(Field::$field.extract(LEG), Ok($value));
            }
        };
    }

    span_test!(format_code: FormatCode => 0, 1, "M");
    span_test!(number_of_legs: NumberOfLegs => 1, 1, "1");
    span_test!(passenger_name: PassengerName => 2, 20, "DESMARAIS/LUC       ");
    span_test!(electronic_ticket_indicator: ElectronicTicketIndicator => 22, 1, "E");
    span_test!(operating_carrier_pnr: OperatingCarrierPnr => 23, 7, "ABC123 ");
    span_test!(departure_airport: DepartureAirport => 30, 3, "YUL");
    span_test!(arrival_airport: ArrivalAirport => 33, 3, "FRA");
    span_test!(operating_carrier_designator: OperatingCarrierDesignator => 36, 3, "AC ");
    span_test!(flight_number: FlightNumber => 39, 5, "00834");
    span_test!(date_of_flight: DateOfFlight => 44, 3, "226");
    span_test!(compartment_code: CompartmentCode => 47, 1, "F");
    span_test!(seat_number: SeatNumber => 48, 4, "001A");
    span_test!(check_in_sequence_number: CheckInSequenceNumber => 52, 5, "00025");
    span_test!(passenger_status: PassengerStatus => 57, 1, "1");
    span_test!(variable_field_size: VariableFieldSize => 58, 2, "00");
    span_test!(optional_data_size: OptionalDataSize => 60, 2, "05");

    #[test]
    fn mandatory_fields_tile_the_block() {
        let mut offset = 0;
        for field in Field::MANDATORY {
            assert_eq!(field.offset(), offset, "{} is misplaced", field.name());
            offset += field.length();
        }
        assert_eq!(offset, BLOCK_LENGTH);
        assert_eq!(
            Field::OptionalDataSize.offset() + Field::OptionalDataSize.length(),
            OPTIONAL_DATA_OFFSET
        );
    }

    #[test]
    fn extracting_beyond_the_input_fails() {
        assert_eq!(
            Field::PassengerStatus.extract(&LEG[..57]),
            Err(Error::FieldExtraction {
                field: "Passenger Status",
                offset: 57,
                length: 1,
                actual: 57,
            })
        );
    }

    #[test]
    fn extracting_across_a_multibyte_character_fails() {
        // the two byte 'É' shifts everything after the name by one byte
        let raw = "M1ÉDESMARAIS/LUC     EABC123 ";
        assert!(Field::PassengerName.extract(raw).is_ok());
        assert!(Field::FormatCode.extract(raw).is_ok());
        assert!(matches!(
            Field::NumberOfLegs.extract("MÉ"),
            Err(Error::FieldExtraction { .. })
        ));
    }
}
