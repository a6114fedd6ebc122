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

use crate::schema::OPTIONAL_DATA_OFFSET;
use crate::{Error, Field, FixedField};

/// A record made of fixed fields, like a [`Leg`](crate::Leg).
pub trait Record<'a>: Sized {
    /// Parse this record type from a field reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is too short or contains invalid data.
    fn parse(fields: Fields<'a>) -> Result<Self, Error>;

    /// Writes the fields of this record in schema order.
    fn write(&self, writer: &mut Writer);

    /// Parse this record type from the raw string.
    ///
    /// # Errors
    ///
    /// Returns any error returned by [`parse`][Record::parse].
    fn from_raw(raw: &'a str) -> Result<Self, Error> {
        Self::parse(Fields::new(raw))
    }

    /// Returns the raw string of this record.
    fn format(&self) -> String {
        let mut writer = Writer::new();
        self.write(&mut writer);
        writer.finish()
    }
}

/// Reads fields at their fixed position from a raw string.
#[derive(Clone, Copy, Debug)]
pub struct Fields<'a> {
    raw: &'a str,
}

impl<'a> Fields<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// Reads the `field` at its position.
    ///
    /// # Errors
    ///
    /// Returns an error if the raw string ends within the field, or before the
    /// field if the field is not optional.
    #[inline]
    pub fn get<F>(&self, field: Field) -> Result<F, Error>
    where
        F: FixedField<'a>,
    {
        debug_assert_eq!(F::LENGTH, field.length(), "length of {}", field.name());

        match field.extract(self.raw) {
            Ok(value) => F::from_field(value),
            Err(e) if self.raw.len() <= field.offset() => F::absent(e),
            Err(e) => Err(e),
        }
    }

    /// Reads everything after the fixed fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the optional data doesn't start at a character
    /// boundary.
    pub fn tail(&self) -> Result<&'a str, Error> {
        if self.raw.len() <= OPTIONAL_DATA_OFFSET {
            return Ok("");
        }

        self.raw
            .get(OPTIONAL_DATA_OFFSET..)
            .ok_or(Error::FieldExtraction {
                field: "Optional Data",
                offset: OPTIONAL_DATA_OFFSET,
                length: self.raw.len() - OPTIONAL_DATA_OFFSET,
                actual: self.raw.len(),
            })
    }
}

/// Writes fields padded to their fixed length.
#[derive(Default, Debug)]
pub struct Writer {
    buf: String,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the `value` of the `field`.
    #[inline]
    pub fn put<'a, F>(&mut self, field: Field, value: &F)
    where
        F: FixedField<'a>,
    {
        debug_assert_eq!(F::LENGTH, field.length(), "length of {}", field.name());
        value.write_to(&mut self.buf);
    }

    /// Appends the optional data as is.
    #[inline]
    pub fn put_tail(&mut self, tail: &str) {
        self.buf.push_str(tail);
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Code, Numeric, Text};

    const LEG: &str = "M1DESMARAIS/LUC       EABC123 YULFRAAC 00834226F001A00025100";

    #[test]
    fn writer_pads_to_field_length() {
        let fields = Fields::new(LEG);
        let pnr: Text<7> = fields.get(Field::OperatingCarrierPnr).expect("PNR should parse");
        let seat: Numeric<4> = fields.get(Field::SeatNumber).expect("seat should parse");

        let mut writer = Writer::new();
        writer.put(Field::OperatingCarrierPnr, &pnr);
        writer.put(Field::SeatNumber, &seat);
        assert_eq!(writer.finish(), "ABC123 001A");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "length of Passenger Name")]
    fn field_type_must_match_schema_length() {
        let _ = Fields::new(LEG).get::<Text<3>>(Field::PassengerName);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "length of Compartment Code")]
    fn written_type_must_match_schema_length() {
        Writer::new().put(Field::CompartmentCode, &Code::<3>::from("F"));
    }
}
