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

use crate::{Error, Field};

/// A fixed-length field type.
///
/// This trait is implemented by all BCBP fields. Each field is created
/// [`from_field`](FixedField::from_field) and stores a reference to the
/// relevant part of the field's characters.
pub trait FixedField<'a>: Sized {
    /// The number of characters this field takes.
    const LENGTH: usize;

    /// Parse this field from the characters at its fixed position.
    ///
    /// # Errors
    ///
    /// Returns an error if the characters contain invalid data.
    fn from_field(value: &'a str) -> Result<Self, Error>;

    /// Called instead of [`from_field`](FixedField::from_field) if the input
    /// ends before the field starts.
    ///
    /// # Errors
    ///
    /// Returns the extraction `error` unless the field is optional.
    fn absent(error: Error) -> Result<Self, Error> {
        Err(error)
    }

    /// Writes this field padded to [`LENGTH`](FixedField::LENGTH) characters.
    fn write_to(&self, out: &mut String);
}

fn pad_right(value: &str, pad: char, width: usize, out: &mut String) {
    out.push_str(value);
    out.extend(std::iter::repeat(pad).take(width.saturating_sub(value.len())));
}

fn pad_left(value: &str, pad: char, width: usize, out: &mut String) {
    out.extend(std::iter::repeat(pad).take(width.saturating_sub(value.len())));
    out.push_str(value);
}

macro_rules! str_field_impl {
    ($t:ident) => {
        impl<'a, const N: usize> $t<'a, N> {
            /// Returns the field's value.
            #[inline]
            pub fn as_str(&self) -> &'a str {
                self.0
            }

            /// Returns `true` if the field has no value.
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl<const N: usize> fmt::Debug for $t<'_, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "\"{}\"", self.0)
            }
        }

        impl<const N: usize> fmt::Display for $t<'_, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl<const N: usize> From<$t<'_, N>> for String {
            fn from(value: $t<'_, N>) -> Self {
                value.0.to_owned()
            }
        }

        impl<const N: usize> PartialEq<&str> for $t<'_, N> {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        #[cfg(feature = "serde")]
        impl<const N: usize> serde::Serialize for $t<'_, N> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.0)
            }
        }
    };
}

/////////////////////////////////////////////////////////////////////////////
// Text Field
/////////////////////////////////////////////////////////////////////////////

/// A text field (left-justified, space-padded).
///
/// The value is stored with surrounding whitespace removed.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Text<'a, const N: usize>(&'a str);

str_field_impl!(Text);

impl<'a, const N: usize> From<&'a str> for Text<'a, N> {
    fn from(value: &'a str) -> Self {
        Self(value.trim())
    }
}

impl<'a, const N: usize> FixedField<'a> for Text<'a, N> {
    const LENGTH: usize = N;

    fn from_field(value: &'a str) -> Result<Self, Error> {
        Ok(Self::from(value))
    }

    fn write_to(&self, out: &mut String) {
        pad_right(self.0, ' ', N, out);
    }
}

/////////////////////////////////////////////////////////////////////////////
// Numeric Field
/////////////////////////////////////////////////////////////////////////////

/// A numeric field (right-justified, zero-padded).
///
/// The value is stored with leading zeros removed. Other characters, like
/// the seat letter in `001A`, are kept.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Numeric<'a, const N: usize>(&'a str);

str_field_impl!(Numeric);

impl<'a, const N: usize> From<&'a str> for Numeric<'a, N> {
    fn from(value: &'a str) -> Self {
        Self(value.trim_start_matches('0'))
    }
}

impl<'a, const N: usize> Numeric<'a, N> {
    /// Returns the field as number.
    ///
    /// An empty field, i.e. one that contained only zeros, is `0`.
    ///
    /// # Errors
    ///
    /// Returns an error if the field contains anything else than digits.
    pub fn as_u32(&self) -> Result<u32, Error> {
        let digits = self.0.trim_end();

        if digits.is_empty() {
            Ok(0)
        } else if digits.bytes().all(|b| b.is_ascii_digit()) {
            digits.parse().map_err(|_| Error::InvalidNumber {
                value: self.0.to_owned(),
            })
        } else {
            Err(Error::InvalidNumber {
                value: self.0.to_owned(),
            })
        }
    }
}

impl<'a, const N: usize> FixedField<'a> for Numeric<'a, N> {
    const LENGTH: usize = N;

    fn from_field(value: &'a str) -> Result<Self, Error> {
        Ok(Self::from(value))
    }

    fn write_to(&self, out: &mut String) {
        pad_left(self.0, '0', N, out);
    }
}

/////////////////////////////////////////////////////////////////////////////
// Code Field
/////////////////////////////////////////////////////////////////////////////

/// A code field which is kept as is (e.g. the compartment code).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Code<'a, const N: usize>(&'a str);

str_field_impl!(Code);

impl<'a, const N: usize> Code<'a, N> {
    /// Returns the first character of the field.
    #[inline]
    pub fn first(&self) -> Option<char> {
        self.0.chars().next()
    }
}

impl<'a, const N: usize> From<&'a str> for Code<'a, N> {
    fn from(value: &'a str) -> Self {
        Self(value)
    }
}

impl<'a, const N: usize> FixedField<'a> for Code<'a, N> {
    const LENGTH: usize = N;

    fn from_field(value: &'a str) -> Result<Self, Error> {
        Ok(Self(value))
    }

    fn write_to(&self, out: &mut String) {
        pad_right(self.0, ' ', N, out);
    }
}

/////////////////////////////////////////////////////////////////////////////
// Data Size Field
/////////////////////////////////////////////////////////////////////////////

/// The declared size of the optional data.
///
/// The size is informational only. Issuers are known to declare sizes that
/// don't match the data that follows, thus it is never used to cut the data.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DataSize<'a>(&'a str);

impl<'a> DataSize<'a> {
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Returns the declared size which is encoded as two hex digits.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not a hexadecimal number.
    pub fn declared(&self) -> Result<u8, Error> {
        u8::from_str_radix(self.0, 16).map_err(|_| Error::NotANumber {
            field: Field::OptionalDataSize.name(),
            value: self.0.to_owned(),
        })
    }
}

impl<'a> From<&'a str> for DataSize<'a> {
    fn from(value: &'a str) -> Self {
        Self(value)
    }
}

impl<'a> FixedField<'a> for DataSize<'a> {
    const LENGTH: usize = 2;

    fn from_field(value: &'a str) -> Result<Self, Error> {
        Ok(Self(value))
    }

    fn write_to(&self, out: &mut String) {
        pad_left(self.0, '0', Self::LENGTH, out);
    }
}

impl fmt::Debug for DataSize<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DataSize<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0)
    }
}

/////////////////////////////////////////////////////////////////////////////
// Optional Field Support
/////////////////////////////////////////////////////////////////////////////

/// Optional field that may be missing at the end of the input.
///
/// Allows fields to be `None` when the input ends before the field starts
/// (i.e. a leg without optional data). An input ending within the field is
/// still an error.
impl<'a, T> FixedField<'a> for Option<T>
where
    T: FixedField<'a>,
{
    const LENGTH: usize = T::LENGTH;

    fn from_field(value: &'a str) -> Result<Self, Error> {
        T::from_field(value).map(Some)
    }

    fn absent(_error: Error) -> Result<Self, Error> {
        Ok(None)
    }

    fn write_to(&self, out: &mut String) {
        if let Some(value) = self {
            value.write_to(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written<'a, F: FixedField<'a>>(field: F) -> String {
        let mut out = String::new();
        field.write_to(&mut out);
        out
    }

    #[test]
    fn text_is_trimmed_and_padded() {
        let name = Text::<20>::from_field("DESMARAIS/LUC       ").expect("text should parse");
        assert_eq!(name.as_str(), "DESMARAIS/LUC");
        assert_eq!(written(name), "DESMARAIS/LUC       ");
    }

    #[test]
    fn numeric_strips_leading_zeros() {
        let seat = Numeric::<4>::from_field("001A").expect("seat should parse");
        assert_eq!(seat.as_str(), "1A");
        assert_eq!(written(seat), "001A");
        assert_eq!(
            seat.as_u32(),
            Err(Error::InvalidNumber {
                value: "1A".to_string()
            })
        );

        let flight = Numeric::<5>::from("00834");
        assert_eq!(flight.as_u32(), Ok(834));

        let blank = Numeric::<5>::from("00000");
        assert!(blank.is_empty());
        assert_eq!(blank.as_u32(), Ok(0));
        assert_eq!(written(blank), "00000");
    }

    #[test]
    fn numeric_keeps_trailing_spaces() {
        let flight = Numeric::<5>::from("0834 ");
        assert_eq!(flight.as_str(), "834 ");
        assert_eq!(flight.as_u32(), Ok(834));
        assert_eq!(written(flight), "0834 ");
    }

    #[test]
    fn code_is_verbatim() {
        let code = Code::<3>::from_field(" 26").expect("code should parse");
        assert_eq!(code.as_str(), " 26");
        assert_eq!(code.first(), Some(' '));
        assert_eq!(written(Code::<3>::from("1")), "1  ");
    }

    #[test]
    fn data_size_is_hex() {
        assert_eq!(DataSize::from("4A").declared(), Ok(74));
        assert_eq!(written(DataSize::from("5")), "05");
        assert!(matches!(
            DataSize::from("X1").declared(),
            Err(Error::NotANumber { .. })
        ));
    }

    #[test]
    fn absent_optional_field_is_none() {
        let error = Error::FieldExtraction {
            field: "Optional Data Size",
            offset: 60,
            length: 2,
            actual: 60,
        };
        assert_eq!(<Option<DataSize>>::absent(error.clone()), Ok(None));
        assert_eq!(<DataSize>::absent(error.clone()), Err(error));
        assert_eq!(written(None::<DataSize>), "");
    }

    #[test]
    fn length_follows_type() {
        assert_eq!(<Text<20>>::LENGTH, 20);
        assert_eq!(<Numeric<5>>::LENGTH, 5);
        assert_eq!(<Code<1>>::LENGTH, 1);
        assert_eq!(<Option<DataSize>>::LENGTH, 2);
    }

    #[test]
    fn short_value_is_padded_to_length() {
        assert_eq!(written(Text::<7>::from("ABC123")), "ABC123 ");
        assert_eq!(written(Numeric::<4>::from("1A")), "001A");
    }
}
