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

//! Barcodes that carry a boarding pass.
//!
//! Rendering a boarding pass as image is left to [`Barcode`] implementations
//! which are looked up by the scheme of a URI, e.g. `pdf417://?scale=2`. The
//! schemes are registered once with a [`BarcodeRegistryBuilder`] and the
//! resulting [`BarcodeRegistry`] is passed to whoever needs a barcode.
//!
//! ```
//! use bcbp::barcode::{Barcode, BarcodeRegistryBuilder};
//! use bcbp::{Error, Itinerary};
//! # use std::io::{Read, Write};
//!
//! struct Pdf417;
//!
//! impl Barcode for Pdf417 {
//!     // ...
//! #   fn encode(&self, _: &Itinerary<'_>, _: &mut dyn Write) -> Result<(), Error> { Ok(()) }
//! #   fn decode<'a>(&self, _: &mut dyn Read, _: &'a mut String) -> Result<Itinerary<'a>, Error> {
//! #       Err(Error::Barcode("not implemented".to_string()))
//! #   }
//! }
//!
//! # fn main() -> Result<(), Error> {
//! let registry = BarcodeRegistryBuilder::new()
//!     .register("pdf417", |_uri| Ok(Box::new(Pdf417)))?
//!     .build();
//!
//! let barcode = registry.new_barcode("pdf417://")?;
//! assert_eq!(registry.schemes(), ["pdf417://"]);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::io::{Read, Write};

use log::debug;
use url::Url;

use crate::{Error, Itinerary};

/// An image format that encodes a boarding pass.
pub trait Barcode: Send + Sync {
    /// Encodes the itinerary as image into the `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the image can't be created or written.
    fn encode(&self, itinerary: &Itinerary<'_>, writer: &mut dyn Write) -> Result<(), Error>;

    /// Decodes the image read from `reader`.
    ///
    /// The BCBP string found in the image is stored in `buf` and the returned
    /// itinerary references it.
    ///
    /// # Errors
    ///
    /// Returns an error if the image contains no BCBP string or the string
    /// fails to parse.
    fn decode<'a>(
        &self,
        reader: &mut dyn Read,
        buf: &'a mut String,
    ) -> Result<Itinerary<'a>, Error>;
}

/// Creates a barcode configured by the URI.
pub type BarcodeInit = fn(uri: &Url) -> Result<Box<dyn Barcode>, Error>;

/// Factory of a [`BarcodeRegistry`].
#[derive(Default)]
pub struct BarcodeRegistryBuilder {
    drivers: BTreeMap<String, BarcodeInit>,
}

impl BarcodeRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the `init` function for the `scheme`.
    ///
    /// Schemes are case insensitive.
    ///
    /// # Errors
    ///
    /// Returns an error if the scheme is already registered.
    pub fn register(mut self, scheme: &str, init: BarcodeInit) -> Result<Self, Error> {
        let scheme = scheme.to_ascii_lowercase();

        if self.drivers.contains_key(&scheme) {
            return Err(Error::DuplicateScheme { scheme });
        }

        debug!("barcode scheme {} registered", scheme);
        self.drivers.insert(scheme, init);
        Ok(self)
    }

    pub fn build(self) -> BarcodeRegistry {
        BarcodeRegistry {
            drivers: self.drivers,
        }
    }
}

/// The barcodes that are available by their scheme.
///
/// The registry can't be changed once built and is shared by reference.
pub struct BarcodeRegistry {
    drivers: BTreeMap<String, BarcodeInit>,
}

impl BarcodeRegistry {
    /// Returns a new barcode for the scheme of the `uri`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is invalid, no barcode is registered for
    /// its scheme, or the barcode rejects the URI.
    pub fn new_barcode(&self, uri: &str) -> Result<Box<dyn Barcode>, Error> {
        let url = Url::parse(uri).map_err(|e| Error::InvalidUri {
            uri: uri.to_owned(),
            reason: e.to_string(),
        })?;

        let init = self
            .drivers
            .get(url.scheme())
            .ok_or_else(|| Error::UnknownScheme {
                scheme: url.scheme().to_owned(),
            })?;

        init(&url)
    }

    /// Returns the registered schemes as `scheme://` in alphabetical order.
    pub fn schemes(&self) -> Vec<String> {
        self.drivers.keys().map(|s| format!("{s}://")).collect()
    }
}
