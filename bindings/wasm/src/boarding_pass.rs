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

use wasm_bindgen::prelude::*;

fn parse(raw: &str) -> Result<bcbp::Itinerary<'_>, JsError> {
    bcbp::parse(raw).map_err(|e| JsError::new(&format!("failed to parse '{raw}': {e}")))
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Parses the BCBP string into an object with all legs.
#[wasm_bindgen(js_name = parseBcbp)]
pub fn parse_bcbp(raw: &str) -> Result<JsValue, JsError> {
    to_value(&parse(raw)?)
}

/// Parses the BCBP string and writes it back with every field padded to its
/// fixed length.
#[wasm_bindgen(js_name = formatBcbp)]
pub fn format_bcbp(raw: &str) -> Result<String, JsError> {
    Ok(bcbp::format(&parse(raw)?))
}

/// A boarding pass that owns its BCBP string.
#[wasm_bindgen(js_name = BoardingPass)]
pub struct JsBoardingPass {
    raw: String,
}

#[wasm_bindgen(js_class = BoardingPass)]
impl JsBoardingPass {
    #[wasm_bindgen(constructor)]
    pub fn new(raw: String) -> Result<Self, JsError> {
        parse(&raw)?;
        Ok(Self { raw })
    }

    #[wasm_bindgen(getter)]
    pub fn legs(&self) -> Result<JsValue, JsError> {
        to_value(&parse(&self.raw)?.legs)
    }

    /// Returns the `[month, day]` of the leg's date of flight.
    #[wasm_bindgen(js_name = monthDay)]
    pub fn month_day(&self, leg: usize) -> Result<Vec<u8>, JsError> {
        let itinerary = parse(&self.raw)?;
        let leg = itinerary
            .legs
            .get(leg)
            .ok_or_else(|| JsError::new(&format!("no leg at offset {leg}")))?;
        let (month, day) = leg.month_day()?;
        Ok(vec![month, day])
    }

    /// Returns the BCBP string with the padding of the parsed fields.
    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> Result<String, JsError> {
        format_bcbp(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "M1DESMARAIS/LUC       EABC123 YULFRAAC 00834226F001A00025100";

    #[test]
    fn format_keeps_canonical_string() {
        assert_eq!(format_bcbp(RAW).ok().as_deref(), Some(RAW));
    }

    #[test]
    fn format_pads_fields() {
        let raw = RAW.replacen("DESMARAIS/LUC ", " DESMARAIS/LUC", 1);
        assert_eq!(format_bcbp(&raw).ok().as_deref(), Some(RAW));
    }
}
