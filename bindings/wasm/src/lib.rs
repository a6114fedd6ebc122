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

//! JavaScript bindings of the BCBP parser.
//!
//! ```js
//! import init, { parseBcbp, BoardingPass } from "bcbp-wasm";
//!
//! await init();
//! const itinerary = parseBcbp("M1DESMARAIS/LUC       EABC123 YULFRAAC 00834226F001A00025100");
//! console.log(itinerary.legs[0].from_airport); // => "YUL"
//! ```

use wasm_bindgen::prelude::*;

mod boarding_pass;

pub use boarding_pass::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::debug_1(&"BCBP parser initialized".into());
}
