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

//! Public AIXM airspace type yielded by the [`Airspaces`](crate::Airspaces)
//! iterator.
//!
//! The AIXM XML format nests an MVA sector deeply (TimeSlice wrappers, the
//! geometry component and volume, GML surface patches). The parser handles
//! that nesting internally using serde-mapped structs and converts each
//! airspace into this flat type so callers never deal with XML structure.

/// An airspace parsed from an AIXM `Airspace` feature of an MVA chart.
///
/// All fields are required in the source document. A time slice missing any
/// of them is rejected by the parser instead of being filled with defaults.
///
/// # Examples
///
/// ```no_run
/// # let arsp: aixm::Airspace = unimplemented!();
/// // MVA charts list each position as longitude followed by latitude
/// for &(longitude, latitude) in &arsp.exterior {
///     println!("{}: {latitude} {longitude}", arsp.name);
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Airspace {
    /// UUID from the `gml:id` attribute, if present.
    pub uuid: Option<String>,
    /// Sector name (e.g. `"ABE_MVA_FUS3_2022_A"`).
    pub name: String,
    /// The `minimumLimit` of the airspace volume in feet MSL.
    pub minimum_limit: i32,
    /// Exterior ring of the horizontal projection as value pairs in
    /// document order. For MVA charts that is `(longitude, latitude)`.
    pub exterior: Vec<(f64, f64)>,
}
