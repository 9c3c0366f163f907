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

//! Serde-deserializable structs that mirror the AIXM 5.1 airspace structure.
//!
//! These are internal types used by the parser. They map directly to the XML
//! nesting of an MVA chart airspace, then get converted into the flat public
//! [`Airspace`](crate::Airspace) type. The parser hands over a subtree that
//! only holds the elements of this structure found in their namespace,
//! written without prefix.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct AirspaceXml {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(rename = "timeSlice", default)]
    pub time_slices: Vec<ArspTimeSliceWrapper>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArspTimeSliceWrapper {
    #[serde(rename = "AirspaceTimeSlice")]
    pub inner: Option<ArspTimeSlice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArspTimeSlice {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "geometryComponent", default)]
    pub geometry_components: Vec<AirspaceGeometryComponent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirspaceGeometryComponent {
    #[serde(rename = "AirspaceGeometryComponent")]
    pub inner: Option<AirspaceGeometryComponentInner>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirspaceGeometryComponentInner {
    #[serde(rename = "theAirspaceVolume")]
    pub the_airspace_volume: Option<TheAirspaceVolume>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TheAirspaceVolume {
    #[serde(rename = "AirspaceVolume")]
    pub volume: Option<AirspaceVolumeXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirspaceVolumeXml {
    #[serde(rename = "minimumLimit", default)]
    pub minimum_limit: Option<Limit>,
    #[serde(rename = "horizontalProjection", default)]
    pub horizontal_projection: Option<HorizontalProjection>,
}

/// A vertical limit such as `<aixm:minimumLimit uom="FT">3000</aixm:minimumLimit>`.
///
/// MVA charts publish limits in feet, so the unit attribute is not read.
#[derive(Debug, Deserialize)]
pub(crate) struct Limit {
    #[serde(rename = "$text", default)]
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HorizontalProjection {
    #[serde(rename = "Surface")]
    pub surface: Option<Surface>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Surface {
    #[serde(default)]
    pub patches: Option<Patches>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Patches {
    #[serde(rename = "PolygonPatch")]
    pub polygon_patch: Option<PolygonPatch>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PolygonPatch {
    pub exterior: Option<Exterior>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Exterior {
    #[serde(rename = "LinearRing")]
    pub linear_ring: Option<LinearRing>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LinearRing {
    #[serde(rename = "posList")]
    pub pos_list: Option<String>,
}
