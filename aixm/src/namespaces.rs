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

/// XML namespace URIs of an AIXM 5.1 message.
///
/// Elements are matched on these URIs, so a document declaring the same
/// schema under different prefixes (`aixm:`, `ns3:`, ...) reads the same. Only
/// [`aixm`](Self::aixm) and [`message`](Self::message) take part in matching
/// airspaces; the others complete the set that MVA chart headers declare.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespaces {
    pub xlink: String,
    pub gml: String,
    pub gco: String,
    pub aixm: String,
    pub gmx: String,
    pub gmd: String,
    pub gts: String,
    pub message: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            xlink: "http://www.w3.org/1999/xlink".to_string(),
            gml: "http://www.opengis.net/gml/3.2".to_string(),
            gco: "http://www.isotc211.org/2005/gco".to_string(),
            aixm: "http://www.aixm.aero/schema/5.1".to_string(),
            gmx: "http://www.isotc211.org/2005/gmx".to_string(),
            gmd: "http://www.isotc211.org/2005/gmd".to_string(),
            gts: "http://www.isotc211.org/2005/gts".to_string(),
            message: "http://www.aixm.aero/schema/5.1/message".to_string(),
        }
    }
}

impl Namespaces {
    /// Returns the namespaces as `(prefix, URI)` pairs, e.g. to declare them
    /// on a root element.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("xlink", self.xlink.as_str()),
            ("gml", self.gml.as_str()),
            ("gco", self.gco.as_str()),
            ("aixm", self.aixm.as_str()),
            ("gmx", self.gmx.as_str()),
            ("gmd", self.gmd.as_str()),
            ("gts", self.gts.as_str()),
            ("message", self.message.as_str()),
        ]
        .into_iter()
    }
}
