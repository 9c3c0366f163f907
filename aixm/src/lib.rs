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

//! AIXM (Aeronautical Information Exchange Model) airspace reader
//!
//! This crate reads the airspace time slices of AIXM 5.1 documents as they
//! are published for FAA Minimum Vectoring Altitude (MVA) charts. Every
//! `hasMember/Airspace/timeSlice/AirspaceTimeSlice` subtree is turned into a
//! flat [`Airspace`] with its name, minimum limit and exterior ring.
//!
//! Elements are matched by namespace URI, not by prefix. The URIs are taken
//! from a [`Namespaces`] table which defaults to the AIXM 5.1 / GML 3.2 set.

mod error;
mod features;
mod namespaces;
mod parser;
mod xml;

pub use error::Error;
pub use features::Airspace;
pub use namespaces::Namespaces;
pub use parser::{parse_pos_list, Airspaces};
