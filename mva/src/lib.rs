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

//! Converts FAA Minimum Vectoring Altitude (MVA) charts into KML.
//!
//! The FAA publishes MVA charts as AIXM 5.1 documents. A [`Chart`] is loaded
//! from such a document with its airspaces sorted by floor, and then rendered
//! by [`kml::render`] into extruded, labeled polygons that can be explored in
//! Google Earth and similar tools.
//!
//! ```no_run
//! use mva::{Chart, Config};
//!
//! let config = Config::default();
//! let chart = Chart::load("ABE_MVA_FUS3_2022.xml", &config)?;
//! mva::kml::render(&chart, "ABE_MVA_FUS3_2022.kml", &config)?;
//! # Ok::<(), mva::Error>(())
//! ```

use std::path::Path;

use log::info;

mod chart;
mod config;
mod error;
pub mod geom;
pub mod kml;

pub use chart::{Airspace, Chart, FileTimes};
pub use config::{Config, MAX_ALPHA, MIN_ALPHA};
pub use error::Error;
pub use geom::Position;

/// Converts the AIXM chart at `input` into a KML file at `output`.
///
/// Returns the converted chart. Nothing is written if the chart can't be
/// loaded.
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &Config,
) -> Result<Chart, Error> {
    let (input, output) = (input.as_ref(), output.as_ref());
    info!(
        "converting input file {} to output {}",
        input.display(),
        output.display()
    );

    let chart = Chart::load(input, config)?;
    info!(
        "input file with {} airspaces parsed successfully",
        chart.airspaces.len()
    );

    kml::render(&chart, output, config)?;
    info!("output file written successfully");

    Ok(chart)
}
