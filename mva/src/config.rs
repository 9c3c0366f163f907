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

use aixm::Namespaces;

use crate::geom::FEET_PER_METER;
use crate::kml::{Gradient, Palette};

/// Fill alpha of the lowest airspace of a chart.
pub const MIN_ALPHA: u8 = 60;

/// Fill alpha of the highest airspace of a chart.
pub const MAX_ALPHA: u8 = 130;

/// Settings of the chart loader and the KML renderer.
///
/// The default reproduces the published FAA charts: AIXM 5.1 namespaces,
/// 3.281 ft per meter, an alpha gradient from 60 to 130 and a single accent
/// color.
///
/// # Examples
///
/// ```
/// use mva::Config;
///
/// let config = Config::default().with_alpha(80, 80);
/// assert_eq!(config.gradient((3000, 7000)).alpha(7000), 80);
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    /// Namespaces the airspace elements are matched against.
    pub namespaces: Namespaces,
    pub feet_per_meter: f64,
    pub min_alpha: u8,
    pub max_alpha: u8,
    pub palette: Palette,
    /// Width of the polygon outlines.
    pub line_width: f64,
    /// Icon scale of the label points.
    pub label_scale: f64,
    /// Icon of the label points.
    pub label_icon: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespaces: Namespaces::default(),
            feet_per_meter: FEET_PER_METER,
            min_alpha: MIN_ALPHA,
            max_alpha: MAX_ALPHA,
            palette: Palette::default(),
            line_width: 3.0,
            label_scale: 0.1,
            label_icon: "http://maps.google.com/mapfiles/kml/shapes/placemark_circle.png"
                .to_string(),
        }
    }
}

impl Config {
    pub fn with_alpha(mut self, min_alpha: u8, max_alpha: u8) -> Self {
        self.min_alpha = min_alpha;
        self.max_alpha = max_alpha;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_namespaces(mut self, namespaces: Namespaces) -> Self {
        self.namespaces = namespaces;
        self
    }

    /// Converts a floor in feet to the height in meters.
    pub fn feet_to_meters(&self, feet: i32) -> f64 {
        f64::from(feet) / self.feet_per_meter
    }

    /// Returns the alpha gradient over the `(min, max)` floors.
    pub fn gradient(&self, floors: (i32, i32)) -> Gradient {
        Gradient::new(floors, (self.min_alpha, self.max_alpha))
    }
}
