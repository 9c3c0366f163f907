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

//! Colors and the floor gradient of the rendered airspaces.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// KML color with an alpha channel.
///
/// KML writes colors as `aabbggrr` hex digits, i.e. alpha first and red
/// last. [`Display`] and [`FromStr`] use that notation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub alpha: u8,
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Color {
    /// The slate blue in which MVA sectors are drawn. It stays visible over
    /// the water bodies of VFR charts.
    pub const ACCENT: Color = Color::from_abgr(0xFFD27878);

    /// Creates a color from a `0xaabbggrr` value.
    pub const fn from_abgr(value: u32) -> Self {
        Self {
            alpha: (value >> 24) as u8,
            blue: (value >> 16) as u8,
            green: (value >> 8) as u8,
            red: value as u8,
        }
    }

    /// Returns the same color with another alpha.
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02X}{:02X}{:02X}{:02X}",
            self.alpha, self.blue, self.green, self.red
        )
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 8 {
            return Err(format!("expected 8 hex digits (aabbggrr), got {s:?}"));
        }

        u32::from_str_radix(s, 16)
            .map(Self::from_abgr)
            .map_err(|_| format!("invalid hex color {s:?}"))
    }
}

/// Colors cycled through by the rendered airspaces.
#[derive(Clone, PartialEq, Debug)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette of the `colors` or `None` if there are none.
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        (!colors.is_empty()).then_some(Self { colors })
    }

    /// Returns the color of the airspace drawn at `index`.
    pub fn color_at(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![Color::ACCENT],
        }
    }
}

/// Fill transparency ramp from the lowest to the highest floor of a chart.
///
/// Lower airspaces are drawn more transparent, so the fill gets more opaque
/// as the minimum vectoring altitude rises.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Gradient {
    min_floor: i32,
    max_floor: i32,
    min_alpha: u8,
    max_alpha: u8,
}

impl Gradient {
    pub fn new(floors: (i32, i32), alphas: (u8, u8)) -> Self {
        Self {
            min_floor: floors.0,
            max_floor: floors.1,
            min_alpha: alphas.0,
            max_alpha: alphas.1,
        }
    }

    /// Returns the fill alpha of an airspace at `floor`.
    ///
    /// If all airspaces share one floor, the midpoint of the alpha range is
    /// used. Otherwise the alpha is interpolated linearly and truncated.
    pub fn alpha(&self, floor: i32) -> u8 {
        let min_alpha = f64::from(self.min_alpha);
        let max_alpha = f64::from(self.max_alpha);

        if self.max_floor == self.min_floor {
            return ((min_alpha + max_alpha) / 2.0) as u8;
        }

        let ratio = (i64::from(floor) - i64::from(self.min_floor)) as f64
            / (i64::from(self.max_floor) - i64::from(self.min_floor)) as f64;

        (min_alpha + (max_alpha - min_alpha) * ratio) as u8
    }
}
