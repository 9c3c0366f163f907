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

//! Geographic positions and the geometry needed to label an airspace.

use std::fmt::{Display, Formatter};

use geo::{Coord, InteriorPoint, LineString, Polygon};

/// Feet in one meter as used for MVA chart heights.
pub const FEET_PER_METER: f64 = 3.281;

/// Converts feet to meters using [`FEET_PER_METER`].
pub fn feet_to_meters(feet: i32) -> f64 {
    f64::from(feet) / FEET_PER_METER
}

/// Position of a vertex with its height in meters above MSL.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Position {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,

    /// Height in meters above mean sea level.
    pub height: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64, height: f64) -> Self {
        Self {
            latitude,
            longitude,
            height,
        }
    }

    /// Comma separated `long,lat,height` as used in KML coordinates.
    pub fn comma_z(&self) -> String {
        format!("{},{},{}", self.longitude, self.latitude, self.height)
    }

    /// The position as `(long, lat, height)`.
    pub fn tuple_z(&self) -> (f64, f64, f64) {
        (self.longitude, self.latitude, self.height)
    }
}

impl From<Position> for Coord<f64> {
    fn from(p: Position) -> Self {
        Coord {
            x: p.longitude,
            y: p.latitude,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({0}, {1}) {2:.0} m", self.latitude, self.longitude, self.height)
    }
}

/// Returns a point inside the polygon enclosed by the `vertexes`.
///
/// Unlike the centroid, the point lies within the polygon even if it's
/// concave. The height is taken over from the first vertex since all vertexes
/// of an airspace share one height. Returns `None` for an empty ring.
pub fn representative_point(vertexes: &[Position]) -> Option<Position> {
    let height = vertexes.first()?.height;
    let ring: LineString<f64> = vertexes.iter().map(|&p| Coord::from(p)).collect();
    let point = Polygon::new(ring, vec![]).interior_point()?;
    Some(Position::new(point.y(), point.x(), height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Contains;

    fn ring(coords: &[(f64, f64)], height: f64) -> Vec<Position> {
        coords
            .iter()
            .map(|&(lon, lat)| Position::new(lat, lon, height))
            .collect()
    }

    #[test]
    fn feet_to_meters_uses_chart_ratio() {
        assert_eq!(feet_to_meters(0), 0.0);
        assert!((feet_to_meters(3281) - 1000.0).abs() < 1e-9);
        assert_eq!(feet_to_meters(3000), 3000.0 / 3.281);
    }

    #[test]
    fn serializes_longitude_first() {
        let p = Position::new(40.5, -75.25, 914.5);
        assert_eq!(p.comma_z(), "-75.25,40.5,914.5");
        assert_eq!(p.tuple_z(), (-75.25, 40.5, 914.5));
    }

    #[test]
    fn representative_point_of_square() {
        let square = ring(
            &[(-75.5, 40.5), (-75.0, 40.5), (-75.0, 41.0), (-75.5, 41.0), (-75.5, 40.5)],
            100.0,
        );
        let p = representative_point(&square).unwrap();
        assert!(p.longitude > -75.5 && p.longitude < -75.0);
        assert!(p.latitude > 40.5 && p.latitude < 41.0);
        assert_eq!(p.height, 100.0);
    }

    #[test]
    fn representative_point_lies_inside_concave_polygon() {
        // A "U" shape whose centroid falls into the notch.
        let coords = [
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 3.0),
            (2.0, 3.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
            (0.0, 0.0),
        ];
        let polygon = Polygon::new(LineString::from(coords.to_vec()), vec![]);
        let p = representative_point(&ring(&coords, 0.0)).unwrap();
        assert!(polygon.contains(&geo::Point::new(p.longitude, p.latitude)));
    }

    #[test]
    fn empty_ring_has_no_representative_point() {
        assert_eq!(representative_point(&[]), None);
    }
}
