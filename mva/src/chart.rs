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

//! MVA charts loaded from AIXM documents.

use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::Path;

use filetime::FileTime;
use log::debug;

use crate::config::Config;
use crate::error::Error;
use crate::geom::{self, Position};

/// One sector of an MVA chart.
///
/// The sector is enclosed by the `vertexes` which all lie at the `height` of
/// the `floor`.
#[derive(Clone, PartialEq, Debug)]
pub struct Airspace {
    pub name: String,
    /// Minimum vectoring altitude in feet MSL.
    pub floor: i32,
    /// Height of the floor in meters above MSL.
    pub height: f64,
    pub vertexes: Vec<Position>,
}

impl Airspace {
    /// Creates the airspace from its AIXM representation.
    ///
    /// MVA charts list the positions as longitude followed by latitude.
    pub fn from_aixm(arsp: aixm::Airspace, config: &Config) -> Self {
        let height = config.feet_to_meters(arsp.minimum_limit);
        let vertexes = arsp
            .exterior
            .iter()
            .map(|&(longitude, latitude)| Position::new(latitude, longitude, height))
            .collect();

        Self {
            name: arsp.name,
            floor: arsp.minimum_limit,
            height,
            vertexes,
        }
    }

    /// Returns a point inside the airspace at its height.
    pub fn representative_point(&self) -> Option<Position> {
        geom::representative_point(&self.vertexes)
    }
}

impl Display for Airspace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ft", self.name, self.floor)
    }
}

/// Access and modification time of a file.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct FileTimes {
    pub accessed: FileTime,
    pub modified: FileTime,
}

impl FileTimes {
    /// Reads the times of the file at `path`.
    pub fn of(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        Ok(Self {
            accessed: FileTime::from_last_access_time(&metadata),
            modified: FileTime::from_last_modification_time(&metadata),
        })
    }

    /// Sets the times on the file at `path`.
    pub fn apply(&self, path: &Path) -> io::Result<()> {
        filetime::set_file_times(path, self.accessed, self.modified)
    }
}

/// An MVA chart with its airspaces sorted by ascending floor.
///
/// Drawing the airspaces in this order puts higher sectors on top of lower
/// ones. Airspaces sharing a floor keep their document order.
#[derive(Clone, Debug)]
pub struct Chart {
    pub airspaces: Vec<Airspace>,
    /// Times of the file the chart was loaded from.
    pub file_times: Option<FileTimes>,
}

impl Chart {
    /// Loads the chart from the AIXM file at `path`.
    ///
    /// The times of the file are kept so that the KML written from this chart
    /// can carry the same times.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mva::{Chart, Config};
    ///
    /// let chart = Chart::load("ABE_MVA_FUS3_2022.xml", &Config::default()).unwrap();
    /// for airspace in &chart.airspaces {
    ///     println!("{airspace}");
    /// }
    /// ```
    pub fn load(path: impl AsRef<Path>, config: &Config) -> Result<Self, Error> {
        let path = path.as_ref();
        // taken before reading so the access time is not our own
        let file_times = FileTimes::of(path).map_err(Error::io(path))?;
        let data = fs::read(path).map_err(Error::io(path))?;

        let mut chart = Self::from_bytes(&data, config)?;
        chart.file_times = Some(file_times);
        Ok(chart)
    }

    /// Parses the chart from an AIXM document in memory.
    pub fn from_bytes(data: &[u8], config: &Config) -> Result<Self, Error> {
        let mut airspaces = aixm::Airspaces::with_namespaces(data, config.namespaces.clone())
            .map(|arsp| arsp.map(|arsp| Airspace::from_aixm(arsp, config)))
            .collect::<Result<Vec<_>, _>>()?;

        airspaces.sort_by_key(|arsp| arsp.floor);
        debug!("sorted {} airspaces by floor", airspaces.len());

        Ok(Self {
            airspaces,
            file_times: None,
        })
    }

    /// Returns the lowest and highest floor or `None` if the chart is empty.
    pub fn floor_range(&self) -> Option<(i32, i32)> {
        let min = self.airspaces.iter().map(|arsp| arsp.floor).min()?;
        let max = self.airspaces.iter().map(|arsp| arsp.floor).max()?;
        Some((min, max))
    }
}
