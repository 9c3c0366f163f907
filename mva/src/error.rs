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

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The chart doesn't match the expected AIXM structure.
    Aixm(aixm::Error),
    /// Reading the chart or writing the KML failed.
    Io { path: PathBuf, source: io::Error },
    /// The KML document couldn't be serialized.
    Kml(String),
    /// The polygon of the named airspace has no interior to put a label on.
    DegenerateAirspace(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aixm(e) => write!(f, "invalid AIXM chart: {e}"),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Kml(e) => write!(f, "KML error: {e}"),
            Self::DegenerateAirspace(name) => {
                write!(f, "airspace {name} has no representative point")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Aixm(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<aixm::Error> for Error {
    fn from(e: aixm::Error) -> Self {
        Self::Aixm(e)
    }
}

impl Error {
    /// Returns a closure wrapping an I/O error on `path`.
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
