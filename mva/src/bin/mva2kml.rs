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

//! Command-line converter of FAA MVA charts from AIXM XML to KML.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;

use mva::kml::{Color, Palette};
use mva::{Config, MAX_ALPHA, MIN_ALPHA};

#[derive(Parser, Debug)]
#[command(name = "mva2kml", version)]
#[command(about = "Convert a FAA MVA file from XML to KML", long_about = None)]
struct Args {
    /// Input XML file
    input: PathBuf,

    /// Output KML file (if not provided, .kml is appended to the input file name)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fill alpha of the lowest airspace
    #[arg(long, default_value_t = MIN_ALPHA)]
    min_alpha: u8,

    /// Fill alpha of the highest airspace
    #[arg(long, default_value_t = MAX_ALPHA)]
    max_alpha: u8,

    /// Airspace color in KML notation; repeat to cycle through several colors
    #[arg(long = "color", value_name = "AABBGGRR")]
    colors: Vec<Color>,

    /// Log each airspace as it's parsed and rendered
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let mut path = OsString::from(self.input.as_os_str());
            path.push(".kml");
            PathBuf::from(path)
        })
    }

    fn config(&self) -> Config {
        let palette = Palette::new(self.colors.clone()).unwrap_or_default();
        Config::default()
            .with_alpha(self.min_alpha, self.max_alpha)
            .with_palette(palette)
    }
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    if let Err(e) = mva::convert(&args.input, args.output_path(), &args.config()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
