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

use std::fs;
use std::path::PathBuf;

use filetime::FileTime;
use tempfile::TempDir;

use mva::{Chart, Config, Error, FileTimes};

const SQUARE: &str = "-75.5 40.5 -75.0 40.5 -75.0 41.0 -75.5 41.0 -75.5 40.5";

/// Builds an AIXM message declaring the default namespaces.
fn message(members: &[String]) -> String {
    let xmlns: String = aixm::Namespaces::default()
        .iter()
        .map(|(prefix, uri)| format!(r#" xmlns:{prefix}="{uri}""#))
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<message:AIXMBasicMessage{xmlns} gml:id="ABE_MVA_FUS3_2022">
{}
</message:AIXMBasicMessage>"#,
        members.concat()
    )
}

fn member(name: Option<&str>, floor: i32, pos_list: &str) -> String {
    let name = name
        .map(|n| format!("<aixm:name>{n}</aixm:name>"))
        .unwrap_or_default();

    format!(
        r#"<message:hasMember>
  <aixm:Airspace gml:id="{floor}">
    <aixm:timeSlice>
      <aixm:AirspaceTimeSlice>
        <aixm:interpretation>BASELINE</aixm:interpretation>
        {name}
        <aixm:geometryComponent>
          <aixm:AirspaceGeometryComponent>
            <aixm:theAirspaceVolume>
              <aixm:AirspaceVolume>
                <aixm:minimumLimit uom="FT">{floor}</aixm:minimumLimit>
                <aixm:horizontalProjection>
                  <aixm:Surface>
                    <gml:patches>
                      <gml:PolygonPatch>
                        <gml:exterior>
                          <gml:LinearRing>
                            <gml:posList>{pos_list}</gml:posList>
                          </gml:LinearRing>
                        </gml:exterior>
                      </gml:PolygonPatch>
                    </gml:patches>
                  </aixm:Surface>
                </aixm:horizontalProjection>
              </aixm:AirspaceVolume>
            </aixm:theAirspaceVolume>
          </aixm:AirspaceGeometryComponent>
        </aixm:geometryComponent>
      </aixm:AirspaceTimeSlice>
    </aixm:timeSlice>
  </aixm:Airspace>
</message:hasMember>
"#
    )
}

/// Writes the chart into a temporary directory and returns the input and
/// output paths.
fn setup(dir: &TempDir, xml: &str) -> (PathBuf, PathBuf) {
    let input = dir.path().join("ABE_MVA_FUS3_2022.xml");
    let output = dir.path().join("ABE_MVA_FUS3_2022.kml");
    fs::write(&input, xml).unwrap();
    (input, output)
}

fn two_sectors() -> String {
    // the higher sector comes first to check the sorting
    message(&[
        member(Some("ABE_HIGH"), 7000, SQUARE),
        member(Some("ABE_LOW"), 3000, SQUARE),
    ])
}

#[test]
fn converts_two_sectors() {
    let dir = TempDir::new().unwrap();
    let (input, output) = setup(&dir, &two_sectors());

    let chart = mva::convert(&input, &output, &Config::default()).unwrap();
    assert_eq!(chart.airspaces.len(), 2);

    let kml = fs::read_to_string(&output).unwrap();
    assert!(kml.contains("<name>ABE_MVA_FUS3_2022</name>"));
    assert_eq!(kml.matches("<Polygon>").count(), 2);
    assert_eq!(kml.matches("<Point>").count(), 2);
    assert_eq!(kml.matches("<width>3</width>").count(), 2);

    // lowest floor first with the minimum alpha, highest last with the maximum
    let low = kml.find("<name>ABE_LOW - 3000 ft</name>").unwrap();
    let low_fill = kml.find("<color>3CD27878</color>").unwrap();
    let low_label = kml.find("<name>3000</name>").unwrap();
    let high = kml.find("<name>ABE_HIGH - 7000 ft</name>").unwrap();
    let high_fill = kml.find("<color>82D27878</color>").unwrap();
    let high_label = kml.find("<name>7000</name>").unwrap();
    assert!(low < low_fill && low_fill < low_label);
    assert!(low_label < high && high < high_fill && high_fill < high_label);
}

#[test]
fn chart_is_sorted_by_floor() {
    let xml = message(&[
        member(Some("C"), 5000, SQUARE),
        member(Some("A"), 2000, SQUARE),
        member(Some("D"), 9000, SQUARE),
        member(Some("B"), 5000, SQUARE),
    ]);
    let chart = Chart::from_bytes(xml.as_bytes(), &Config::default()).unwrap();

    let names: Vec<_> = chart.airspaces.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["A", "C", "B", "D"]);
    assert!(chart.airspaces.windows(2).all(|w| w[0].floor <= w[1].floor));
}

#[test]
fn vertex_heights_follow_the_floor() {
    let xml = message(&[member(Some("ABE"), 3000, SQUARE)]);
    let chart = Chart::from_bytes(xml.as_bytes(), &Config::default()).unwrap();

    let arsp = &chart.airspaces[0];
    assert_eq!(arsp.vertexes.len(), 5);
    assert!(arsp
        .vertexes
        .iter()
        .all(|v| v.height == mva::geom::feet_to_meters(3000)));
    assert_eq!(arsp.vertexes[0].tuple_z().0, -75.5);
    assert_eq!(arsp.vertexes[0].tuple_z().1, 40.5);
}

#[test]
fn output_carries_input_times() {
    let dir = TempDir::new().unwrap();
    let (input, output) = setup(&dir, &two_sectors());
    let modified = FileTime::from_unix_time(1_600_000_000, 0);
    filetime::set_file_times(&input, modified, modified).unwrap();

    mva::convert(&input, &output, &Config::default()).unwrap();

    let input_times = FileTimes::of(&input).unwrap();
    let output_times = FileTimes::of(&output).unwrap();
    assert_eq!(output_times.modified, modified);
    assert_eq!(output_times, input_times);
}

#[test]
fn access_time_is_taken_before_reading() {
    let dir = TempDir::new().unwrap();
    let (input, _) = setup(&dir, &two_sectors());
    let accessed = FileTime::from_unix_time(1_000_000_000, 0);
    let modified = FileTime::from_unix_time(1_600_000_000, 0);
    filetime::set_file_times(&input, accessed, modified).unwrap();

    let chart = Chart::load(&input, &Config::default()).unwrap();

    let times = chart.file_times.unwrap();
    assert_eq!(times.accessed, accessed);
    assert_eq!(times.modified, modified);
}

#[test]
fn conversion_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let (input, output) = setup(&dir, &two_sectors());

    mva::convert(&input, &output, &Config::default()).unwrap();
    let first = fs::read(&output).unwrap();
    let first_times = FileTimes::of(&output).unwrap();

    mva::convert(&input, &output, &Config::default()).unwrap();
    let second = fs::read(&output).unwrap();
    let second_times = FileTimes::of(&output).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_times.modified, second_times.modified);
}

#[test]
fn odd_coordinates_write_nothing() {
    let dir = TempDir::new().unwrap();
    let xml = message(&[
        member(Some("GOOD"), 3000, SQUARE),
        member(Some("BAD"), 4000, "1.0 2.0 3.0"),
    ]);
    let (input, output) = setup(&dir, &xml);

    let result = mva::convert(&input, &output, &Config::default());
    assert!(matches!(
        result,
        Err(Error::Aixm(aixm::Error::OddCoordinateCount(3)))
    ));
    assert!(!output.exists());
}

#[test]
fn missing_name_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let xml = message(&[
        member(Some("GOOD"), 3000, SQUARE),
        member(None, 4000, SQUARE),
    ]);
    let (input, output) = setup(&dir, &xml);

    let result = mva::convert(&input, &output, &Config::default());
    assert!(matches!(
        result,
        Err(Error::Aixm(aixm::Error::MissingField("name")))
    ));
    assert!(!output.exists());
}

#[test]
fn empty_chart_writes_empty_document() {
    let dir = TempDir::new().unwrap();
    let (input, output) = setup(&dir, &message(&[]));

    let chart = mva::convert(&input, &output, &Config::default()).unwrap();
    assert!(chart.airspaces.is_empty());

    let kml = fs::read_to_string(&output).unwrap();
    assert!(kml.contains("<Document>"));
    assert!(!kml.contains("<Placemark>"));
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.xml");
    let output = dir.path().join("missing.kml");

    match mva::convert(&input, &output, &Config::default()) {
        Err(Error::Io { path, .. }) => assert_eq!(path, input),
        other => panic!("expected I/O error, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let (input, _) = setup(&dir, &two_sectors());
    let output = dir.path().join("no_such_dir").join("out.kml");

    match mva::convert(&input, &output, &Config::default()) {
        Err(Error::Io { path, .. }) => assert_eq!(path, output),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn foreign_schema_is_not_an_empty_chart() {
    let xml = message(&[member(Some("ABE"), 3000, SQUARE)]).replace(
        r#"xmlns:aixm="http://www.aixm.aero/schema/5.1""#,
        r#"xmlns:aixm="http://www.aixm.aero/schema/5.2""#,
    );

    let result = Chart::from_bytes(xml.as_bytes(), &Config::default());
    assert!(matches!(
        result,
        Err(Error::Aixm(aixm::Error::NamespaceMismatch { .. }))
    ));
}

