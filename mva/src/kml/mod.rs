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

//! KML rendering of MVA charts.
//!
//! Every airspace becomes two placemarks: an extruded polygon floating at
//! the floor height and a point at a representative position inside the
//! polygon which is labeled with the floor. Placemarks follow the chart
//! order, so higher floors are drawn last.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, info, warn};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::chart::{Airspace, Chart};
use crate::config::Config;
use crate::error::Error;

mod style;

pub use style::{Color, Gradient, Palette};

const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Writes the chart as KML document to `path`.
///
/// The document is named after the file stem of `path`. It's serialized
/// completely before the file is created, so a failing chart never leaves a
/// partial file behind. If the chart was loaded from a file, the times of
/// that file are set on the written document which makes repeated
/// conversions of an unchanged chart reproducible.
pub fn render(chart: &Chart, path: impl AsRef<Path>, config: &Config) -> Result<(), Error> {
    let path = path.as_ref();

    let mut data = Vec::new();
    to_writer(chart, &document_name(path), config, &mut data)?;

    fs::write(path, &data).map_err(Error::io(path))?;
    if let Some(times) = &chart.file_times {
        times.apply(path).map_err(Error::io(path))?;
    }

    info!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

/// Writes the chart as KML document named `name` into the `out` writer.
pub fn to_writer<W: Write>(
    chart: &Chart,
    name: &str,
    config: &Config,
    out: W,
) -> Result<(), Error> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);

    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    emit(
        &mut writer,
        Event::Start(BytesStart::new("kml").with_attributes([("xmlns", KML_NAMESPACE)])),
    )?;
    start(&mut writer, "Document")?;
    text_element(&mut writer, "name", name)?;

    match chart.floor_range() {
        Some(floors) => {
            let gradient = config.gradient(floors);
            for (index, airspace) in chart.airspaces.iter().enumerate() {
                let color = config.palette.color_at(index);
                let alpha = gradient.alpha(airspace.floor);
                debug!("rendering {airspace} with alpha {alpha}");

                polygon(&mut writer, airspace, color, alpha, config)?;
                label(&mut writer, airspace, config)?;
            }
        }
        None => warn!("chart has no airspaces, writing an empty document"),
    }

    end(&mut writer, "Document")?;
    end(&mut writer, "kml")?;
    Ok(())
}

/// Returns the document name for a KML file at `path`, which is its file
/// name without the final extension.
pub fn document_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn polygon<W: Write>(
    writer: &mut Writer<W>,
    airspace: &Airspace,
    color: Color,
    alpha: u8,
    config: &Config,
) -> Result<(), Error> {
    start(writer, "Placemark")?;
    text_element(writer, "name", &airspace.to_string())?;

    start(writer, "Style")?;
    start(writer, "LineStyle")?;
    text_element(writer, "color", &color.to_string())?;
    text_element(writer, "width", &config.line_width.to_string())?;
    end(writer, "LineStyle")?;
    start(writer, "PolyStyle")?;
    text_element(writer, "color", &color.with_alpha(alpha).to_string())?;
    end(writer, "PolyStyle")?;
    end(writer, "Style")?;

    let coordinates = airspace
        .vertexes
        .iter()
        .map(|v| v.comma_z())
        .collect::<Vec<_>>()
        .join(" ");

    start(writer, "Polygon")?;
    text_element(writer, "extrude", "1")?;
    text_element(writer, "altitudeMode", "absolute")?;
    start(writer, "outerBoundaryIs")?;
    start(writer, "LinearRing")?;
    text_element(writer, "coordinates", &coordinates)?;
    end(writer, "LinearRing")?;
    end(writer, "outerBoundaryIs")?;
    end(writer, "Polygon")?;

    end(writer, "Placemark")
}

fn label<W: Write>(writer: &mut Writer<W>, airspace: &Airspace, config: &Config) -> Result<(), Error> {
    let point = airspace
        .representative_point()
        .ok_or_else(|| Error::DegenerateAirspace(airspace.name.clone()))?;

    start(writer, "Placemark")?;
    text_element(writer, "name", &airspace.floor.to_string())?;

    // The label text is what matters, the icon is kept tiny.
    start(writer, "Style")?;
    start(writer, "IconStyle")?;
    text_element(writer, "scale", &config.label_scale.to_string())?;
    start(writer, "Icon")?;
    text_element(writer, "href", &config.label_icon)?;
    end(writer, "Icon")?;
    end(writer, "IconStyle")?;
    end(writer, "Style")?;

    start(writer, "Point")?;
    text_element(writer, "altitudeMode", "absolute")?;
    text_element(writer, "coordinates", &point.comma_z())?;
    end(writer, "Point")?;

    end(writer, "Placemark")
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event) -> Result<(), Error> {
    writer
        .write_event(event)
        .map_err(|e| Error::Kml(e.to_string()))
}

fn start<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), Error> {
    emit(writer, Event::Start(BytesStart::new(name)))
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), Error> {
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<(), Error> {
    start(writer, name)?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    end(writer, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Position;

    fn airspace(name: &str, floor: i32) -> Airspace {
        let config = Config::default();
        let height = config.feet_to_meters(floor);
        let vertexes = [(-75.5, 40.5), (-75.0, 40.5), (-75.0, 41.0), (-75.5, 41.0)]
            .iter()
            .map(|&(lon, lat)| Position::new(lat, lon, height))
            .collect();

        Airspace {
            name: name.to_string(),
            floor,
            height,
            vertexes,
        }
    }

    fn kml(chart: &Chart, config: &Config) -> String {
        let mut out = Vec::new();
        to_writer(chart, "ABE_MVA", config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_polygon_and_label_per_airspace() {
        let chart = Chart {
            airspaces: vec![airspace("LOW", 3000), airspace("HIGH", 7000)],
            file_times: None,
        };
        let kml = kml(&chart, &Config::default());

        assert!(kml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(kml.contains(r#"<kml xmlns="http://www.opengis.net/kml/2.2">"#));
        assert!(kml.contains("<name>ABE_MVA</name>"));
        assert_eq!(kml.matches("<Polygon>").count(), 2);
        assert_eq!(kml.matches("<Point>").count(), 2);
        assert_eq!(kml.matches("<width>3</width>").count(), 2);
        assert_eq!(kml.matches("<extrude>1</extrude>").count(), 2);
        assert!(kml.contains("<name>LOW - 3000 ft</name>"));
        assert!(kml.contains("<name>3000</name>"));
        assert!(kml.contains("<name>7000</name>"));
    }

    #[test]
    fn fills_follow_the_floor_gradient() {
        let chart = Chart {
            airspaces: vec![airspace("LOW", 3000), airspace("HIGH", 7000)],
            file_times: None,
        };
        let kml = kml(&chart, &Config::default());

        let low = kml.find("<color>3CD27878</color>").unwrap();
        let high = kml.find("<color>82D27878</color>").unwrap();
        assert!(low < high);
        assert_eq!(kml.matches("<color>FFD27878</color>").count(), 2);
    }

    #[test]
    fn single_floor_uses_midpoint_alpha() {
        let chart = Chart {
            airspaces: vec![airspace("A", 5000), airspace("B", 5000)],
            file_times: None,
        };
        let kml = kml(&chart, &Config::default());

        // (60 + 130) / 2 = 95 = 0x5F
        assert_eq!(kml.matches("<color>5FD27878</color>").count(), 2);
    }

    #[test]
    fn outlines_cycle_through_palette() {
        let red = Color::from_abgr(0xFF0000FF);
        let green = Color::from_abgr(0xFF00FF00);
        let config = Config::default().with_palette(Palette::new(vec![red, green]).unwrap());
        let chart = Chart {
            airspaces: vec![airspace("A", 1000), airspace("B", 2000), airspace("C", 3000)],
            file_times: None,
        };
        let kml = kml(&chart, &config);

        assert_eq!(kml.matches("<color>FF0000FF</color>").count(), 2);
        assert_eq!(kml.matches("<color>FF00FF00</color>").count(), 1);
    }

    #[test]
    fn coordinates_are_longitude_first_at_height() {
        let chart = Chart {
            airspaces: vec![airspace("A", 3281)],
            file_times: None,
        };
        let kml = kml(&chart, &Config::default());
        let height = Config::default().feet_to_meters(3281);

        assert!(kml.contains(&format!("-75.5,40.5,{height} -75,40.5,{height}")));
        assert_eq!(kml.matches("<altitudeMode>absolute</altitudeMode>").count(), 2);
    }

    #[test]
    fn empty_chart_renders_empty_document() {
        let chart = Chart {
            airspaces: Vec::new(),
            file_times: None,
        };
        let kml = kml(&chart, &Config::default());

        assert!(kml.contains("<name>ABE_MVA</name>"));
        assert!(!kml.contains("<Placemark>"));
    }

    #[test]
    fn names_are_escaped() {
        let chart = Chart {
            airspaces: vec![airspace("A&B", 3000)],
            file_times: None,
        };
        let kml = kml(&chart, &Config::default());
        assert!(kml.contains("<name>A&amp;B - 3000 ft</name>"));
    }

    #[test]
    fn degenerate_airspace_is_an_error() {
        let mut arsp = airspace("EMPTY", 3000);
        arsp.vertexes.clear();
        let chart = Chart {
            airspaces: vec![arsp],
            file_times: None,
        };

        let mut out = Vec::new();
        let result = to_writer(&chart, "ABE_MVA", &Config::default(), &mut out);
        assert!(matches!(result, Err(Error::DegenerateAirspace(name)) if name == "EMPTY"));
    }

    #[test]
    fn document_name_strips_final_extension() {
        assert_eq!(document_name(Path::new("out/ABE_MVA.kml")), "ABE_MVA");
        assert_eq!(document_name(Path::new("ABE_MVA.xml.kml")), "ABE_MVA.xml");
        assert_eq!(document_name(Path::new("ABE_MVA")), "ABE_MVA");
    }
}
