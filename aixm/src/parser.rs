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

use log::{debug, warn};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::{NsReader, Writer};

use crate::error::Error;
use crate::features::Airspace;
use crate::namespaces::Namespaces;
use crate::xml;

/// Streaming iterator over the airspaces of an AIXM document.
///
/// Yields one [`Airspace`] for every time slice of an `Airspace` element
/// that is a child of a `hasMember` element of the document root. Element
/// names are resolved against the [`Namespaces`] the iterator was created
/// with, down to the `posList`, and anything in another namespace is
/// skipped.
///
/// If the document contains `Airspace` elements but none of them matched,
/// the last item is an [`Error::NamespaceMismatch`] naming what was skipped.
/// A document without any airspace yields nothing.
///
/// # Examples
///
/// ```
/// use aixm::Airspaces;
///
/// let xml = br#"
///   <ns8:AIXMBasicMessage
///     xmlns:ns1="http://www.opengis.net/gml/3.2"
///     xmlns:ns3="http://www.aixm.aero/schema/5.1"
///     xmlns:ns8="http://www.aixm.aero/schema/5.1/message">
///     <ns8:hasMember>
///       <ns3:Airspace ns1:id="ABE_1">
///         <ns3:timeSlice>
///           <ns3:AirspaceTimeSlice>
///             <ns3:name>ABE_1</ns3:name>
///             <ns3:geometryComponent>
///               <ns3:AirspaceGeometryComponent>
///                 <ns3:theAirspaceVolume>
///                   <ns3:AirspaceVolume>
///                     <ns3:minimumLimit uom="FT">3000</ns3:minimumLimit>
///                     <ns3:horizontalProjection>
///                       <ns3:Surface>
///                         <ns1:patches>
///                           <ns1:PolygonPatch>
///                             <ns1:exterior>
///                               <ns1:LinearRing>
///                                 <ns1:posList>-75.5 40.5 -75.0 40.5 -75.0 41.0 -75.5 40.5</ns1:posList>
///                               </ns1:LinearRing>
///                             </ns1:exterior>
///                           </ns1:PolygonPatch>
///                         </ns1:patches>
///                       </ns3:Surface>
///                     </ns3:horizontalProjection>
///                   </ns3:AirspaceVolume>
///                 </ns3:theAirspaceVolume>
///               </ns3:AirspaceGeometryComponent>
///             </ns3:geometryComponent>
///           </ns3:AirspaceTimeSlice>
///         </ns3:timeSlice>
///       </ns3:Airspace>
///     </ns8:hasMember>
///   </ns8:AIXMBasicMessage>"#;
///
/// let airspaces: Vec<_> = Airspaces::new(&xml[..])
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(airspaces.len(), 1);
/// assert_eq!(airspaces[0].minimum_limit, 3000);
/// ```
pub struct Airspaces<'a> {
    reader: NsReader<&'a [u8]>,
    namespaces: Namespaces,
    /// Expanded names of the open elements, starting at the root.
    open: Vec<String>,
    /// Airspaces of further time slices of the last matched element.
    pending: std::vec::IntoIter<Airspace>,
    matched: usize,
    skipped: Vec<String>,
    done: bool,
}

impl<'a> Airspaces<'a> {
    /// Creates a new `Airspaces` iterator over an AIXM 5.1 document.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_namespaces(data, Namespaces::default())
    }

    /// Creates a new `Airspaces` iterator matching elements against the
    /// `namespaces` instead of the AIXM 5.1 defaults.
    pub fn with_namespaces(data: &'a [u8], namespaces: Namespaces) -> Self {
        let mut reader = NsReader::from_reader(data);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            namespaces,
            open: Vec::new(),
            pending: Vec::new().into_iter(),
            matched: 0,
            skipped: Vec::new(),
            done: false,
        }
    }

    /// Reads the next event with the namespace URI of its name.
    fn read(&mut self) -> Result<(Option<String>, Event<'a>), Error> {
        let (ns, event) = self.reader.read_resolved_event()?;
        Ok((namespace_uri(ns), event))
    }

    /// Returns the namespace an element of the airspace structure has to be
    /// in, or `None` if the element is not read at all.
    fn expected_namespace(&self, local: &str) -> Option<&str> {
        if AIXM_ELEMENTS.contains(&local) {
            Some(self.namespaces.aixm.as_str())
        } else if GML_ELEMENTS.contains(&local) {
            Some(self.namespaces.gml.as_str())
        } else {
            None
        }
    }

    /// Reads the airspace element started by `start` up to its end and
    /// returns it as XML text.
    ///
    /// Only the elements of the airspace structure that are in their
    /// namespace are kept, written without prefix. Everything else is left
    /// out together with its content.
    fn qualified_subtree(&mut self, start: &BytesStart) -> Result<String, Error> {
        let mut writer = Writer::new(Vec::new());
        write(&mut writer, Event::Start(start.borrow()))?;

        let mut depth = 0usize;
        loop {
            match self.read()? {
                (ns, Event::Start(e)) => {
                    let local = std::str::from_utf8(e.local_name().into_inner())?;
                    if self.is_qualified(ns.as_deref(), local) {
                        depth += 1;
                        write(&mut writer, Event::Start(BytesStart::new(local)))?;
                    } else {
                        self.reader.read_to_end(e.name())?;
                    }
                }
                (ns, Event::Empty(e)) => {
                    let local = std::str::from_utf8(e.local_name().into_inner())?;
                    if self.is_qualified(ns.as_deref(), local) {
                        write(&mut writer, Event::Empty(BytesStart::new(local)))?;
                    }
                }
                (_, Event::End(e)) => {
                    if depth == 0 {
                        write(&mut writer, Event::End(start.to_end()))?;
                        break;
                    }
                    depth -= 1;
                    let local = std::str::from_utf8(e.local_name().into_inner())?;
                    write(&mut writer, Event::End(BytesEnd::new(local)))?;
                }
                (_, event @ (Event::Text(_) | Event::CData(_))) => write(&mut writer, event)?,
                (_, Event::Eof) => return Err(Error::Xml("unexpected end of document".into())),
                _ => {}
            }
        }

        String::from_utf8(writer.into_inner()).map_err(|e| e.utf8_error().into())
    }

    /// Returns `true` if the element is part of the airspace structure and
    /// in its namespace.
    fn is_qualified(&self, ns: Option<&str>, local: &str) -> bool {
        match self.expected_namespace(local) {
            Some(expected) if ns == Some(expected) => true,
            Some(expected) => {
                debug!("ignoring {} outside of {expected}", expanded_name(ns, local));
                false
            }
            None => false,
        }
    }
}

/// Local names of the elements read from the AIXM namespace.
const AIXM_ELEMENTS: &[&str] = &[
    "timeSlice",
    "AirspaceTimeSlice",
    "name",
    "geometryComponent",
    "AirspaceGeometryComponent",
    "theAirspaceVolume",
    "AirspaceVolume",
    "minimumLimit",
    "horizontalProjection",
    "Surface",
];

/// Local names of the elements read from the GML namespace.
const GML_ELEMENTS: &[&str] = &["patches", "PolygonPatch", "exterior", "LinearRing", "posList"];

impl<'a> Iterator for Airspaces<'a> {
    type Item = Result<Airspace, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(arsp) = self.pending.next() {
            return Some(Ok(arsp));
        }

        if self.done {
            return None;
        }

        loop {
            let (ns, event) = match self.read() {
                Ok(read) => read,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };

            let (e, empty) = match event {
                Event::Start(e) => (e, false),
                Event::Empty(e) => (e, true),
                Event::End(_) => {
                    self.open.pop();
                    continue;
                }
                Event::Eof => {
                    self.done = true;
                    if self.matched == 0 && !self.skipped.is_empty() {
                        return Some(Err(Error::NamespaceMismatch {
                            expected: expanded_name(Some(&self.namespaces.aixm), "Airspace"),
                            found: std::mem::take(&mut self.skipped),
                        }));
                    }
                    return None;
                }
                _ => continue,
            };

            let local = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
            let name = expanded_name(ns.as_deref(), &local);

            if local != "Airspace" {
                if !empty {
                    self.open.push(name);
                }
                continue;
            }

            // only root > hasMember > Airspace is a chart member
            let member = expanded_name(Some(&self.namespaces.message), "hasMember");
            if self.open.len() != 2
                || self.open[1] != member
                || ns.as_deref() != Some(self.namespaces.aixm.as_str())
            {
                let mut path = self.open.join(" > ");
                if !path.is_empty() {
                    path.push_str(" > ");
                }
                path.push_str(&name);
                warn!("skipping airspace element {path}");
                if !self.skipped.contains(&path) {
                    self.skipped.push(path);
                }
                if !empty {
                    if let Err(e) = self.reader.read_to_end(e.name()) {
                        self.done = true;
                        return Some(Err(e.into()));
                    }
                }
                continue;
            }

            self.matched += 1;

            if empty {
                return Some(Err(Error::MissingField("timeSlice")));
            }

            let result = self.qualified_subtree(&e).and_then(|xml| {
                let x: xml::AirspaceXml = quick_xml::de::from_str(&xml)?;
                airspaces_from(x)
            });

            match result {
                Ok(airspaces) => {
                    for arsp in &airspaces {
                        debug!(
                            "parsed airspace {} at {} ft with {} positions",
                            arsp.name,
                            arsp.minimum_limit,
                            arsp.exterior.len()
                        );
                    }
                    self.pending = airspaces.into_iter();
                    // an airspace has at least one time slice
                    if let Some(arsp) = self.pending.next() {
                        return Some(Ok(arsp));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Writes `event`, reporting a failure as XML error.
fn write(writer: &mut Writer<Vec<u8>>, event: Event) -> Result<(), Error> {
    writer
        .write_event(event)
        .map_err(|e| Error::Xml(e.to_string()))
}

/// Returns the namespace URI an element name was resolved to.
fn namespace_uri(ns: ResolveResult) -> Option<String> {
    match ns {
        ResolveResult::Bound(Namespace(uri)) => Some(String::from_utf8_lossy(uri).into_owned()),
        _ => None,
    }
}

/// Formats an element name in Clark notation, e.g. `{http://...}Airspace`.
fn expanded_name(ns: Option<&str>, local: &str) -> String {
    match ns {
        Some(ns) => format!("{{{ns}}}{local}"),
        None => local.to_string(),
    }
}

/// Strips the `uuid.` prefix from a `gml:id` attribute value.
fn strip_uuid_prefix(id: &str) -> &str {
    id.strip_prefix("uuid.").unwrap_or(id)
}

/// Parses a `gml:posList` text content into pairs of values in document
/// order.
///
/// The trimmed text is split on single spaces. An odd number of values is
/// rejected before any value is parsed, so `"1.0 2.0 x"` reports the count
/// and not the bad token.
///
/// # Examples
///
/// ```
/// let pairs = aixm::parse_pos_list("-75.5 40.5 -75.0 41.0").unwrap();
/// assert_eq!(pairs, vec![(-75.5, 40.5), (-75.0, 41.0)]);
///
/// assert!(aixm::parse_pos_list("1.0 2.0 3.0").is_err());
/// ```
pub fn parse_pos_list(text: &str) -> Result<Vec<(f64, f64)>, Error> {
    let tokens: Vec<&str> = text.trim().split(' ').collect();
    if tokens.len() % 2 != 0 {
        return Err(Error::OddCoordinateCount(tokens.len()));
    }

    let values = tokens
        .iter()
        .map(|token| {
            token.parse::<f64>().map_err(|_| Error::InvalidValue {
                field: "posList",
                value: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(values.chunks_exact(2).map(|c| (c[0], c[1])).collect())
}

// ---------------------------------------------------------------------------
// Conversion from the XML struct to the public airspace type
// ---------------------------------------------------------------------------

/// Converts an airspace element into one [`Airspace`] per time slice, in
/// document order.
fn airspaces_from(x: xml::AirspaceXml) -> Result<Vec<Airspace>, Error> {
    if x.time_slices.is_empty() {
        return Err(Error::MissingField("timeSlice"));
    }

    let uuid = x.id.as_deref().map(strip_uuid_prefix).map(str::to_string);
    x.time_slices
        .into_iter()
        .map(|ts| {
            let ts = ts.inner.ok_or(Error::MissingField("AirspaceTimeSlice"))?;
            time_slice_airspace(uuid.clone(), ts)
        })
        .collect()
}

fn time_slice_airspace(uuid: Option<String>, ts: xml::ArspTimeSlice) -> Result<Airspace, Error> {
    let name = ts.name.ok_or(Error::MissingField("name"))?;

    let volume = ts
        .geometry_components
        .into_iter()
        .next()
        .and_then(|gc| gc.inner)
        .and_then(|gc| gc.the_airspace_volume)
        .and_then(|tav| tav.volume)
        .ok_or(Error::MissingField("AirspaceVolume"))?;

    let limit = volume
        .minimum_limit
        .and_then(|l| l.value)
        .ok_or(Error::MissingField("minimumLimit"))?;
    let minimum_limit = limit
        .trim()
        .parse()
        .map_err(|_| Error::InvalidValue {
            field: "minimumLimit",
            value: limit.clone(),
        })?;

    let pos_list = volume
        .horizontal_projection
        .and_then(|hp| hp.surface)
        .and_then(|s| s.patches)
        .and_then(|p| p.polygon_patch)
        .and_then(|pp| pp.exterior)
        .and_then(|ext| ext.linear_ring)
        .and_then(|r| r.pos_list)
        .ok_or(Error::MissingField("posList"))?;

    Ok(Airspace {
        uuid,
        name,
        minimum_limit,
        exterior: parse_pos_list(&pos_list)?,
    })
}
