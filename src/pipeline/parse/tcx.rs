use chrono::{DateTime, FixedOffset};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::ParseError;
use crate::pipeline::parse::{ParseOptions, Parser};
use crate::types::activity::{RawActivity, RawTrackpoint};

const FEET_PER_METER: f64 = 3.280839895;
const METERS_PER_MILE: f64 = 1609.344;

pub struct TcxParser;

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Id,
    Time,
    Lat,
    Lng,
    Altitude,
    Distance,
}

impl Parser for TcxParser {
    fn parse(&self, bytes: &[u8], options: &ParseOptions) -> Result<RawActivity, ParseError> {
        let mut reader = Reader::from_reader(bytes);

        let mut activity = RawActivity::default();
        let mut in_activity = false;
        let mut activity_done = false;
        let mut current_point: Option<RawTrackpoint> = None;
        let mut altitude_m: Option<f64> = None;
        let mut distance_m: Option<f64> = None;
        let mut field: Option<Field> = None;
        let mut text = String::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) if !activity_done => {
                    let local = e.local_name();
                    let name = std::str::from_utf8(local.as_ref())
                        .map_err(|e| ParseError::InvalidTcx(e.to_string()))?;

                    match name {
                        "Activity" => in_activity = true,
                        "Trackpoint" if in_activity => {
                            current_point = Some(RawTrackpoint {
                                seq: activity.trackpoints.len() as u32 + 1,
                                ..RawTrackpoint::default()
                            });
                            altitude_m = None;
                            distance_m = None;
                        }
                        _ if in_activity => {
                            field = match (name, current_point.is_some()) {
                                ("Id", false) => Some(Field::Id),
                                ("Time", true) => Some(Field::Time),
                                ("LatitudeDegrees", true) => Some(Field::Lat),
                                ("LongitudeDegrees", true) => Some(Field::Lng),
                                ("AltitudeMeters", true) => Some(Field::Altitude),
                                ("DistanceMeters", true) => Some(Field::Distance),
                                _ => None,
                            };
                            text.clear();
                        }
                        _ => {}
                    }
                }
                Ok(Event::Text(e)) => {
                    if field.is_some() {
                        let value = e
                            .unescape()
                            .map_err(|e| ParseError::InvalidTcx(e.to_string()))?;
                        text.push_str(&value);
                    }
                }
                Ok(Event::End(e)) if !activity_done => {
                    let local = e.local_name();
                    let name = std::str::from_utf8(local.as_ref())
                        .map_err(|e| ParseError::InvalidTcx(e.to_string()))?;

                    match name {
                        "Activity" if in_activity => {
                            in_activity = false;
                            activity_done = true;
                        }
                        "Trackpoint" => {
                            if let Some(mut point) = current_point.take() {
                                if options.include_altitude {
                                    point.alt_feet = altitude_m.map(|m| m * FEET_PER_METER);
                                }
                                if options.include_distance {
                                    point.dist_miles = distance_m.map(|m| m / METERS_PER_MILE);
                                }
                                activity.trackpoints.push(point);
                            }
                        }
                        _ => {
                            if let Some(f) = field.take() {
                                assign_field(
                                    f,
                                    &text,
                                    &mut activity,
                                    current_point.as_mut(),
                                    &mut altitude_m,
                                    &mut distance_m,
                                );
                            }
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(ParseError::InvalidTcx(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        if options.include_elapsed {
            fill_elapsed(&mut activity.trackpoints);
        }

        activity.first_time = activity
            .trackpoints
            .first()
            .map(|p| p.time.clone())
            .unwrap_or_default();
        activity.current = activity.trackpoints.last().cloned();

        Ok(activity)
    }
}

fn assign_field(
    field: Field,
    text: &str,
    activity: &mut RawActivity,
    point: Option<&mut RawTrackpoint>,
    altitude_m: &mut Option<f64>,
    distance_m: &mut Option<f64>,
) {
    match (field, point) {
        (Field::Id, _) => activity.id = text.to_string(),
        (Field::Time, Some(point)) => point.time = text.to_string(),
        (Field::Lat, Some(point)) => point.lat = text.to_string(),
        (Field::Lng, Some(point)) => point.lng = text.to_string(),
        (Field::Altitude, Some(_)) => *altitude_m = text.trim().parse().ok(),
        (Field::Distance, Some(_)) => *distance_m = text.trim().parse().ok(),
        _ => {}
    }
}

fn fill_elapsed(points: &mut [RawTrackpoint]) {
    let parse = |s: &str| DateTime::<FixedOffset>::parse_from_rfc3339(s.trim()).ok();
    let Some(first) = points.first().and_then(|p| parse(&p.time)) else {
        return;
    };
    for point in points.iter_mut() {
        point.elapsed_secs = parse(&point.time)
            .map(|t| (t - first).num_milliseconds() as f64 / 1000.0);
    }
}
