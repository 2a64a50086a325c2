use tcx_tour::error::ParseError;
use tcx_tour::pipeline::parse::{parse, ParseOptions};
use tcx_tour::types::activity::FileFormat;

fn sample_tcx() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
  <Activities>
    <Activity Sport="Running">
      <Id> 2020-05-01T08:00:00Z </Id>
      <Lap StartTime="2020-05-01T08:00:00Z">
        <TotalTimeSeconds>120</TotalTimeSeconds>
        <Track>
          <Trackpoint>
            <Time>2020-05-01T08:00:00Z</Time>
            <Position>
              <LatitudeDegrees>40.0</LatitudeDegrees>
              <LongitudeDegrees>-105.0</LongitudeDegrees>
            </Position>
            <AltitudeMeters>100</AltitudeMeters>
            <DistanceMeters>0</DistanceMeters>
            <HeartRateBpm><Value>120</Value></HeartRateBpm>
          </Trackpoint>
          <Trackpoint>
            <Time>2020-05-01T08:01:00Z</Time>
            <AltitudeMeters>101</AltitudeMeters>
          </Trackpoint>
          <Trackpoint>
            <Time>2020-05-01T08:02:00Z</Time>
            <Position>
              <LatitudeDegrees>40.002</LatitudeDegrees>
              <LongitudeDegrees>-105.0</LongitudeDegrees>
            </Position>
            <AltitudeMeters>102</AltitudeMeters>
            <DistanceMeters>1609.344</DistanceMeters>
          </Trackpoint>
        </Track>
      </Lap>
      <Creator><Name>Watch</Name></Creator>
    </Activity>
  </Activities>
</TrainingCenterDatabase>"#
}

fn all_fields() -> ParseOptions {
    ParseOptions {
        include_altitude: true,
        include_distance: true,
        include_elapsed: true,
    }
}

#[test]
fn parses_id_and_trackpoints_in_order() {
    let activity = parse(sample_tcx().as_bytes(), FileFormat::Tcx, &all_fields()).expect("parse");

    assert_eq!(activity.id, " 2020-05-01T08:00:00Z ");
    assert_eq!(activity.trackpoints.len(), 3);
    let seqs: Vec<u32> = activity.trackpoints.iter().map(|p| p.seq).collect();
    assert_eq!(seqs, vec![1, 2, 3]);
    assert_eq!(activity.trackpoints[0].lat, "40.0");
    assert_eq!(activity.trackpoints[0].lng, "-105.0");
    assert_eq!(activity.first_time, "2020-05-01T08:00:00Z");
}

#[test]
fn missing_position_leaves_coordinates_empty() {
    let activity = parse(sample_tcx().as_bytes(), FileFormat::Tcx, &all_fields()).expect("parse");
    let second = &activity.trackpoints[1];
    assert_eq!(second.lat, "");
    assert_eq!(second.lng, "");
    assert_eq!(second.dist_miles, None);
}

#[test]
fn converts_altitude_and_distance_units() {
    let activity = parse(sample_tcx().as_bytes(), FileFormat::Tcx, &all_fields()).expect("parse");
    let first = &activity.trackpoints[0];
    assert!((first.alt_feet.unwrap() - 328.0839895).abs() < 1e-6);
    let current = activity.current.expect("current trackpoint");
    assert_eq!(current.seq, 3);
    assert!((current.dist_miles.unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn computes_elapsed_seconds_when_requested() {
    let activity = parse(sample_tcx().as_bytes(), FileFormat::Tcx, &all_fields()).expect("parse");
    let elapsed: Vec<Option<f64>> = activity.trackpoints.iter().map(|p| p.elapsed_secs).collect();
    assert_eq!(elapsed, vec![Some(0.0), Some(60.0), Some(120.0)]);
}

#[test]
fn optional_fields_are_skipped_by_default() {
    let activity =
        parse(sample_tcx().as_bytes(), FileFormat::Tcx, &ParseOptions::default()).expect("parse");
    assert!(activity
        .trackpoints
        .iter()
        .all(|p| p.alt_feet.is_none() && p.dist_miles.is_none() && p.elapsed_secs.is_none()));
}

#[test]
fn activity_without_track_has_no_trackpoints() {
    let tcx = r#"<TrainingCenterDatabase><Activities><Activity Sport="Biking"><Id>2020-01-01T00:00:00Z</Id><Lap/></Activity></Activities></TrainingCenterDatabase>"#;
    let activity = parse(tcx.as_bytes(), FileFormat::Tcx, &all_fields()).expect("parse");
    assert_eq!(activity.id, "2020-01-01T00:00:00Z");
    assert!(activity.trackpoints.is_empty());
    assert!(activity.current.is_none());
}

#[test]
fn malformed_xml_is_rejected() {
    let tcx = "<TrainingCenterDatabase><Activities><Activity></Activities>";
    let result = parse(tcx.as_bytes(), FileFormat::Tcx, &all_fields());
    assert!(matches!(result, Err(ParseError::InvalidTcx(_))));
}

#[test]
fn file_format_accepts_only_tcx() {
    assert_eq!(FileFormat::from_filename("run.tcx"), Some(FileFormat::Tcx));
    assert_eq!(FileFormat::from_filename("RUN.TCX"), Some(FileFormat::Tcx));
    assert_eq!(FileFormat::from_filename("run.gpx"), None);
    assert_eq!(FileFormat::from_filename("tcx"), None);
}
