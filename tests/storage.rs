use tcx_tour::storage::{ActivitySink, Storage, Table};
use tcx_tour::types::activity::{Activity, Locality, Trackpoint};

fn point(seq: u32, lat: f64, lng: f64) -> Trackpoint {
    Trackpoint {
        lat,
        lng,
        time: format!("2020-05-01T08:00:0{}Z", seq),
        alt_feet: Some(5280.0),
        dist_miles: Some(seq as f64 * 0.1),
        seq,
    }
}

fn activity() -> Activity {
    let points = vec![point(1, 40.0, -105.0), point(2, f64::NAN, -105.0)];
    Activity {
        id: "2020-05-01T08:00:00Z".to_string(),
        date: "2020-05-01".to_string(),
        first_time: "2020-05-01T08:00:01Z".to_string(),
        start: None,
        current: points[1].clone(),
        trackpoints: points,
        duration_mins: 0.0,
        pace: 0.0,
        locality: Locality::unknown(),
    }
}

#[test]
fn committed_rows_are_visible() {
    let mut storage = Storage::open_in_memory().expect("storage");
    let activity = activity();
    {
        let txn = storage.begin().expect("begin");
        txn.insert_activity(&activity, "2020-05-01T08:00:00Z.kml", "run.tcx")
            .expect("activity");
        for p in &activity.trackpoints {
            txn.insert_trackpoint(&activity.id, p).expect("trackpoint");
        }
        txn.commit().expect("commit");
    }

    assert_eq!(storage.count(Table::Activity).unwrap(), 1);
    assert_eq!(storage.count(Table::Trackpoint).unwrap(), 2);

    let (file_kml, file_tcx, tkpt0): (String, String, String) = storage
        .connection()
        .query_row(
            "SELECT file_kml, file_tcx, tkpt0_time FROM activity WHERE id = ?1",
            [&activity.id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap();
    assert_eq!(file_kml, "2020-05-01T08:00:00Z.kml");
    assert_eq!(file_tcx, "run.tcx");
    assert_eq!(tkpt0, "2020-05-01T08:00:01Z");
}

#[test]
fn nan_coordinates_are_stored_as_null() {
    let mut storage = Storage::open_in_memory().expect("storage");
    let activity = activity();
    {
        let txn = storage.begin().expect("begin");
        txn.insert_trackpoint(&activity.id, &activity.trackpoints[1])
            .expect("trackpoint");
        txn.commit().expect("commit");
    }

    let (lat, lng): (Option<f64>, Option<f64>) = storage
        .connection()
        .query_row("SELECT lat, lng FROM trackpoint", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_eq!(lat, None);
    assert_eq!(lng, Some(-105.0));
}

#[test]
fn dropped_transaction_rolls_back() {
    let mut storage = Storage::open_in_memory().expect("storage");
    let activity = activity();
    {
        let txn = storage.begin().expect("begin");
        txn.insert_activity(&activity, "a.kml", "a.tcx").expect("activity");
    }
    assert_eq!(storage.count(Table::Activity).unwrap(), 0);
}

#[test]
fn reinserting_an_activity_replaces_its_rows() {
    let mut storage = Storage::open_in_memory().expect("storage");
    let activity = activity();
    for file_tcx in ["a.tcx", "b.tcx"] {
        let txn = storage.begin().expect("begin");
        txn.insert_activity(&activity, "a.kml", file_tcx).expect("activity");
        for p in &activity.trackpoints {
            txn.insert_trackpoint(&activity.id, p).expect("trackpoint");
        }
        txn.commit().expect("commit");
    }

    assert_eq!(storage.count(Table::Activity).unwrap(), 1);
    assert_eq!(storage.count(Table::Trackpoint).unwrap(), 2);
    let file_tcx: String = storage
        .connection()
        .query_row("SELECT file_tcx FROM activity", [], |row| row.get(0))
        .unwrap();
    assert_eq!(file_tcx, "b.tcx");
}
