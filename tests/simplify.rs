use tcx_tour::pipeline::simplify::simplify_path;
use tcx_tour::types::tour::Point;

#[test]
fn two_points_are_returned_unchanged() {
    let path = vec![Point::new(-105.0, 40.0), Point::new(-105.0, 40.0)];
    assert_eq!(simplify_path(&path, 0.0005), path);
    assert!(simplify_path(&[], 0.0005).is_empty());
}

#[test]
fn collinear_points_reduce_to_endpoints() {
    let path: Vec<Point> = (0..50)
        .map(|i| Point::new(-105.0 + i as f64 * 0.0001, 40.0 + i as f64 * 0.0002))
        .collect();
    let simplified = simplify_path(&path, 0.00004);
    assert_eq!(simplified, vec![path[0], path[49]]);
}

#[test]
fn output_is_a_subsequence_keeping_endpoints() {
    let path: Vec<Point> = (0..200)
        .map(|i| {
            let t = i as f64 * 0.05;
            Point::new(-105.0 + t * 0.001, 40.0 + t.sin() * 0.002)
        })
        .collect();
    let simplified = simplify_path(&path, 0.0001);

    assert!(simplified.len() > 2);
    assert!(simplified.len() < path.len());
    assert_eq!(simplified.first(), path.first());
    assert_eq!(simplified.last(), path.last());

    let mut cursor = path.iter();
    for kept in &simplified {
        assert!(cursor.any(|p| p == kept), "{:?} is not from the input in order", kept);
    }
}

#[test]
fn deviation_above_tolerance_is_kept() {
    let path = vec![
        Point::new(0.0, 0.0),
        Point::new(0.5, 0.001),
        Point::new(1.0, 0.0),
    ];
    assert_eq!(simplify_path(&path, 0.0005).len(), 3);
    assert_eq!(simplify_path(&path, 0.01).len(), 2);
}

#[test]
fn is_deterministic() {
    let path: Vec<Point> = (0..100)
        .map(|i| Point::new((i as f64 * 0.37).cos() * 0.01, i as f64 * 0.0003))
        .collect();
    assert_eq!(simplify_path(&path, 0.0002), simplify_path(&path, 0.0002));
}

#[test]
fn non_finite_points_are_dropped_before_reduction() {
    let path = vec![
        Point::new(-105.0, 40.0),
        Point::new(f64::NAN, 40.001),
        Point::new(-105.0, 40.002),
        Point::new(-105.001, 40.003),
    ];
    let simplified = simplify_path(&path, 0.00004);

    assert!(simplified.iter().all(Point::is_finite));
    assert_eq!(simplified.first(), Some(&path[0]));
    assert_eq!(simplified.last(), Some(&path[3]));
}
