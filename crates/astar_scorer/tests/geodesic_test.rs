use std::sync::Arc;

use astar_scorer::{
    Checked, CostMatrix, GeoPoint, Haversine, Law, LawChecker, MaxOf, Scaled, ScoreError, Scorer,
    ScorerConfig, TryScorer, geo_point::GeoNode,
};

fn stations() -> Vec<GeoNode> {
    vec![
        GeoNode::new("Earl's Court", 51.4915, -0.1941),
        GeoNode::new("Gloucester Road", 51.4943, -0.1829),
        GeoNode::new("South Kensington", 51.4941, -0.1738),
        GeoNode::new("Knightsbridge", 51.5015, -0.1607),
        GeoNode::new("Hyde Park Corner", 51.5027, -0.1527),
        GeoNode::new("Green Park", 51.5067, -0.1428),
        GeoNode::new("Piccadilly Circus", 51.5098, -0.1342),
    ]
}

#[test]
fn haversine_is_a_metric_over_stations() {
    let stations = stations();
    LawChecker::default()
        .check_all(&Haversine::meters(), &stations, &Law::METRIC)
        .unwrap();
}

#[test]
fn neighbouring_stations_are_close() {
    let stations = stations();
    let cost = Haversine::meters().compute_cost(&stations[0], &stations[1]);
    assert!(cost > 500.0 && cost < 1_000.0, "{cost}");
}

#[test]
fn travel_time_divides_distance_by_speed() {
    let stations = stations();
    let heuristic = Haversine::seconds_at(120.0);
    let meters = Haversine::meters();

    for from in &stations {
        for to in &stations {
            let seconds = heuristic.compute_cost(from, to);
            assert!((seconds - meters.compute_cost(from, to) * 0.03).abs() < 1e-6);
        }
    }
}

#[test]
fn matrix_is_symmetric_with_zero_diagonal() {
    let stations = stations();
    let matrix = CostMatrix::compute(&Haversine::meters(), &stations);

    for i in 0..matrix.size() {
        assert_eq!(matrix.cost(i, i), 0.0);
        for j in 0..matrix.size() {
            assert_eq!(matrix.cost(i, j), matrix.cost(j, i));
        }
    }
}

#[test]
fn configured_scorer_is_shared_across_threads() {
    let config = ScorerConfig::from_json(r#"{ "type": "haversine", "scale": 2.0 }"#).unwrap();
    let scorer = Arc::new(config.build_geodesic::<GeoNode>().unwrap());
    let stations = stations();
    let expected = 2.0 * Haversine::meters().compute_cost(&stations[0], &stations[6]);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let scorer = Arc::clone(&scorer);
            let stations = &stations;
            scope.spawn(move || {
                assert_eq!(scorer.compute_cost(&stations[0], &stations[6]), expected);
            });
        }
    });
}

#[test]
fn combined_heuristics_stay_checked() {
    let heuristic = Checked(MaxOf::new(
        Haversine::meters(),
        Scaled::new(Haversine::meters(), 0.5),
    ));
    let brussels = GeoPoint::new(50.8467, 4.3525);
    let paris = GeoPoint::new(48.8566, 2.3522);

    let cost = heuristic.try_compute_cost(&brussels, &paris).unwrap();
    assert_eq!(cost, Haversine::meters().compute_cost(&brussels, &paris));

    let broken = Checked(Scaled::new(Haversine::meters(), -1.0));
    assert!(matches!(
        broken.try_compute_cost(&brussels, &paris),
        Err(ScoreError::Negative { .. })
    ));
}

#[test]
fn geo_types_points_are_geodesic_nodes() {
    let brussels = geo_types::Point::new(4.3525, 50.8467);
    let paris = geo_types::Point::new(2.3522, 48.8566);

    let from_points = Haversine::meters().compute_cost(&brussels, &paris);
    let from_geo_points =
        Haversine::meters().compute_cost(&GeoPoint::from(brussels), &GeoPoint::from(paris));
    assert_eq!(from_points, from_geo_points);
}
