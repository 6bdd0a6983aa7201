use vizij_curve_core::{
    parse_stored_curve_json, to_stored_curve_json, CurveError, StoredCurve, WrapMode,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

#[test]
fn every_fixture_builds_a_valid_curve() {
    for name in vizij_test_fixtures::curves::keys() {
        let json = vizij_test_fixtures::curves::json(&name).expect("load fixture");
        let curve = parse_stored_curve_json(&json)
            .unwrap_or_else(|e| panic!("fixture {name} should parse: {e}"));
        assert!(curve.count() >= 2, "fixture {name}");
    }
}

#[test]
fn smooth_bounce_preserves_wraps_and_keys() {
    let json = vizij_test_fixtures::curves::json("smooth-bounce").expect("load fixture");
    let curve = parse_stored_curve_json(&json).expect("parse smooth-bounce");

    assert_eq!(curve.pre_wrap(), WrapMode::PingPong);
    assert_eq!(curve.post_wrap(), WrapMode::Loop);
    assert_eq!(curve.count(), 4);
    assert_eq!(curve.start_time(), 0.0);
    assert_eq!(curve.end_time(), 2.0);
    approx(curve.get(0).unwrap().out_tangent, 4.0, 1e-6);

    // Knots are exact.
    assert_eq!(curve.evaluate(0.5), 1.0);
    assert_eq!(curve.evaluate(1.25), -0.5);
    // Post loop: 2.5 wraps to 0.5.
    assert_eq!(curve.evaluate(2.5), 1.0);
    // Pre ping-pong: -0.5 reflects to 0.5.
    assert_eq!(curve.evaluate(-0.5), 1.0);
}

#[test]
fn stepped_blink_holds_between_keys() {
    let json = vizij_test_fixtures::curves::json("stepped-blink").expect("load fixture");
    let curve = parse_stored_curve_json(&json).expect("parse stepped-blink");

    assert_eq!(curve.get(0).unwrap().out_tangent, f32::INFINITY);
    assert_eq!(curve.get(2).unwrap().in_tangent, f32::NEG_INFINITY);
    for t in [0.0, 1.0, 2.79] {
        assert_eq!(curve.evaluate(t), 1.0, "t={t}");
    }
    assert_eq!(curve.evaluate(2.9), 0.0);
    assert_eq!(curve.evaluate(3.0), 1.0);
    // Loops back into the open-eye hold.
    assert_eq!(curve.evaluate(4.0), 1.0);
}

#[test]
fn stacked_jump_takes_last_stacked_value() {
    let json = vizij_test_fixtures::curves::json("stacked-jump").expect("load fixture");
    let curve = parse_stored_curve_json(&json).expect("parse stacked-jump");
    assert_eq!(curve.evaluate(1.0), 3.0);
    assert_eq!(curve.pre_wrap(), WrapMode::Clamp);
}

#[test]
fn fixture_deserializes_as_stored_curve() {
    let stored: StoredCurve =
        vizij_test_fixtures::curves::load("smooth-bounce").expect("load typed fixture");
    assert_eq!(stored.name.as_deref(), Some("Smooth bounce"));
    assert_eq!(stored.keys.len(), 4);
}

#[test]
fn stored_json_round_trips_through_curve() {
    let json = vizij_test_fixtures::curves::json("stepped-blink").expect("load fixture");
    let curve = parse_stored_curve_json(&json).expect("parse");
    let written = to_stored_curve_json(&curve).expect("write");
    let reparsed = parse_stored_curve_json(&written).expect("reparse");
    assert_eq!(reparsed, curve);
}

#[test]
fn malformed_and_invalid_json_are_distinguished() {
    assert!(matches!(
        parse_stored_curve_json("{ not json"),
        Err(CurveError::Parse(_))
    ));
    let err = parse_stored_curve_json(r#"{ "keys": [] }"#).unwrap_err();
    assert!(err.is_validation(), "{err}");
}
