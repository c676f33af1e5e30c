use ai_core::{Vec2, Vec3};

#[test]
fn planar_projection_drops_height() {
    let p = Vec3::new(1.0, 7.0, -2.0);
    assert_eq!(p.planar(), Vec2::new(1.0, -2.0));
    assert_eq!(Vec3::from_planar(p.planar(), 7.0), p);
}

#[test]
fn planar_distance_ignores_height() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(3.0, 100.0, 4.0);
    assert!((a.planar_distance(b) - 5.0).abs() <= 1e-6);
    assert!(a.distance(b) > 100.0);
}

#[test]
fn normalize_or_zero_handles_degenerate_vectors() {
    assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
    assert_eq!(Vec2::ZERO.normalize_or_zero(), Vec2::ZERO);

    let n = Vec3::new(0.0, 0.0, -4.0).normalize_or_zero();
    assert_eq!(n, -Vec3::Z);
}

#[cfg(feature = "serde")]
#[test]
fn vectors_serialize_as_plain_structs() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"x":1.0,"y":2.0,"z":3.0}"#);
    let back: Vec3 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}
