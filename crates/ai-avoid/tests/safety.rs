use ai_avoid::{is_safe, SafetyParams, Scene, SceneObject, ThreatSnapshot};
use ai_core::{ObjectId, Vec3};

const THREAT: ObjectId = ObjectId(2);
const WALL: ObjectId = ObjectId(10);

fn params() -> SafetyParams {
    SafetyParams {
        clearance: 3.0,
        ray_max_distance: 1000.0,
    }
}

fn scene_with_threat() -> (Scene, ThreatSnapshot) {
    let mut scene = Scene::new();
    scene.add_object(SceneObject::sphere(THREAT, Vec3::ZERO, 0.5));
    let threat = ThreatSnapshot {
        id: THREAT,
        position: Vec3::ZERO,
    };
    (scene, threat)
}

#[test]
fn too_close_is_never_safe() {
    let (mut scene, threat) = scene_with_threat();
    // Even behind a wall.
    scene.add_object(SceneObject::cuboid(
        WALL,
        Vec3::new(1.5, 0.0, 0.0),
        Vec3::new(0.25, 2.0, 2.0),
    ));
    assert!(!is_safe(Vec3::new(2.5, 0.0, 0.0), threat, &scene, params()));
}

#[test]
fn clear_line_of_sight_is_exposed() {
    let (scene, threat) = scene_with_threat();
    assert!(!is_safe(Vec3::new(8.0, 0.0, 0.0), threat, &scene, params()));
}

#[test]
fn clearance_boundary_is_strict_but_sight_still_matters() {
    let (mut scene, threat) = scene_with_threat();
    let on_boundary = Vec3::new(-3.0, 0.0, 0.0);

    // Exactly at clearance passes the distance check, then fails on line of sight.
    assert!(!is_safe(on_boundary, threat, &scene, params()));

    // With cover, the same boundary position is accepted.
    scene.add_object(SceneObject::cuboid(
        WALL,
        Vec3::new(-2.0, 0.0, 0.0),
        Vec3::new(0.25, 2.0, 2.0),
    ));
    assert!(is_safe(on_boundary, threat, &scene, params()));
}

#[test]
fn intervening_obstacle_provides_cover() {
    let (mut scene, threat) = scene_with_threat();
    scene.add_object(SceneObject::cuboid(
        WALL,
        Vec3::new(0.0, 0.0, 4.0),
        Vec3::new(3.0, 2.0, 0.25),
    ));
    assert!(is_safe(Vec3::new(0.0, 0.0, 6.0), threat, &scene, params()));
}

#[test]
fn obstacle_behind_the_threat_does_not_help() {
    let (mut scene, threat) = scene_with_threat();
    scene.add_object(SceneObject::cuboid(
        WALL,
        Vec3::new(-4.0, 0.0, 0.0),
        Vec3::new(0.25, 2.0, 2.0),
    ));
    assert!(!is_safe(Vec3::new(6.0, 0.0, 0.0), threat, &scene, params()));
}

#[test]
fn out_of_range_counts_as_cover() {
    let (scene, threat) = scene_with_threat();
    let short = SafetyParams {
        clearance: 3.0,
        ray_max_distance: 5.0,
    };
    assert!(is_safe(Vec3::new(20.0, 0.0, 0.0), threat, &scene, short));
}

#[test]
fn standing_on_the_threat_is_unsafe_even_without_clearance() {
    let (scene, threat) = scene_with_threat();
    let none = SafetyParams {
        clearance: 0.0,
        ray_max_distance: 1000.0,
    };
    assert!(!is_safe(Vec3::ZERO, threat, &scene, none));
}
