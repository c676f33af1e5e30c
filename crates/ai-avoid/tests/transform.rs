use ai_avoid::transform_sample;
use ai_core::{Vec2, Vec3};

#[test]
fn domain_center_maps_onto_the_agent() {
    let agent = Vec3::new(12.25, 3.5, -7.75);
    for width in [1.0, 10.0, 37.5] {
        let center = Vec2::new(width / 2.0, width / 2.0);
        assert_eq!(transform_sample(center, agent, width), agent);
    }
}

#[test]
fn corners_map_to_half_width_offsets() {
    let agent = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(
        transform_sample(Vec2::new(0.0, 0.0), agent, 10.0),
        Vec3::new(-4.0, 2.0, -2.0)
    );
    assert_eq!(
        transform_sample(Vec2::new(10.0, 10.0), agent, 10.0),
        Vec3::new(6.0, 2.0, 8.0)
    );
}

#[test]
fn sample_y_drives_world_z_and_height_is_kept() {
    let agent = Vec3::new(0.0, 9.0, 0.0);
    let p = transform_sample(Vec2::new(5.0, 8.0), agent, 10.0);
    assert_eq!(p, Vec3::new(0.0, 9.0, 3.0));
}
