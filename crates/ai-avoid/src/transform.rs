use ai_core::{Vec2, Vec3};

/// Map a sample from `[0, domain_width]²` to world space, centered on `agent_position`.
///
/// Sample `x` goes to world `x`, sample `y` to world `z`; height is taken from the agent.
pub fn transform_sample(sample: Vec2, agent_position: Vec3, domain_width: f32) -> Vec3 {
    let half = domain_width / 2.0;
    Vec3::new(
        sample.x - half + agent_position.x,
        agent_position.y,
        sample.y - half + agent_position.z,
    )
}
