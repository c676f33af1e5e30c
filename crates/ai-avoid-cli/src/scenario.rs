//! Scenario files: one agent, one threat, static obstacles, and a run length.

use std::path::Path;

use ai_avoid::{AvoidanceConfig, Scene, SceneAgent, SceneObject};
use ai_core::{ObjectId, Vec3};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub config: AvoidanceConfig,
    pub agent: SceneAgent,
    pub threat: SceneObject,
    pub obstacles: Vec<SceneObject>,
    /// Simulated seconds.
    pub duration: f32,
    /// Fixed step in seconds.
    pub dt: f32,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            config: AvoidanceConfig::default(),
            agent: SceneAgent::new(ObjectId(1), Vec3::new(2.0, 0.0, 0.0), 1.5),
            threat: SceneObject::sphere(ObjectId(2), Vec3::ZERO, 0.5),
            obstacles: vec![
                SceneObject::cuboid(
                    ObjectId(10),
                    Vec3::new(0.0, 0.0, -3.0),
                    Vec3::new(4.0, 1.0, 0.25),
                ),
                SceneObject::cuboid(
                    ObjectId(11),
                    Vec3::new(-4.0, 0.0, 2.0),
                    Vec3::new(0.5, 1.0, 0.5),
                ),
            ],
            duration: 10.0,
            dt: 0.1,
        }
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario from {}", path.display()))?;
        let scenario: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse scenario from {}", path.display()))?;
        Ok(scenario)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize scenario")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write scenario to {}", path.display()))
    }

    pub fn build_scene(&self) -> Scene {
        let mut scene = Scene::new();
        scene.add_agent(self.agent);
        scene.add_object(self.threat);
        for obstacle in &self.obstacles {
            scene.add_object(*obstacle);
        }
        scene
    }

    pub fn steps(&self) -> u64 {
        if self.dt <= 0.0 || !self.dt.is_finite() || !self.duration.is_finite() {
            return 0;
        }
        (self.duration.max(0.0) / self.dt).ceil() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_roundtrip_preserves_the_scene() {
        let scenario = Scenario::default();
        let yaml = serde_yaml::to_string(&scenario).unwrap();
        let back: Scenario = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.build_scene(), scenario.build_scene());
        assert_eq!(back.config, scenario.config);
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let yaml = "duration: 3.0\nconfig:\n  safe_distance: 8.0\n";
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.duration, 3.0);
        assert_eq!(scenario.config.safe_distance, 8.0);
        assert_eq!(scenario.config.clearance, AvoidanceConfig::default().clearance);
        assert_eq!(scenario.obstacles.len(), Scenario::default().obstacles.len());
    }

    #[test]
    fn steps_cover_the_duration() {
        let scenario = Scenario {
            duration: 1.0,
            dt: 0.25,
            ..Scenario::default()
        };
        assert_eq!(scenario.steps(), 4);

        let broken = Scenario {
            dt: 0.0,
            ..Scenario::default()
        };
        assert_eq!(broken.steps(), 0);
    }

    #[test]
    fn starter_scenario_has_cover_for_the_agent() {
        let scenario = Scenario::default();
        let scene = scenario.build_scene();
        let mut config = scenario.config;
        config.show_debug = true;
        let mut avoider = ai_avoid::Avoider::initialize(
            scenario.agent.id,
            Some(scenario.threat.id),
            config,
            &scene,
        )
        .unwrap();
        assert!(avoider.debug_probes(&scene).iter().any(|p| p.safe));
    }
}
