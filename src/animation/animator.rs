//! Per-frame animation of a loaded scene
//!
//! The animator is a pure function of elapsed time: every playing frame
//! starts each animated group from its resting transform and layers the idle
//! motions on top, then moves the flow marker along its loop. Nothing
//! accumulates between frames, so a paused scene resumes exactly where the
//! clock says it should be.

use std::collections::BTreeSet;

use cgmath::Vector3;

use crate::{
    gfx::scene::Scene,
    scenes::{SceneBlueprint, FLOW_MARKER_GROUP},
};

use super::{
    flow::{FlowPath, FlowSample},
    motion::IdleMotion,
};

#[derive(Debug, Clone, Default)]
pub struct Animator {
    motions: Vec<IdleMotion>,
    flow: Option<FlowPath>,
    last_sample: Option<FlowSample>,
}

impl Animator {
    pub fn from_blueprint(blueprint: &SceneBlueprint) -> Self {
        Self {
            motions: blueprint.motions.clone(),
            flow: blueprint.flow.as_ref().map(|marker| marker.path.clone()),
            last_sample: None,
        }
    }

    /// Poses the scene for elapsed time `t`.
    ///
    /// While `paused` nothing is touched and the previous pose stays on
    /// screen. Groups missing from the scene are skipped. Returns whether any
    /// transform was written.
    pub fn update(&mut self, t: f32, paused: bool, scene: &mut Scene) -> bool {
        if paused {
            return false;
        }

        let mut changed = false;

        let groups: BTreeSet<&'static str> = self.motions.iter().map(|motion| motion.group).collect();
        for group in groups {
            let Some(object) = scene.find_object_mut(group) else {
                log::trace!("Idle motion target '{}' is not in the scene", group);
                continue;
            };
            object.reset_transform();
            for motion in self.motions.iter().filter(|motion| motion.group == group) {
                motion.apply(t, &mut object.transform);
            }
            changed = true;
        }

        if let Some(sample) = self.flow.as_ref().and_then(|flow| flow.sample(t)) {
            if let Some(marker) = scene.find_object_mut(FLOW_MARKER_GROUP) {
                marker.transform.translation = sample.position;
                log::trace!(
                    "Flow marker leg {} ({}) at {:.2}",
                    sample.phase_number(),
                    sample.leg,
                    sample.progress
                );
                self.last_sample = Some(sample);
                changed = true;
            }
        }

        changed
    }

    /// The flow sample written by the most recent playing frame.
    pub fn marker_sample(&self) -> Option<&FlowSample> {
        self.last_sample.as_ref()
    }

    pub fn marker_position(&self) -> Option<Vector3<f32>> {
        self.last_sample.as_ref().map(|sample| sample.position)
    }

    pub fn phase_count(&self) -> usize {
        self.flow.as_ref().map_or(0, FlowPath::phase_count)
    }

    pub fn has_flow(&self) -> bool {
        self.flow.is_some()
    }

    /// Text for the status panel, e.g. `Phase 2/5: Database Query`.
    pub fn flow_status(&self) -> Option<String> {
        self.last_sample
            .as_ref()
            .map(|sample| format!("Phase {}/{}: {}", sample.phase_number(), self.phase_count(), sample.leg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::CameraManager;
    use crate::scenes::select_scene;
    use cgmath::InnerSpace;

    fn setup(id: &str) -> (Animator, Scene) {
        let blueprint = select_scene(id);
        let mut scene = Scene::new(CameraManager::default());
        scene.load_blueprint(&blueprint);
        (Animator::from_blueprint(&blueprint), scene)
    }

    fn poses(scene: &Scene) -> Vec<(String, crate::gfx::scene::Transform)> {
        scene
            .objects
            .iter()
            .map(|object| (object.name.clone(), object.transform))
            .collect()
    }

    #[test]
    fn test_paused_frames_change_nothing() {
        let (mut animator, mut scene) = setup("devops");
        assert!(animator.update(1.3, false, &mut scene));
        let frozen = poses(&scene);

        for t in [1.4_f32, 2.0, 7.5, 100.0] {
            assert!(!animator.update(t, true, &mut scene));
            assert_eq!(poses(&scene), frozen);
        }
    }

    #[test]
    fn test_database_scenario_freezes_marker() {
        let (mut animator, mut scene) = setup("database");
        animator.update(0.5, false, &mut scene);

        let sample = animator.marker_sample().cloned().expect("marker sample");
        assert_eq!(sample.phase_number(), 1);
        assert_eq!(sample.leg, "Cache Check");
        assert_eq!(animator.flow_status().as_deref(), Some("Phase 1/5: Cache Check"));

        let marker = scene.find_object(FLOW_MARKER_GROUP).expect("marker").transform.translation;
        assert!((marker - sample.position).magnitude() < 1e-6);

        // pause and let the clock run on
        for t in [1.0_f32, 2.0, 3.0] {
            animator.update(t, true, &mut scene);
        }
        assert_eq!(animator.marker_position(), Some(sample.position));
        let still = scene.find_object(FLOW_MARKER_GROUP).expect("marker").transform.translation;
        assert_eq!(still, marker);
    }

    #[test]
    fn test_marker_repeats_every_period() {
        let (mut animator, mut scene) = setup("database");
        animator.update(1.7, false, &mut scene);
        let first = animator.marker_position().expect("position");
        animator.update(1.7 + 5.0, false, &mut scene);
        let second = animator.marker_position().expect("position");
        assert!((first - second).magnitude() < 1e-4);
    }

    #[test]
    fn test_idle_motion_is_offset_from_rest() {
        let (mut animator, mut scene) = setup("mobile");
        let blueprint = select_scene("mobile");
        let motion = blueprint.motions[0];

        animator.update(0.0, false, &mut scene);
        animator.update(2.0, false, &mut scene);
        let object = scene.find_object(motion.group).expect("animated group");

        let mut expected = object.base;
        for m in blueprint.motions.iter().filter(|m| m.group == motion.group) {
            m.apply(2.0, &mut expected);
        }
        assert_eq!(object.transform, expected);
    }

    #[test]
    fn test_missing_groups_are_skipped() {
        let (mut animator, mut scene) = setup("fullstack");
        scene.clear();
        assert!(!animator.update(1.0, false, &mut scene));
        assert!(animator.marker_sample().is_none());
        assert!(animator.flow_status().is_none());
    }

    #[test]
    fn test_default_scene_spins_without_marker() {
        let (mut animator, mut scene) = setup("unknown");
        assert!(!animator.has_flow());
        assert!(animator.update(10.0, false, &mut scene));
        let wire = scene.find_object("wireframe").expect("wireframe");
        assert!(wire.transform.rotation.x.abs() > 0.0);
        assert!(animator.marker_position().is_none());
    }
}
