//! Scene description and per-instance animation state
//!
//! A [`SceneSpec`] is the static description of one decorative layer: camera,
//! lights and ornament parameters. A [`SceneState`] owns the oscillators for
//! one mounted layer and turns them into [`DrawInstance`]s each frame.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::math::{Mat4, Vec3};
use crate::ornament::{Drift, Material, Ornament, OrnamentParams, Plate, PlateParams};

/// Near clip plane
pub const CAMERA_NEAR: f32 = 0.1;
/// Far clip plane
pub const CAMERA_FAR: f32 = 100.0;

/// Fixed perspective camera looking at the origin
///
/// The camera never responds to input: no orbit, zoom or pan.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraSpec {
    pub position: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
}

impl CameraSpec {
    pub const fn new(position: Vec3, fov: f32) -> Self {
        Self { position, fov }
    }

    /// View matrix
    pub fn view(&self) -> Mat4 {
        Mat4::look_at(self.position, Vec3::ZERO, Vec3::UP)
    }

    /// Projection matrix for a surface aspect ratio
    pub fn projection(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        Mat4::perspective(self.fov, aspect, CAMERA_NEAR, CAMERA_FAR)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }
}

/// A positional light source (point or directional)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    pub const fn new(position: Vec3, intensity: f32) -> Self {
        Self { position, intensity }
    }
}

/// Scene lighting
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Lighting {
    pub ambient: f32,
    #[serde(default)]
    pub points: Vec<Light>,
    /// Directional light; `position` is the direction it shines from
    #[serde(default)]
    pub directional: Option<Light>,
}

/// Static description of one decorative layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneSpec {
    pub camera: CameraSpec,
    pub lighting: Lighting,
    pub drift: Drift,
    /// Emissive strength applied to every floating sphere
    pub emissive_intensity: f32,
    pub ornaments: Vec<OrnamentParams>,
    #[serde(default)]
    pub plate: Option<PlateParams>,
}

impl SceneSpec {
    /// Material shared by the floating spheres
    #[inline]
    pub fn ornament_material(&self) -> Material {
        Material::glossy(self.emissive_intensity)
    }

    /// Radii of the floating spheres, in declaration order
    pub fn ornament_sizes(&self) -> Vec<f32> {
        self.ornaments.iter().map(|o| o.radius).collect()
    }

    /// Rest positions of the floating spheres, in declaration order
    pub fn ornament_positions(&self) -> Vec<Vec3> {
        self.ornaments.iter().map(|o| o.position).collect()
    }
}

/// One sphere to draw this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawInstance {
    pub model: Mat4,
    pub color: Color,
    pub material: Material,
}

/// Animation state for one mounted decorative layer
#[derive(Clone, Debug)]
pub struct SceneState {
    spec: SceneSpec,
    ornaments: Vec<Ornament>,
    plate: Option<Plate>,
    elapsed: f64,
}

impl SceneState {
    /// Build the oscillators for a scene at their initial phases
    pub fn new(spec: SceneSpec) -> Self {
        let material = spec.ornament_material();
        let ornaments = spec
            .ornaments
            .iter()
            .map(|p| Ornament::new(*p, spec.drift, material))
            .collect();
        let plate = spec.plate.clone().map(Plate::new);
        Self {
            spec,
            ornaments,
            plate,
            elapsed: 0.0,
        }
    }

    #[inline]
    pub fn spec(&self) -> &SceneSpec {
        &self.spec
    }

    #[inline]
    pub fn ornaments(&self) -> &[Ornament] {
        &self.ornaments
    }

    #[inline]
    pub fn plate(&self) -> Option<&Plate> {
        self.plate.as_ref()
    }

    /// Total animated time in seconds
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advance every oscillator by `delta` seconds
    pub fn tick(&mut self, delta: f32) {
        for ornament in &mut self.ornaments {
            ornament.tick(delta);
        }
        if let Some(plate) = &mut self.plate {
            plate.tick(delta);
        }
        if delta.is_finite() && delta > 0.0 {
            self.elapsed += delta as f64;
        }
    }

    /// Switch to a new spec (e.g. after a layout change).
    ///
    /// Ornaments keep their accumulated phase and rotation when the ornament
    /// count is unchanged, so the drift does not jump.
    pub fn retarget(&mut self, spec: SceneSpec) {
        if spec == self.spec {
            return;
        }
        let material = spec.ornament_material();
        let ornaments: Vec<Ornament> = spec
            .ornaments
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let mut fresh = Ornament::new(*p, spec.drift, material);
                if self.ornaments.len() == spec.ornaments.len() {
                    if let Some(old) = self.ornaments.get(i) {
                        fresh.carry_over(old);
                    }
                }
                fresh
            })
            .collect();
        let plate = match (&self.plate, spec.plate.clone()) {
            (Some(old), Some(params)) => {
                let mut plate = Plate::new(params);
                plate.carry_over(old);
                Some(plate)
            }
            (_, params) => params.map(Plate::new),
        };
        tracing::trace!(
            ornaments = ornaments.len(),
            kept_phase = self.ornaments.len() == ornaments.len(),
            "scene retargeted"
        );
        self.ornaments = ornaments;
        self.plate = plate;
        self.spec = spec;
    }

    /// Spheres to draw for the current frame, floating ornaments first
    pub fn instances(&self) -> Vec<DrawInstance> {
        self.collect_instances(self.plate.as_ref(), Ornament::model_matrix)
    }

    /// Spheres at their rest positions, for a layer drawn without animation
    pub fn resting_instances(&self) -> Vec<DrawInstance> {
        let unspun = self.plate.as_ref().map(|p| Plate::new(p.params().clone()));
        self.collect_instances(unspun.as_ref(), Ornament::resting_matrix)
    }

    fn collect_instances(&self, plate: Option<&Plate>, model: fn(&Ornament) -> Mat4) -> Vec<DrawInstance> {
        let mut out: Vec<DrawInstance> = self
            .ornaments
            .iter()
            .map(|o| DrawInstance {
                model: model(o),
                color: o.params().color,
                material: o.material(),
            })
            .collect();
        if let Some(plate) = plate {
            out.extend(
                plate
                    .garnish_transforms()
                    .map(|(model, color, material)| DrawInstance { model, color, material }),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutMode;
    use crate::presets;

    #[test]
    fn test_scene_state_instances_match_spec() {
        let state = SceneState::new(presets::about(LayoutMode::Wide));
        // Four floating spheres plus two garnishes
        assert_eq!(state.instances().len(), 6);

        let state = SceneState::new(presets::menu());
        assert_eq!(state.instances().len(), 3);
    }

    #[test]
    fn test_resting_instances_ignore_elapsed_time() {
        let mut state = SceneState::new(presets::about(LayoutMode::Wide));
        let at_start = state.resting_instances();
        state.tick(4.0);

        assert_eq!(state.resting_instances(), at_start);
        assert_ne!(state.instances(), at_start);
        for (instance, ornament) in at_start.iter().zip(state.ornaments()) {
            let t = instance.model.translation_part();
            assert!((t - ornament.resting_position()).length() < 0.001);
        }
    }

    #[test]
    fn test_scene_state_tick_advances_all() {
        let mut state = SceneState::new(presets::hero(LayoutMode::Wide));
        let before: Vec<f32> = state.ornaments().iter().map(|o| o.phase()).collect();
        state.tick(0.5);
        for (o, b) in state.ornaments().iter().zip(before) {
            assert!(o.phase() > b);
        }
        assert!((state.elapsed() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_scene_state_retarget_keeps_phase() {
        let mut state = SceneState::new(presets::hero(LayoutMode::Wide));
        state.tick(1.0);
        let phases: Vec<f32> = state.ornaments().iter().map(|o| o.phase()).collect();

        state.retarget(presets::hero(LayoutMode::Compact));

        let now: Vec<f32> = state.ornaments().iter().map(|o| o.phase()).collect();
        assert_eq!(phases, now);
        assert_eq!(state.spec().ornament_sizes(), vec![0.9, 0.7, 0.5, 0.6]);
    }

    #[test]
    fn test_independent_states() {
        let mut a = SceneState::new(presets::menu());
        let b = SceneState::new(presets::menu());
        a.tick(2.0);
        assert!(a.ornaments()[0].phase() > b.ornaments()[0].phase());
    }

    #[test]
    fn test_camera_projection_handles_degenerate_aspect() {
        let camera = CameraSpec::new(Vec3::new(0.0, 0.0, 6.0), 50.0);
        assert_eq!(camera.projection(0.0), camera.projection(1.0));
        assert_eq!(camera.projection(f32::NAN), camera.projection(1.0));
    }

    #[test]
    fn test_spec_serde_roundtrip() {
        let spec = presets::about(LayoutMode::Compact);
        let json = serde_json::to_string(&spec).unwrap();
        let back: SceneSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
