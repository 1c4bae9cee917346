//! Floating sphere oscillator

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::math::{Mat4, Vec3};

/// Surface parameters for a sphere
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub metalness: f32,
    pub roughness: f32,
    /// Emissive strength, applied to the base color
    pub emissive_intensity: f32,
}

impl Material {
    /// Glossy metallic finish used by the floating spheres
    pub const fn glossy(emissive_intensity: f32) -> Self {
        Self {
            metalness: 0.7,
            roughness: 0.25,
            emissive_intensity,
        }
    }

    /// Matte, non-emissive finish used by garnishes
    pub const MATTE: Material = Material {
        metalness: 0.2,
        roughness: 0.4,
        emissive_intensity: 0.0,
    };
}

/// Drift shape shared by every ornament in a scene
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drift {
    /// Horizontal swing (world units)
    pub amplitude_x: f32,
    /// Vertical swing (world units)
    pub amplitude_y: f32,
    /// Vertical frequency relative to the phase
    pub rate_y: f32,
    /// Self-rotation about Y (radians per second)
    pub spin: f32,
}

impl Default for Drift {
    fn default() -> Self {
        Self {
            amplitude_x: 0.8,
            amplitude_y: 0.6,
            rate_y: 0.7,
            spin: 0.3,
        }
    }
}

impl Drift {
    /// Horizontal offset at `phase`
    #[inline]
    pub fn horizontal(&self, phase: f32) -> f32 {
        phase.sin() * self.amplitude_x
    }

    /// Vertical offset at `phase`
    #[inline]
    pub fn vertical(&self, phase: f32) -> f32 {
        (phase * self.rate_y).cos() * self.amplitude_y
    }
}

/// Static parameters of one floating sphere
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrnamentParams {
    /// Rest position the sphere drifts around
    pub position: Vec3,
    pub radius: f32,
    pub color: Color,
    /// Phase advance per second
    pub speed: f32,
    /// Initial phase
    pub offset: f32,
}

/// Animated state of one floating sphere
#[derive(Clone, Debug, PartialEq)]
pub struct Ornament {
    params: OrnamentParams,
    drift: Drift,
    material: Material,
    phase: f32,
    rotation_y: f32,
}

impl Ornament {
    /// Create an ornament at its initial phase
    pub fn new(params: OrnamentParams, drift: Drift, material: Material) -> Self {
        Self {
            params,
            drift,
            material,
            phase: params.offset,
            rotation_y: 0.0,
        }
    }

    /// Advance by `delta` seconds.
    ///
    /// Negative and non-finite deltas count as zero, so the phase never runs
    /// backwards.
    pub fn tick(&mut self, delta: f32) {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.phase += delta * self.params.speed;
        self.rotation_y += delta * self.drift.spin;
    }

    #[inline]
    pub fn params(&self) -> &OrnamentParams {
        &self.params
    }

    #[inline]
    pub fn material(&self) -> Material {
        self.material
    }

    /// Accumulated phase
    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Accumulated self-rotation about Y
    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Current (x, y) offset from the rest position
    #[inline]
    pub fn offset(&self) -> (f32, f32) {
        (self.drift.horizontal(self.phase), self.drift.vertical(self.phase))
    }

    /// Current world position
    pub fn position(&self) -> Vec3 {
        let (dx, dy) = self.offset();
        let base = self.params.position;
        Vec3::new(base.x + dx, base.y + dy, base.z)
    }

    /// Position used when no animation driver is running
    #[inline]
    pub fn resting_position(&self) -> Vec3 {
        self.params.position
    }

    /// Keep the phase and rotation of a previous incarnation
    pub(crate) fn carry_over(&mut self, previous: &Ornament) {
        self.phase = previous.phase;
        self.rotation_y = previous.rotation_y;
    }

    /// Model transform for the current frame
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_trs(self.position(), self.rotation_y, self.params.radius)
    }

    /// Model transform at the rest position with no spin
    pub fn resting_matrix(&self) -> Mat4 {
        Mat4::from_trs(self.resting_position(), 0.0, self.params.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn params(speed: f32, offset: f32) -> OrnamentParams {
        OrnamentParams {
            position: Vec3::new(-2.0, 1.0, -2.0),
            radius: 1.4,
            color: Color::hex(0xe11d48),
            speed,
            offset,
        }
    }

    #[test]
    fn test_ornament_initial_phase() {
        let o = Ornament::new(params(0.5, 2.0), Drift::default(), Material::glossy(0.4));
        assert!((o.phase() - 2.0).abs() < 0.001);
        assert!(o.rotation_y().abs() < 0.001);
    }

    #[test]
    fn test_ornament_tick_accumulates() {
        let mut o = Ornament::new(params(0.5, 0.0), Drift::default(), Material::glossy(0.4));
        o.tick(1.0);
        o.tick(1.0);
        assert!((o.phase() - 1.0).abs() < 0.001);
        assert!((o.rotation_y() - 0.6).abs() < 0.001);
    }

    #[test]
    fn test_ornament_phase_monotonic() {
        let mut o = Ornament::new(params(1.3, 3.0), Drift::default(), Material::glossy(0.4));
        let mut prev = o.phase();
        for delta in [0.0, 0.016, 0.5, 0.0, 2.0, 0.033] {
            o.tick(delta);
            assert!(o.phase() >= prev);
            prev = o.phase();
        }
    }

    #[test]
    fn test_ornament_ignores_bad_deltas() {
        let mut o = Ornament::new(params(1.0, 0.0), Drift::default(), Material::glossy(0.4));
        o.tick(-1.0);
        o.tick(f32::NAN);
        o.tick(f32::INFINITY);
        assert!(o.phase().abs() < 0.001);
    }

    #[test]
    fn test_drift_offsets_at_key_phases() {
        let drift = Drift::default();

        assert!(drift.horizontal(0.0).abs() < 0.001);
        assert!((drift.vertical(0.0) - drift.amplitude_y).abs() < 0.001);

        assert!((drift.horizontal(FRAC_PI_2) - drift.amplitude_x).abs() < 0.001);
        assert!(drift.horizontal(PI).abs() < 0.001);

        let vy = |phase: f32| (phase * drift.rate_y).cos() * drift.amplitude_y;
        assert!((drift.vertical(FRAC_PI_2) - vy(FRAC_PI_2)).abs() < 0.001);
        assert!((drift.vertical(PI) - vy(PI)).abs() < 0.001);
        assert!(drift.vertical(PI) < 0.0);

        // At unit rate the vertical swing crosses zero at π/2 and bottoms out at π
        let unit = Drift {
            rate_y: 1.0,
            ..Drift::default()
        };
        assert!(unit.vertical(FRAC_PI_2).abs() < 0.001);
        assert!((unit.vertical(PI) + unit.amplitude_y).abs() < 0.001);
    }

    #[test]
    fn test_drift_offsets_bounded() {
        let drift = Drift {
            amplitude_x: 1.1,
            amplitude_y: 0.7,
            rate_y: 0.8,
            spin: 0.25,
        };
        for i in 0..=400 {
            let phase = i as f32 * 0.05;
            assert!(drift.horizontal(phase).abs() <= drift.amplitude_x + 1e-6);
            assert!(drift.vertical(phase).abs() <= drift.amplitude_y + 1e-6);
        }
    }

    #[test]
    fn test_ornament_position_follows_drift() {
        let o = Ornament::new(params(0.5, FRAC_PI_2), Drift::default(), Material::glossy(0.4));
        let p = o.position();
        assert!((p.x - (-2.0 + 0.8)).abs() < 0.001);
        assert!((p.y - (1.0 + (FRAC_PI_2 * 0.7).cos() * 0.6)).abs() < 0.001);
        assert!((p.z - (-2.0)).abs() < 0.001);
    }

    #[test]
    fn test_ornament_resting_position() {
        let mut o = Ornament::new(params(0.5, 1.0), Drift::default(), Material::glossy(0.4));
        o.tick(3.0);
        assert_eq!(o.resting_position(), Vec3::new(-2.0, 1.0, -2.0));
        assert!((o.resting_matrix().translation_part() - o.resting_position()).length() < 0.001);
    }

    #[test]
    fn test_ornament_model_matrix_translation() {
        let o = Ornament::new(params(0.5, 0.0), Drift::default(), Material::glossy(0.4));
        let t = o.model_matrix().translation_part();
        assert!((t - o.position()).length() < 0.001);
    }
}
