//! GPU-side layouts for scene globals and per-sphere instances

use bytemuck::{Pod, Zeroable};

use crate::scene::{DrawInstance, SceneSpec};

/// Point lights the shader evaluates
pub const MAX_POINT_LIGHTS: usize = 2;

/// Per-frame scene uniforms (must match `Globals` in the WGSL shader)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Globals {
    pub view_proj: [[f32; 4]; 4],
    /// xyz = eye position
    pub camera_pos: [f32; 4],
    /// x = ambient intensity
    pub ambient: [f32; 4],
    /// xyz = direction towards the light, w = intensity (0 = off)
    pub directional: [f32; 4],
    /// xyz = position, w = intensity (0 = off)
    pub point_lights: [[f32; 4]; MAX_POINT_LIGHTS],
}

impl Globals {
    /// Pack a scene's camera and lights for a surface aspect ratio
    pub fn new(spec: &SceneSpec, aspect: f32) -> Self {
        let eye = spec.camera.position;
        let lighting = &spec.lighting;

        let directional = lighting
            .directional
            .map(|l| {
                let d = l.position.normalize();
                [d.x, d.y, d.z, l.intensity]
            })
            .unwrap_or([0.0; 4]);

        let mut point_lights = [[0.0; 4]; MAX_POINT_LIGHTS];
        for (slot, light) in point_lights.iter_mut().zip(lighting.points.iter()) {
            *slot = [light.position.x, light.position.y, light.position.z, light.intensity];
        }

        Self {
            view_proj: spec.camera.view_projection(aspect).cols,
            camera_pos: [eye.x, eye.y, eye.z, 1.0],
            ambient: [lighting.ambient, 0.0, 0.0, 0.0],
            directional,
            point_lights,
        }
    }
}

/// Per-sphere instance data (vertex step mode `Instance`)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    /// Linear RGB, a = 1
    pub color: [f32; 4],
    /// x = metalness, y = roughness, z = emissive intensity
    pub material: [f32; 4],
}

impl From<&DrawInstance> for InstanceRaw {
    fn from(instance: &DrawInstance) -> Self {
        let [r, g, b] = instance.color.to_linear();
        let m = instance.material;
        Self {
            model: instance.model.cols,
            color: [r, g, b, 1.0],
            material: [m.metalness, m.roughness, m.emissive_intensity, 0.0],
        }
    }
}
