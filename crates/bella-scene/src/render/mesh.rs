//! UV sphere mesh generation

use std::f32::consts::PI;

use bytemuck::{Pod, Zeroable};

/// Segments around the equator and rings pole to pole
pub const SPHERE_SEGMENTS: u32 = 64;

/// Mesh vertex: position and normal on the unit sphere
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed triangle mesh of a unit sphere
#[derive(Clone, Debug)]
pub struct SphereMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Build a unit sphere with `segments` longitudinal and `rings`
    /// latitudinal subdivisions (both clamped to at least 3 and 2).
    pub fn new(segments: u32, rings: u32) -> Self {
        let segments = segments.max(3);
        let rings = rings.max(2);

        let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
        for ring in 0..=rings {
            let theta = ring as f32 / rings as f32 * PI;
            let (sin_t, cos_t) = theta.sin_cos();
            for seg in 0..=segments {
                let phi = seg as f32 / segments as f32 * 2.0 * PI;
                let (sin_p, cos_p) = phi.sin_cos();
                let p = [sin_t * cos_p, cos_t, sin_t * sin_p];
                vertices.push(Vertex {
                    position: p,
                    normal: p,
                });
            }
        }

        let stride = segments + 1;
        let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
        for ring in 0..rings {
            for seg in 0..segments {
                let a = ring * stride + seg;
                let b = a + stride;
                // Counter-clockwise when seen from outside
                indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
            }
        }

        Self { vertices, indices }
    }

    /// Default-resolution sphere
    pub fn standard() -> Self {
        Self::new(SPHERE_SEGMENTS, SPHERE_SEGMENTS)
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}
