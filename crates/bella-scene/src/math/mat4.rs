//! Column-major 4x4 matrix for model, view and projection transforms

use super::Vec3;

/// Column-major 4x4 matrix (`cols[c][r]`), matching WGSL `mat4x4<f32>` layout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    pub cols: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// Identity matrix
    pub const IDENTITY: Mat4 = Mat4 {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Translation matrix
    pub fn translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = [t.x, t.y, t.z, 1.0];
        m
    }

    /// Uniform scale matrix
    pub fn scale(s: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[0][0] = s;
        m.cols[1][1] = s;
        m.cols[2][2] = s;
        m
    }

    /// Rotation about the X axis (radians)
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, c, s, 0.0],
                [0.0, -s, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Rotation about the Y axis (radians)
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            cols: [
                [c, 0.0, -s, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [s, 0.0, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Right-handed perspective projection with a `[0, 1]` depth range
    pub fn perspective(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y_deg.to_radians() * 0.5).tan();
        let range = near - far;
        Self {
            cols: [
                [f / aspect, 0.0, 0.0, 0.0],
                [0.0, f, 0.0, 0.0],
                [0.0, 0.0, far / range, -1.0],
                [0.0, 0.0, near * far / range, 0.0],
            ],
        }
    }

    /// Right-handed view matrix looking from `eye` towards `target`
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);
        Self {
            cols: [
                [s.x, u.x, -f.x, 0.0],
                [s.y, u.y, -f.y, 0.0],
                [s.z, u.z, -f.z, 0.0],
                [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
            ],
        }
    }

    /// Translation * rotation_y * uniform scale, the usual ornament transform
    pub fn from_trs(translation: Vec3, rotation_y: f32, scale: f32) -> Self {
        Self::translation(translation) * Self::rotation_y(rotation_y) * Self::scale(scale)
    }

    /// Transform a point (w = 1), without perspective divide
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let c = &self.cols;
        Vec3::new(
            c[0][0] * p.x + c[1][0] * p.y + c[2][0] * p.z + c[3][0],
            c[0][1] * p.x + c[1][1] * p.y + c[2][1] * p.z + c[3][1],
            c[0][2] * p.x + c[1][2] * p.y + c[2][2] * p.z + c[3][2],
        )
    }

    /// Transform a point and return homogeneous clip coordinates
    pub fn project(&self, p: Vec3) -> [f32; 4] {
        let c = &self.cols;
        let mut out = [0.0; 4];
        for (r, slot) in out.iter_mut().enumerate() {
            *slot = c[0][r] * p.x + c[1][r] * p.y + c[2][r] * p.z + c[3][r];
        }
        out
    }

    /// Translation component
    #[inline]
    pub fn translation_part(&self) -> Vec3 {
        Vec3::new(self.cols[3][0], self.cols[3][1], self.cols[3][2])
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut out = [[0.0f32; 4]; 4];
        for (j, col) in out.iter_mut().enumerate() {
            for (i, cell) in col.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.cols[k][i] * rhs.cols[j][k]).sum();
            }
        }
        Mat4 { cols: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 0.001
    }

    #[test]
    fn test_identity_mul() {
        let m = Mat4::from_trs(Vec3::new(1.0, 2.0, 3.0), 0.4, 2.0);
        assert_eq!(m * Mat4::IDENTITY, m);
        assert_eq!(Mat4::IDENTITY * m, m);
    }

    #[test]
    fn test_rotation_y_quarter_turn() {
        let p = Mat4::rotation_y(FRAC_PI_2).transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!(approx(p, Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_rotation_x_quarter_turn() {
        let p = Mat4::rotation_x(FRAC_PI_2).transform_point(Vec3::new(0.0, 1.0, 0.0));
        assert!(approx(p, Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_trs_applies_scale_then_translation() {
        let m = Mat4::from_trs(Vec3::new(1.0, 0.0, 0.0), 0.0, 2.0);
        let p = m.transform_point(Vec3::new(1.0, 1.0, 0.0));
        assert!(approx(p, Vec3::new(3.0, 2.0, 0.0)));
        assert!(approx(m.translation_part(), Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_look_at_puts_target_on_negative_z() {
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 6.0), Vec3::ZERO, Vec3::UP);
        let p = view.transform_point(Vec3::ZERO);
        assert!(approx(p, Vec3::new(0.0, 0.0, -6.0)));
    }

    #[test]
    fn test_perspective_depth_range() {
        let proj = Mat4::perspective(50.0, 1.0, 0.1, 100.0);

        let near = proj.project(Vec3::new(0.0, 0.0, -0.1));
        assert!((near[2] / near[3]).abs() < 0.001);

        let far = proj.project(Vec3::new(0.0, 0.0, -100.0));
        assert!((far[2] / far[3] - 1.0).abs() < 0.001);
    }
}
