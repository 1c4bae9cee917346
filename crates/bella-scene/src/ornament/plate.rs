//! Spinning plate of garnish spheres

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use super::Material;
use crate::color::Color;
use crate::math::{Mat4, Vec3};

/// One garnish sphere, positioned relative to the plate center
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Garnish {
    pub offset: Vec3,
    pub radius: f32,
    pub color: Color,
}

/// Static plate parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlateParams {
    pub position: Vec3,
    /// Fixed tilt about X (radians)
    pub tilt: f32,
    /// Rotation about Y (radians per second)
    pub spin: f32,
    pub garnishes: Vec<Garnish>,
}

impl PlateParams {
    /// The two-garnish plate shown in the About section
    pub fn garnished(position: Vec3) -> Self {
        Self {
            position,
            tilt: PI / 8.0,
            spin: 0.35,
            garnishes: vec![
                Garnish {
                    offset: Vec3::new(0.45, 0.12, 0.0),
                    radius: 0.16,
                    color: Color::hex(0xf97316),
                },
                Garnish {
                    offset: Vec3::new(-0.45, 0.06, 0.0),
                    radius: 0.1,
                    color: Color::hex(0xef4444),
                },
            ],
        }
    }
}

/// Animated plate state
#[derive(Clone, Debug, PartialEq)]
pub struct Plate {
    params: PlateParams,
    rotation_y: f32,
}

impl Plate {
    pub fn new(params: PlateParams) -> Self {
        Self {
            params,
            rotation_y: 0.0,
        }
    }

    /// Advance by `delta` seconds
    pub fn tick(&mut self, delta: f32) {
        if delta.is_finite() && delta > 0.0 {
            self.rotation_y += delta * self.params.spin;
        }
    }

    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    #[inline]
    pub fn params(&self) -> &PlateParams {
        &self.params
    }

    pub(crate) fn carry_over(&mut self, previous: &Plate) {
        self.rotation_y = previous.rotation_y;
    }

    /// Group transform: translate, tilt about X, then spin about the tilted Y
    pub fn group_matrix(&self) -> Mat4 {
        Mat4::translation(self.params.position)
            * Mat4::rotation_x(self.params.tilt)
            * Mat4::rotation_y(self.rotation_y)
    }

    /// Model transform and color of every garnish for the current frame
    pub fn garnish_transforms(&self) -> impl Iterator<Item = (Mat4, Color, Material)> + '_ {
        let group = self.group_matrix();
        self.params.garnishes.iter().map(move |g| {
            let model = group * Mat4::translation(g.offset) * Mat4::scale(g.radius);
            (model, g.color, Material::MATTE)
        })
    }
}
