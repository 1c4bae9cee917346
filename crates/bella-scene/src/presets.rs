//! Per-section scene presets
//!
//! Each section of the page draws its own decorative layer. Sections with a
//! responsive layout take a [`LayoutMode`] and return smaller, tighter
//! ornaments in compact mode.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::layout::{Breakpoint, LayoutMode, Viewport};
use crate::math::Vec3;
use crate::ornament::{Drift, OrnamentParams, PlateParams};
use crate::scene::{CameraSpec, Light, Lighting, SceneSpec};

const CRIMSON: Color = Color::hex(0xe11d48);
const ROSE: Color = Color::hex(0xf43f5e);
const BLUSH: Color = Color::hex(0xfb7185);
const GARNET: Color = Color::hex(0xbe123c);

/// Page sections that carry a decorative layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Menu,
    Contact,
}

impl SectionId {
    /// All decorated sections, in page order
    pub fn all() -> &'static [SectionId] {
        &[
            SectionId::Hero,
            SectionId::About,
            SectionId::Menu,
            SectionId::Contact,
        ]
    }

    /// DOM anchor id
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Hero => "home",
            SectionId::About => "about",
            SectionId::Menu => "menu",
            SectionId::Contact => "contact",
        }
    }

    /// Breakpoint that switches this section's layer to compact mode
    pub fn breakpoint(&self) -> Option<Breakpoint> {
        match self {
            SectionId::Hero | SectionId::Contact => Some(Breakpoint::Md),
            SectionId::About => Some(Breakpoint::Sm),
            SectionId::Menu => None,
        }
    }

    /// Layout mode for this section at the given viewport
    pub fn layout(&self, viewport: &Viewport) -> LayoutMode {
        self.breakpoint()
            .map(|bp| viewport.layout(bp))
            .unwrap_or_default()
    }

    /// Scene for this section in the given layout
    pub fn scene(&self, layout: LayoutMode) -> SceneSpec {
        match self {
            SectionId::Hero => hero(layout),
            SectionId::About => about(layout),
            SectionId::Menu => menu(),
            SectionId::Contact => contact(layout),
        }
    }

    /// Scene for this section at the given viewport
    pub fn scene_for(&self, viewport: &Viewport) -> SceneSpec {
        self.scene(self.layout(viewport))
    }

    /// CSS opacity of the decorative layer at the given viewport
    ///
    /// Menu and Contact dim their layer below the small breakpoint, which is
    /// independent of the breakpoint that sizes their ornaments.
    pub fn layer_opacity(&self, viewport: &Viewport) -> f32 {
        match self {
            SectionId::Hero => 0.6,
            SectionId::About => 0.45,
            SectionId::Menu | SectionId::Contact => viewport.layout(Breakpoint::Sm).pick(0.5, 0.4),
        }
    }
}

fn ornament(color: Color, speed: f32, offset: f32, radius: f32, position: [f32; 3]) -> OrnamentParams {
    OrnamentParams {
        position: position.into(),
        radius,
        color,
        speed,
        offset,
    }
}

/// Lighting shared by the Menu and Contact layers
fn soft_lighting() -> Lighting {
    Lighting {
        ambient: 0.6,
        points: vec![Light::new(Vec3::new(5.0, 5.0, 5.0), 1.5)],
        directional: None,
    }
}

/// Hero layer: four large spheres with a wider swing
pub fn hero(layout: LayoutMode) -> SceneSpec {
    let l = layout;
    SceneSpec {
        camera: CameraSpec::new(Vec3::new(0.0, 0.0, 8.0), 55.0),
        lighting: Lighting {
            ambient: 0.5,
            points: vec![Light::new(Vec3::new(5.0, 5.0, 5.0), 1.4)],
            directional: None,
        },
        drift: Drift {
            amplitude_x: 1.1,
            amplitude_y: 0.7,
            rate_y: 0.8,
            spin: 0.25,
        },
        emissive_intensity: 0.45,
        ornaments: vec![
            ornament(CRIMSON, 0.5, 0.0, l.pick(1.6, 0.9), l.pick([-3.0, 1.2, -2.0], [-1.5, 0.6, -1.5])),
            ornament(ROSE, 0.9, 1.0, l.pick(1.2, 0.7), l.pick([2.8, -1.5, -2.5], [1.3, -1.0, -2.0])),
            ornament(BLUSH, 1.1, 2.0, l.pick(0.9, 0.5), l.pick([-1.0, -2.2, -3.0], [-0.6, -1.3, -2.5])),
            ornament(GARNET, 1.3, 3.0, l.pick(0.9, 0.6), l.pick([3.0, 1.5, -2.0], [1.8, 0.8, -1.8])),
        ],
        plate: None,
    }
}

/// About layer: four spheres and a spinning garnish plate
pub fn about(layout: LayoutMode) -> SceneSpec {
    let l = layout;
    SceneSpec {
        camera: CameraSpec::new(Vec3::new(0.0, 0.0, 6.0), 50.0),
        lighting: Lighting {
            ambient: 0.6,
            points: vec![Light::new(Vec3::new(-5.0, -3.0, -5.0), 0.6)],
            directional: Some(Light::new(Vec3::new(5.0, 5.0, 5.0), 1.2)),
        },
        drift: Drift::default(),
        emissive_intensity: 0.35,
        ornaments: vec![
            ornament(CRIMSON, 0.5, 0.0, l.pick(1.4, 1.0), l.pick([-2.2, 1.2, -2.0], [-1.2, 0.8, -2.0])),
            ornament(ROSE, 0.8, 1.0, l.pick(1.0, 0.8), l.pick([2.0, -1.0, -2.5], [1.2, -0.8, -2.5])),
            ornament(BLUSH, 0.9, 2.0, l.pick(0.6, 0.5), l.pick([-1.0, -2.0, -3.0], [-0.6, -1.5, -3.0])),
            ornament(GARNET, 1.3, 3.0, l.pick(0.5, 0.4), l.pick([3.0, 1.5, -2.0], [2.0, 1.0, -2.0])),
        ],
        plate: Some(PlateParams::garnished(Vec3::new(-0.6, -0.1, -1.2))),
    }
}

/// Menu layer: three spheres, no responsive variant
pub fn menu() -> SceneSpec {
    SceneSpec {
        camera: CameraSpec::new(Vec3::new(0.0, 0.0, 6.0), 50.0),
        lighting: soft_lighting(),
        drift: Drift::default(),
        emissive_intensity: 0.4,
        ornaments: vec![
            ornament(CRIMSON, 0.5, 0.0, 1.4, [-2.0, 1.0, -2.0]),
            ornament(ROSE, 0.8, 1.0, 1.2, [2.0, -1.0, -2.5]),
            ornament(BLUSH, 0.9, 2.0, 0.6, [-1.0, -2.0, -3.0]),
        ],
        plate: None,
    }
}

/// Contact layer: three spheres behind the booking form
pub fn contact(layout: LayoutMode) -> SceneSpec {
    let l = layout;
    SceneSpec {
        camera: CameraSpec::new(Vec3::new(0.0, 0.0, 6.0), 50.0),
        lighting: soft_lighting(),
        drift: Drift::default(),
        emissive_intensity: 0.4,
        ornaments: vec![
            ornament(CRIMSON, 0.5, 0.0, l.pick(1.4, 0.8), l.pick([-2.0, 1.0, -2.0], [-1.0, 0.5, -1.5])),
            ornament(ROSE, 0.8, 1.0, l.pick(1.2, 0.6), l.pick([2.0, -1.0, -2.5], [1.0, -0.5, -2.0])),
            ornament(BLUSH, 0.9, 2.0, l.pick(0.6, 0.4), l.pick([-1.0, -2.0, -3.0], [-0.6, -1.0, -2.5])),
        ],
        plate: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_sizes_by_layout() {
        assert_eq!(hero(LayoutMode::Wide).ornament_sizes(), vec![1.6, 1.2, 0.9, 0.9]);
        assert_eq!(hero(LayoutMode::Compact).ornament_sizes(), vec![0.9, 0.7, 0.5, 0.6]);
    }

    #[test]
    fn test_about_has_plate() {
        assert!(about(LayoutMode::Wide).plate.is_some());
        assert!(about(LayoutMode::Compact).plate.is_some());
        assert!(menu().plate.is_none());
    }

    #[test]
    fn test_section_breakpoints() {
        assert_eq!(SectionId::Hero.breakpoint(), Some(Breakpoint::Md));
        assert_eq!(SectionId::About.breakpoint(), Some(Breakpoint::Sm));
        assert_eq!(SectionId::Contact.breakpoint(), Some(Breakpoint::Md));
        assert_eq!(SectionId::Menu.breakpoint(), None);
    }

    #[test]
    fn test_about_uses_narrow_breakpoint() {
        // 700px is compact for Hero but wide for About
        let vp = Viewport::new(700.0, 0.0);
        assert_eq!(SectionId::Hero.layout(&vp), LayoutMode::Compact);
        assert_eq!(SectionId::About.layout(&vp), LayoutMode::Wide);
    }

    #[test]
    fn test_menu_ignores_viewport() {
        let narrow = SectionId::Menu.scene_for(&Viewport::new(320.0, 0.0));
        let wide = SectionId::Menu.scene_for(&Viewport::new(1920.0, 0.0));
        assert_eq!(narrow, wide);
    }

    #[test]
    fn test_section_anchors() {
        let anchors: Vec<&str> = SectionId::all().iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, vec!["home", "about", "menu", "contact"]);
    }

    #[test]
    fn test_every_scene_has_lighting() {
        for section in SectionId::all() {
            for layout in [LayoutMode::Wide, LayoutMode::Compact] {
                let spec = section.scene(layout);
                assert!(spec.lighting.ambient > 0.0);
                assert!(!spec.lighting.points.is_empty());
            }
        }
    }

    #[test]
    fn test_layer_opacity_follows_small_breakpoint() {
        let tablet = Viewport::new(700.0, 0.0);
        let phone = Viewport::new(639.0, 0.0);

        // 700px is already compact for the Contact ornaments
        assert_eq!(SectionId::Contact.layout(&tablet), LayoutMode::Compact);
        assert!((SectionId::Contact.layer_opacity(&tablet) - 0.5).abs() < 0.001);
        assert!((SectionId::Contact.layer_opacity(&phone) - 0.4).abs() < 0.001);

        assert!((SectionId::Menu.layer_opacity(&Viewport::new(640.0, 0.0)) - 0.5).abs() < 0.001);
        assert!((SectionId::Menu.layer_opacity(&phone) - 0.4).abs() < 0.001);

        assert!((SectionId::Hero.layer_opacity(&phone) - 0.6).abs() < 0.001);
        assert!((SectionId::About.layer_opacity(&phone) - 0.45).abs() < 0.001);
    }
}
