//! Integration tests for the scene core
//!
//! These tests drive the public API the way the page does:
//! - Viewport changes flowing into section layouts
//! - Per-section scene state animating independently
//! - Reveal timing for a staggered list
//! - The menu table and site configuration

use bella_scene::menu::{self, DISH_REVEAL_STAGGER_MS};
use bella_scene::reveal::{INITIAL_OFFSET_PX, REVEAL_DURATION_MS};
use bella_scene::{
    Breakpoint, LayoutMode, RevealPhase, RevealState, SceneState, SectionId, SiteConfig, Vec3,
    Viewport, DISHES,
};

// =============================================================================
// Viewport Classification Tests
// =============================================================================

#[test]
fn test_breakpoint_boundaries() {
    assert!(Viewport::new(639.0, 0.0).is_compact(Breakpoint::Sm));
    assert!(!Viewport::new(640.0, 0.0).is_compact(Breakpoint::Sm));
    assert!(Viewport::new(767.0, 0.0).is_compact(Breakpoint::Md));
    assert!(!Viewport::new(768.0, 0.0).is_compact(Breakpoint::Md));
}

#[test]
fn test_resize_flips_section_layouts() {
    let mut viewport = Viewport::default();
    for section in SectionId::all() {
        assert_eq!(section.layout(&viewport), LayoutMode::Wide);
    }

    viewport = viewport.with_width(700.0);
    assert_eq!(SectionId::Hero.layout(&viewport), LayoutMode::Compact);
    assert_eq!(SectionId::About.layout(&viewport), LayoutMode::Wide);
    assert_eq!(SectionId::Contact.layout(&viewport), LayoutMode::Compact);
    assert_eq!(SectionId::Menu.layout(&viewport), LayoutMode::Wide);

    viewport = viewport.with_width(400.0);
    assert_eq!(SectionId::About.layout(&viewport), LayoutMode::Compact);
    assert_eq!(SectionId::Menu.layout(&viewport), LayoutMode::Wide);
}

#[test]
fn test_navbar_scroll_threshold() {
    let config = SiteConfig::default();
    let viewport = Viewport::default();
    assert!(!viewport.with_scroll(50.0).is_scrolled(config.scroll_threshold));
    assert!(viewport.with_scroll(51.0).is_scrolled(config.scroll_threshold));
}

// =============================================================================
// Scene Tests
// =============================================================================

#[test]
fn test_hero_scene_wide_and_compact() {
    let wide = SectionId::Hero.scene_for(&Viewport::new(1024.0, 0.0));
    assert_eq!(wide.ornament_sizes(), vec![1.6, 1.2, 0.9, 0.9]);
    assert_eq!(wide.ornament_positions()[0], Vec3::new(-3.0, 1.2, -2.0));

    let compact = SectionId::Hero.scene_for(&Viewport::new(400.0, 0.0));
    assert_eq!(compact.ornament_sizes(), vec![0.9, 0.7, 0.5, 0.6]);
    assert_eq!(compact.ornament_positions()[0], Vec3::new(-1.5, 0.6, -1.5));
}

#[test]
fn test_every_section_draws_spheres() {
    let viewport = Viewport::default();
    for section in SectionId::all() {
        let state = SceneState::new(section.scene_for(&viewport));
        assert!(!state.instances().is_empty(), "{:?} drew nothing", section);
    }
}

#[test]
fn test_scene_states_animate_independently() {
    let viewport = Viewport::default();
    let mut hero = SceneState::new(SectionId::Hero.scene_for(&viewport));
    let mut hero_twin = SceneState::new(SectionId::Hero.scene_for(&viewport));

    hero.tick(0.5);
    hero.tick(0.5);
    hero_twin.tick(0.25);

    assert!((hero.elapsed() - 1.0).abs() < 0.001);
    assert!((hero_twin.elapsed() - 0.25).abs() < 0.001);
    assert_ne!(hero.ornaments()[0].phase(), hero_twin.ornaments()[0].phase());
}

#[test]
fn test_resize_keeps_drift_phase() {
    let mut state = SceneState::new(SectionId::Hero.scene_for(&Viewport::new(1024.0, 0.0)));
    state.tick(2.0);
    let phase = state.ornaments()[1].phase();

    state.retarget(SectionId::Hero.scene_for(&Viewport::new(400.0, 0.0)));

    assert!((state.ornaments()[1].phase() - phase).abs() < 0.001);
    assert!((state.ornaments()[1].params().radius - 0.7).abs() < 0.001);
}

#[test]
fn test_ornaments_stay_within_drift_bounds() {
    let spec = SectionId::Hero.scene(LayoutMode::Wide);
    let (amp_x, amp_y) = (spec.drift.amplitude_x, spec.drift.amplitude_y);
    let mut state = SceneState::new(spec);

    for _ in 0..600 {
        state.tick(1.0 / 60.0);
        for ornament in state.ornaments() {
            let (dx, dy) = ornament.offset();
            assert!(dx.abs() <= amp_x + 0.001);
            assert!(dy.abs() <= amp_y + 0.001);
        }
    }
}

// =============================================================================
// Reveal Tests
// =============================================================================

#[test]
fn test_staggered_menu_reveal() {
    let mut cards: Vec<RevealState> = (0..DISHES.len())
        .map(|i| RevealState::new(menu::reveal_delay_ms(i)))
        .collect();

    // The whole grid scrolls into view at once
    for card in &mut cards {
        assert!(card.observe(true, 0.0));
    }

    let now = 100.0;
    assert_eq!(cards[0].phase(now), RevealPhase::Animating);
    assert_eq!(cards[1].phase(now), RevealPhase::Animating);
    assert_eq!(cards[2].phase(now), RevealPhase::Delayed);

    let last_done = (11 * DISH_REVEAL_STAGGER_MS + REVEAL_DURATION_MS) as f64;
    assert!(cards.iter().all(|c| c.is_settled(last_done)));
}

#[test]
fn test_reveal_fires_once() {
    let mut reveal = RevealState::new(0);
    assert!(!reveal.observe(false, 0.0));
    assert!(reveal.observe(true, 10.0));
    assert!(!reveal.observe(false, 20.0));
    assert!(!reveal.observe(true, 30.0));

    let done = 10.0 + REVEAL_DURATION_MS as f64;
    assert!((reveal.opacity(done) - 1.0).abs() < 0.001);
    assert!(reveal.offset_px(done).abs() < 0.001);
}

#[test]
fn test_reveal_without_observer() {
    let mut reveal = RevealState::new(500);
    assert!((reveal.offset_px(0.0) - INITIAL_OFFSET_PX).abs() < 0.001);
    reveal.force_visible();
    assert_eq!(reveal.phase(0.0), RevealPhase::Revealed);
}

// =============================================================================
// Menu and Config Tests
// =============================================================================

#[test]
fn test_menu_table() {
    assert_eq!(DISHES.len(), 12);
    assert_eq!(DISHES[0].name, "Noodles");
    assert_eq!(DISHES[11].name, "Chocolate Lava Cake");
    assert!(DISHES.iter().all(|d| d.price.starts_with('$')));
    assert!(DISHES.iter().all(|d| d.price_cents().is_some()));
}

#[test]
fn test_config_override() {
    let config = SiteConfig::from_json(r#"{"owner": "Bella Vista Ltd", "ornaments_enabled": false}"#)
        .unwrap();
    assert_eq!(config.brand, "Bella Vista");
    assert!(!config.ornaments_enabled);
    assert_eq!(config.copyright(2026), "\u{a9} 2026 Bella Vista Ltd. All rights reserved.");
}
