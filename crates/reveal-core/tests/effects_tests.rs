// Host-side tests for the burn evaluators, scene objects, dust, cursor and
// the app store.

use glam::{Vec2, Vec3};
use reveal_core::burn::*;
use reveal_core::constants::*;
use reveal_core::*;

fn grid(n: u32) -> impl Iterator<Item = Vec2> {
    (0..n).flat_map(move |y| {
        (0..n).map(move |x| Vec2::new((x as f32 + 0.5) / n as f32, (y as f32 + 0.5) / n as f32))
    })
}

#[test]
fn burns_are_transparent_at_zero_progress() {
    let grey = Vec3::splat(0.5);
    for p in [0.0, 0.0005, PROGRESS_EPSILON] {
        for uv in grid(24) {
            for time in [0.0, 3.7, 120.0] {
                assert_eq!(paper_burn(uv, p, time, grey).w, 0.0);
                assert_eq!(scroll_burn(uv, p, time, Vec2::new(0.3, -0.2), |_| grey).w, 0.0);
                assert_eq!(white_paper(uv, p, time, grey).w, 0.0);
            }
        }
    }
}

#[test]
fn simplex_noise_is_finite_and_bounded() {
    for uv in grid(40) {
        let n = snoise(uv * 13.0 - Vec2::splat(4.0));
        assert!(n.is_finite());
        assert!(n.abs() <= 1.5);
    }
}

#[test]
fn paper_burn_reveal_grows_with_progress() {
    let mut prev = 0.0;
    for p in [0.05, 0.2, 0.4, 0.6, 0.8, 1.0] {
        let f = paper_burn_revealed_fraction(p, 1.0, 48);
        assert!(f >= prev, "fraction shrank at {}", p);
        prev = f;
    }
    assert!(paper_burn_revealed_fraction(0.05, 1.0, 48) < 0.05);
    assert_eq!(paper_burn_revealed_fraction(1.0, 1.0, 48), 1.0);
}

#[test]
fn unrevealed_paper_is_opaque_black() {
    let c = paper_burn(Vec2::new(0.02, 0.02), 0.05, 0.0, Vec3::ONE);
    assert_eq!(c, glam::Vec4::new(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn night_sky_opens_from_the_centre() {
    let sky = |_: Vec2| Vec3::splat(0.2);
    let centre = scroll_burn(Vec2::splat(0.5), 0.3, 0.0, Vec2::ZERO, sky);
    let corner = scroll_burn(Vec2::new(0.01, 0.01), 0.3, 0.0, Vec2::ZERO, sky);
    assert_eq!(centre.w, 1.0);
    assert_eq!(corner.w, 0.0);
    let full = scroll_burn(Vec2::new(0.01, 0.01), 1.0, 0.0, Vec2::ZERO, sky);
    assert_eq!(full.w, 1.0);
}

#[test]
fn white_paper_rises_from_the_bottom() {
    let paper = Vec3::splat(0.9);
    let mid = 0.45;
    let bottom = white_paper(Vec2::new(0.5, 0.02), mid, 0.0, paper);
    let top = white_paper(Vec2::new(0.5, 0.98), mid, 0.0, paper);
    assert_eq!(bottom.w, 1.0);
    assert_eq!(top.w, 0.0);
    for uv in grid(16) {
        assert_eq!(white_paper(uv, 1.0, 2.0, paper).w, 1.0);
    }
}

#[test]
fn ember_proximity_falls_off_cubically() {
    assert_eq!(ember_proximity(Vec2::ZERO), 1.0);
    assert_eq!(ember_proximity(Vec2::new(EMBER_PROXIMITY_RADIUS, 0.0)), 0.0);
    assert_eq!(ember_proximity(Vec2::new(1.0, 1.0)), 0.0);
    let half = ember_proximity(Vec2::new(EMBER_PROXIMITY_RADIUS * 0.5, 0.0));
    assert!((half - 0.125).abs() < 1e-6);
}

#[test]
fn ember_pulse_speeds_up_near_the_pointer() {
    let d = Director::default();
    let vp = Viewport::default();
    let mut near = Ember::new(&d);
    let mut far = Ember::new(&d);
    for i in 0..120 {
        let now = i as f64 / 60.0;
        let input = |pointer| FrameInput {
            now,
            dt: 1.0 / 60.0,
            pointer,
            scroll: 0.0,
            viewport: vp,
        };
        near.update(&input(Vec2::ZERO));
        far.update(&input(Vec2::new(1.0, 1.0)));
    }
    assert!(near.state().pulse > far.state().pulse * 2.0);
    assert!(near.state().intensity > 0.8);
    assert_eq!(far.state().intensity, 0.0);
}

#[test]
fn image_layout_follows_the_viewport() {
    let small = Viewport::from_pixels(800, 800);
    let big = Viewport::from_pixels(3000, 1000);
    let a = image_layout(Side::Left, 0.0, 0.5, &small);
    let b = image_layout(Side::Right, RIGHT_IMAGE_Y_OFFSET, 0.5, &big);
    assert!(a.target.x < 0.0 && b.target.x > 0.0);
    assert!(a.size.y <= IMAGE_MAX_HEIGHT && b.size.y <= IMAGE_MAX_HEIGHT);
    assert_eq!(b.size.y, IMAGE_MAX_HEIGHT);
    assert_eq!(a.size.x, a.size.y * 0.5);
    assert_eq!(b.target.y, RIGHT_IMAGE_Y_OFFSET);
}

#[test]
fn frame_bars_outline_the_frame() {
    let bars = frame_bars(2.0, 4.0);
    assert_eq!(bars[0].center, Vec2::new(0.0, 2.0));
    assert_eq!(bars[3].center, Vec2::new(1.0, 0.0));
    assert!(bars[4].center.x < 0.0 && bars[4].center.y > 2.0);
    assert!(bars[6].center.x > 0.0 && bars[6].center.y < -2.0);
}

#[test]
fn viewport_is_wider_for_wider_canvases() {
    let a = Viewport::from_pixels(1000, 1000);
    let b = Viewport::from_pixels(2000, 1000);
    assert!((a.height - b.height).abs() < 1e-6);
    assert!((b.width - 2.0 * a.width).abs() < 1e-4);
}

#[test]
fn pointer_ndc_maps_corners() {
    assert_eq!(pointer_ndc(0.0, 0.0, 200.0, 100.0), Vec2::new(-1.0, 1.0));
    assert_eq!(pointer_ndc(200.0, 100.0, 200.0, 100.0), Vec2::new(1.0, -1.0));
    assert_eq!(pointer_ndc(100.0, 50.0, 200.0, 100.0), Vec2::ZERO);
    assert_eq!(pointer_ndc(10.0, 10.0, 0.0, 0.0), Vec2::ZERO);
}

#[test]
fn dust_is_deterministic_for_a_seed() {
    let a = GoldenDust::new(64, 7);
    let b = GoldenDust::new(64, 7);
    let c = GoldenDust::new(64, 8);
    let pa: Vec<Vec3> = a.particles().iter().map(|p| p.position).collect();
    let pb: Vec<Vec3> = b.particles().iter().map(|p| p.position).collect();
    let pc: Vec<Vec3> = c.particles().iter().map(|p| p.position).collect();
    assert_eq!(pa, pb);
    assert_ne!(pa, pc);
    assert_eq!(GoldenDust::landing().particles().len(), DUST_COUNT);
}

#[test]
fn dust_modes_follow_pointer_and_start() {
    let mut dust = GoldenDust::new(200, 1);
    dust.update(Vec2::new(6.0, 0.0), 0.0, 1.0 / 60.0, false);
    assert_eq!(dust.mode(), DustMode::Roam);

    for i in 0..240 {
        dust.update(Vec2::ZERO, i as f32 / 60.0, 1.0 / 60.0, false);
    }
    assert_eq!(dust.mode(), DustMode::Ring);
    let mean_radius: f32 = dust
        .particles()
        .iter()
        .map(|p| p.position.truncate().length())
        .sum::<f32>()
        / 200.0;
    assert!(mean_radius < 1.0);

    let before: Vec<f32> = dust.particles().iter().map(|p| p.position.truncate().length()).collect();
    dust.update(Vec2::ZERO, 5.0, 0.1, true);
    assert_eq!(dust.mode(), DustMode::Explode);
    for (p, r0) in dust.particles().iter().zip(before) {
        assert!(p.position.truncate().length() >= r0);
    }
}

#[test]
fn dust_fades_over_the_dispersal_cue() {
    let mut d = Director::default();
    assert_eq!(dust_appearance(&d, 0.0), (DUST_SIZE, DUST_OPACITY));
    d.activate(1.0);
    let (size, opacity) = dust_appearance(&d, 1.5);
    assert!(size < DUST_SIZE && opacity < DUST_OPACITY);
    assert_eq!(dust_appearance(&d, 1.0 + DUST_EXIT_SEC), (0.0, 0.0));
}

#[test]
fn cursor_fades_in_on_first_move_and_trails() {
    let mut c = CustomCursor::new();
    assert_eq!(c.update(0.0).opacity, 0.0);
    c.on_pointer_move(Vec2::new(10.0, 20.0), 1.0);
    let f = c.update(1.0);
    assert_eq!(f.dot, Vec2::new(10.0, 20.0));
    assert_eq!(f.blob, Vec2::new(10.0, 20.0));
    assert_eq!(c.update(1.5).opacity, 1.0);

    c.on_pointer_move(Vec2::new(110.0, 20.0), 2.0);
    let f = c.update(2.0);
    assert_eq!(f.dot, Vec2::new(110.0, 20.0));
    assert_eq!(f.blob, Vec2::new(10.0, 20.0));
    let mid = c.update(2.2).blob.x;
    assert!(mid > 10.0 && mid < 110.0);
    assert_eq!(c.update(2.5).blob, Vec2::new(110.0, 20.0));
}

#[test]
fn cursor_blob_grows_on_hover() {
    let mut c = CustomCursor::new();
    assert!(c.set_variant(CursorVariant::Hover, 0.0));
    assert!(!c.set_variant(CursorVariant::Hover, 0.1));
    assert_eq!(c.update(0.3).blob_scale, CURSOR_HOVER_SCALE);
    assert!(c.set_variant(CursorVariant::Click, 1.0));
    assert_eq!(c.update(1.5).blob_scale, 1.0);
}

#[test]
fn cursor_cancel_freezes_the_trailing_blob() {
    let mut c = CustomCursor::new();
    c.on_pointer_move(Vec2::new(10.0, 20.0), 0.0);
    c.on_pointer_move(Vec2::new(110.0, 20.0), 1.0);
    let mid = c.update(1.1).blob;
    assert!(mid.x > 10.0 && mid.x < 110.0);
    c.cancel();
    assert_eq!(c.update(5.0).blob, mid);
}

#[test]
fn app_store_counts_real_changes() {
    let mut s = AppStore::new();
    assert!(s.state().is_loading);
    assert!(!s.state().is_menu_open);
    assert_eq!(s.state().cursor_variant, CursorVariant::Default);
    assert!(s.set_loading(false));
    assert!(!s.set_loading(false));
    assert!(s.toggle_menu());
    assert!(s.state().is_menu_open);
    assert!(s.set_cursor_variant(CursorVariant::Hover));
    assert!(!s.set_cursor_variant(CursorVariant::Hover));
}
