// Host-side tests for the activation sequence, the director and the scene
// choreography as a whole.

use glam::Vec2;
use reveal_core::constants::*;
use reveal_core::*;

#[test]
fn landing_sequence_is_ordered_by_offset() {
    let seq = ActivationSequence::landing();
    let offsets: Vec<f64> = seq.cues().iter().map(|c| c.start_offset).collect();
    let mut sorted = offsets.clone();
    sorted.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(offsets, sorted);
    assert_eq!(seq.cues().len(), 9);
}

#[test]
fn landing_sequence_total_duration_is_the_reveal() {
    let seq = ActivationSequence::landing();
    assert!((seq.total_duration() - REVEAL_DURATION_SEC).abs() < 1e-9);
}

#[test]
fn sequence_rejects_bad_cues() {
    let dup = ActivationSequence::new([
        Cue::new(Effect::PaperBurn, 0.0, 1.0),
        Cue::new(Effect::PaperBurn, 1.0, 1.0),
    ]);
    assert!(matches!(dup, Err(RevealError::Sequence(_))));

    let negative = ActivationSequence::new([Cue::new(Effect::LeftImage, -1.0, 1.0)]);
    assert!(negative.is_err());

    let nan = ActivationSequence::new([Cue::new(Effect::LeftImage, 0.0, f64::NAN)]);
    assert!(nan.is_err());
}

#[test]
fn custom_sequence_is_sorted() {
    let seq = ActivationSequence::new([
        Cue::new(Effect::FrameFadeIn, 2.0, 1.0),
        Cue::new(Effect::PaperBurn, 0.0, 3.0),
    ])
    .unwrap();
    assert_eq!(seq.cues()[0].effect, Effect::PaperBurn);
    assert_eq!(seq.cue(Effect::FrameFadeIn).unwrap().end(), 3.0);
}

#[test]
fn started_by_lists_reached_cues() {
    let seq = ActivationSequence::landing();
    let at: Vec<Effect> = seq.started_by(3.6).collect();
    assert!(at.contains(&Effect::PaperBurn));
    assert!(at.contains(&Effect::LeftImage));
    assert!(!at.contains(&Effect::RightImage));
}

#[test]
fn activation_happens_exactly_once() {
    let mut d = Director::default();
    assert_eq!(d.phase(), Phase::Idle);
    assert!(d.activate(2.0));
    assert!(!d.activate(3.0));
    assert_eq!(d.activation_time(), Some(2.0));
    assert_eq!(d.phase(), Phase::Started { at: 2.0 });
}

#[test]
fn cue_times_are_measured_from_activation() {
    let mut d = Director::default();
    assert_eq!(d.cue_start(Effect::LeftImage), None);
    d.activate(10.0);
    assert_eq!(d.cue_start(Effect::LeftImage), Some(13.5));
    let t = d.cue_time(Effect::RightImage, 14.0).unwrap();
    assert!((t - 0.1).abs() < 1e-9);
    assert!(!d.has_cue_started(Effect::OverlayFadeIn, 13.9));
    assert!(d.has_cue_started(Effect::OverlayFadeIn, 14.0));
    assert_eq!(d.cue_progress(Effect::OverlayFadeIn, 14.5), 0.5);
}

#[test]
fn scroll_is_locked_until_the_unlock_cue() {
    let mut d = Director::default();
    assert!(d.scroll_locked(0.0));
    assert_eq!(d.enforce_scroll(300.0, 0.0), SCROLL_LOCK_ANCHOR_PX);
    d.activate(1.0);
    assert!(d.scroll_locked(1.0));
    assert!(d.scroll_locked(5.49));
    assert_eq!(d.enforce_scroll(300.0, 5.0), 0.0);
    assert!(!d.scroll_locked(5.5));
    assert_eq!(d.enforce_scroll(300.0, 6.0), 300.0);
}

#[test]
fn sequence_without_unlock_cue_frees_scroll_on_start() {
    let seq = ActivationSequence::new([Cue::new(Effect::PaperBurn, 0.0, 1.0)]).unwrap();
    let mut d = Director::new(seq);
    assert!(d.scroll_locked(0.0));
    d.activate(0.0);
    assert!(!d.scroll_locked(0.0));
}

fn run(scene: &mut Scene, from: f64, to: f64, scroll: f32) -> SceneFrame {
    let vp = Viewport::default();
    let mut t = from;
    let mut last = scene.update(t, Vec2::ZERO, scroll, vp);
    while t < to {
        t = (t + 1.0 / 60.0).min(to);
        last = scene.update(t, Vec2::ZERO, scroll, vp);
    }
    last
}

fn click(scene: &mut Scene, vp: &Viewport, at: Vec2, now: f64) -> bool {
    scene.press(vp, at);
    scene.release(vp, at, now)
}

#[test]
fn ember_click_starts_once() {
    let mut scene = Scene::landing();
    let vp = Viewport::default();
    scene.update(0.0, Vec2::ZERO, 0.0, vp);
    assert!(!click(&mut scene, &vp, Vec2::new(0.95, 0.95), 0.5));
    assert!(click(&mut scene, &vp, Vec2::ZERO, 1.0));
    assert!(!click(&mut scene, &vp, Vec2::ZERO, 1.5));
    assert!(!scene.ember_hit(&vp, Vec2::ZERO));
    assert_eq!(scene.director().activation_time(), Some(1.0));
}

#[test]
fn dragging_off_the_ember_does_not_start() {
    let mut scene = Scene::landing();
    let vp = Viewport::default();
    let outside = Vec2::new(0.95, 0.95);
    scene.update(0.0, Vec2::ZERO, 0.0, vp);

    // Pressed on the ember, released elsewhere
    scene.press(&vp, Vec2::ZERO);
    assert!(!scene.release(&vp, outside, 0.5));
    assert!(!scene.director().is_started());

    // Pressed elsewhere, released on the ember
    scene.press(&vp, outside);
    assert!(!scene.release(&vp, Vec2::ZERO, 0.6));
    assert!(!scene.director().is_started());

    // A release alone never counts
    assert!(!scene.release(&vp, Vec2::ZERO, 0.7));
    assert!(click(&mut scene, &vp, Vec2::ZERO, 0.8));
}

#[test]
fn idle_scene_shows_only_the_ember() {
    let mut scene = Scene::landing();
    let f = run(&mut scene, 0.0, 2.0, 250.0);
    assert_eq!(f.background.progress, 0.0);
    assert_eq!(f.left_image.opacity, 0.0);
    assert_eq!(f.frame.opacity, 0.0);
    assert_eq!(f.ember.opacity, 1.0);
    assert_eq!(f.night_sky.progress, 0.0);
    assert_eq!(f.white_paper.progress, 0.0);
    assert!(!f.overlay.visible);
    assert_eq!(f.scroll_override, Some(0.0));
}

#[test]
fn activation_timeline_scenario() {
    let mut scene = Scene::landing();
    run(&mut scene, 0.0, 1.0, 0.0);
    let t0 = 1.0;
    assert!(scene.activate(t0));

    let f = run(&mut scene, t0, t0 + 0.5, 800.0);
    assert!(f.background.progress > 0.0);
    assert_eq!(f.scroll_override, Some(0.0));
    assert_eq!(f.left_image.opacity, 0.0);

    let f = run(&mut scene, t0 + 0.5, t0 + 3.6, 0.0);
    assert!(f.left_image.opacity > 0.0);
    assert_eq!(f.right_image.opacity, 0.0);
    assert!(f.ember.opacity < 1e-6);
    assert!((f.ember.scale - EMBER_EXIT_SCALE).abs() < 1e-4);

    let f = run(&mut scene, t0 + 3.6, t0 + 4.6, 0.0);
    assert_eq!(f.scroll_override, None);
    assert!(f.frame.opacity > 0.0 && f.frame.opacity < 1.0);
    assert!(f.overlay.visible);

    let f = run(&mut scene, t0 + 4.6, t0 + 6.5, 0.0);
    assert_eq!(f.overlay.opacity, 1.0);
    assert_eq!(f.overlay.hint_opacity, 0.0);
    assert_eq!(f.dust_opacity, 0.0);

    let f = run(&mut scene, t0 + 6.5, t0 + 8.2, 0.0);
    assert_eq!(f.background.progress, 1.0);
    assert_eq!(f.frame.opacity, 1.0);
    assert_eq!(f.left_image.scale, 1.0);
}

#[test]
fn scroll_drives_burns_after_unlock() {
    let mut scene = Scene::landing();
    scene.update(0.0, Vec2::ZERO, 0.0, Viewport::default());
    scene.activate(0.0);
    run(&mut scene, 0.0, 5.0, 0.0);

    let f = run(&mut scene, 5.0, 5.1, 500.0);
    assert_eq!(f.white_paper.progress, 0.0);
    assert!((f.night_sky.progress - 0.2).abs() < 1e-5);

    let f = run(&mut scene, 5.1, 5.2, 1550.0);
    assert!((f.white_paper.progress - 0.5).abs() < 1e-5);

    let f = run(&mut scene, 5.2, 5.3, 2600.0);
    assert_eq!(f.white_paper.progress, 1.0);
    assert_eq!(f.overlay.theme, OverlayTheme::DarkOnLight);
}

#[test]
fn teardown_freezes_animations() {
    let mut scene = Scene::landing();
    scene.update(0.0, Vec2::ZERO, 0.0, Viewport::default());
    scene.activate(0.0);
    let before = run(&mut scene, 0.0, 2.0, 0.0);
    scene.teardown();
    let after = run(&mut scene, 2.0, 9.0, 0.0);
    assert_eq!(before.background.progress, after.background.progress);
    assert_eq!(after.left_image.opacity, 0.0);
}

#[test]
fn resize_round_trip_restores_layout() {
    let mut scene = Scene::landing();
    let wide = Viewport::from_pixels(1600, 900);
    let tall = Viewport::from_pixels(600, 1000);
    scene.update(0.0, Vec2::ZERO, 0.0, wide);
    scene.activate(0.0);
    let mut t = 0.0;
    while t < 9.0 {
        t += 0.05;
        scene.update(t, Vec2::ZERO, 0.0, wide);
    }
    let a = scene.update(9.0, Vec2::ZERO, 0.0, wide);
    let b = scene.update(9.1, Vec2::ZERO, 0.0, tall);
    let c = scene.update(9.2, Vec2::ZERO, 0.0, wide);

    assert_ne!(a.left_image.position, b.left_image.position);
    assert_eq!(a.left_image.position, c.left_image.position);
    assert_eq!(a.right_image.size, c.right_image.size);
    assert_eq!(a.frame.width, c.frame.width);
    assert_eq!(a.background.size, c.background.size);
}
