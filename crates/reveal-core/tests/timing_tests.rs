// Host-side tests for easing, tweens, springs and exponential smoothing.

use glam::Vec2;
use reveal_core::*;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn every_ease_hits_both_endpoints() {
    for ease in Ease::ALL {
        assert!(approx(ease.apply(0.0), 0.0, 1e-5), "{:?} at 0", ease);
        assert!(approx(ease.apply(1.0), 1.0, 1e-5), "{:?} at 1", ease);
    }
}

#[test]
fn eases_clamp_input_and_ignore_nan() {
    for ease in Ease::ALL {
        assert!(approx(ease.apply(-3.0), 0.0, 1e-5));
        assert!(approx(ease.apply(7.0), 1.0, 1e-5));
        assert!(approx(ease.apply(f32::NAN), 0.0, 1e-5));
    }
}

#[test]
fn non_overshooting_eases_are_monotonic_and_bounded() {
    for ease in Ease::ALL.iter().copied().filter(|e| !e.overshoots()) {
        let mut prev = 0.0;
        for i in 0..=200 {
            let v = ease.apply(i as f32 / 200.0);
            assert!((0.0..=1.0).contains(&v), "{:?} out of range", ease);
            assert!(v + 1e-6 >= prev, "{:?} decreased at step {}", ease, i);
            prev = v;
        }
    }
}

#[test]
fn out_back_overshoots_before_settling() {
    let peak = (0..=100)
        .map(|i| Ease::OutBack.apply(i as f32 / 100.0))
        .fold(f32::MIN, f32::max);
    assert!(peak > 1.0);
}

#[test]
fn power_curves_match_their_named_shapes() {
    assert!(approx(Ease::Power1InOut.apply(0.25), Ease::InOutQuad.apply(0.25), 1e-6));
    assert!(approx(Ease::Power2In.apply(0.5), 0.125, 1e-6));
    assert!(approx(Ease::Power2Out.apply(0.5), 0.875, 1e-6));
    assert!(approx(Ease::Power3Out.apply(0.5), 0.9375, 1e-6));
}

#[test]
fn tween_lands_exactly_on_target() {
    for ease in Ease::ALL {
        let t = Tween::new(0.0, 7.5, 2.0, ease);
        assert_eq!(t.sample(2.0), 7.5);
        assert_eq!(t.sample(100.0), 7.5);
        assert_eq!(t.sample(0.0), 0.0);
    }
}

#[test]
fn tween_offset_delays_the_track() {
    let t = Tween::new(1.0, 0.0, 1.0, Ease::Linear).at(0.5);
    assert_eq!(t.sample(0.4), 1.0);
    assert!(approx(t.sample(1.0), 0.5, 1e-6));
    assert_eq!(t.end(), 1.5);
}

#[test]
fn zero_duration_tween_jumps() {
    let t = Tween::new(0.0, 1.0, 0.0, Ease::Linear);
    assert_eq!(t.sample(-0.1), 0.0);
    assert_eq!(t.sample(0.0), 1.0);
}

#[test]
fn idle_timeline_reports_start_values() {
    let tl = Timeline::new(1.0).with("opacity", Tween::new(0.25, 1.0, 2.0, Ease::Linear));
    assert_eq!(tl.sample("opacity", 50.0), Some(0.25));
    assert_eq!(tl.sample("missing", 50.0), None);
    assert!(!tl.is_running());
}

#[test]
fn running_timeline_respects_delay() {
    let mut tl = Timeline::new(1.0).with("x", Tween::new(0.0, 10.0, 2.0, Ease::Linear));
    tl.play(5.0);
    assert_eq!(tl.sample("x", 5.5), Some(0.0));
    let mid = tl.sample("x", 7.0).unwrap();
    assert!(approx(mid, 5.0, 1e-5));
    assert_eq!(tl.sample("x", 8.0), Some(10.0));
    assert!(tl.is_complete(8.0));
    assert!(!tl.is_complete(7.9));
}

#[test]
fn cancelled_timeline_stops_writing() {
    let mut tl = Timeline::new(0.0).with("x", Tween::new(0.0, 1.0, 1.0, Ease::Linear));
    tl.play(0.0);
    assert!(tl.sample("x", 0.5).is_some());
    tl.cancel();
    assert_eq!(tl.playback(), Playback::Cancelled);
    assert_eq!(tl.sample("x", 0.5), None);
    assert_eq!(tl.sample("x", 5.0), None);
}

#[test]
fn animated_retarget_starts_from_current_value() {
    let mut a = Animated::new(0.0f32);
    a.to(10.0, 0.0, 1.0, Ease::Linear);
    assert!(approx(a.update(0.5), 5.0, 1e-5));
    a.to(0.0, 0.5, 1.0, Ease::Linear);
    assert!(approx(a.update(0.5), 5.0, 1e-5));
    assert!(approx(a.update(1.0), 2.5, 1e-5));
    assert_eq!(a.update(1.5), 0.0);
    assert!(!a.is_animating());
}

#[test]
fn animated_cancel_freezes() {
    let mut a = Animated::new(Vec2::ZERO);
    a.to(Vec2::new(4.0, 0.0), 0.0, 1.0, Ease::Linear);
    a.update(0.25);
    a.cancel();
    assert_eq!(a.update(10.0), Vec2::new(1.0, 0.0));
}

#[test]
fn overlay_spring_is_not_underdamped() {
    let cfg = SpringConfig::new(50.0, 20.0, 1.0);
    assert!(cfg.is_overdamped_or_critical());
    assert!(approx(cfg.damping_ratio(), 20.0 / (2.0 * 50f32.sqrt()), 1e-5));
}

#[test]
fn spring_first_step_snaps_then_lags() {
    let mut s = Spring::new(SpringConfig::new(50.0, 20.0, 1.0));
    assert_eq!(s.step(120.0, 1.0 / 60.0), 120.0);
    let next = s.step(0.0, 1.0 / 60.0);
    assert!(next > 100.0 && next < 120.0);
}

#[test]
fn overdamped_spring_settles_without_overshoot() {
    let mut s = Spring::new(SpringConfig::new(50.0, 20.0, 1.0));
    s.step(0.0, 0.0);
    let mut prev = 0.0;
    for _ in 0..600 {
        let p = s.step(400.0, 1.0 / 60.0);
        assert!(p <= 400.0 + 1e-3);
        assert!(p + 1e-3 >= prev);
        prev = p;
    }
    assert!(s.is_at_rest(400.0));
    assert_eq!(s.position(), 400.0);
}

#[test]
fn spring_settles_on_far_scroll_targets() {
    for target in [2600.0_f32, 10_000.0, -4800.0] {
        let mut s = Spring::new(SpringConfig::new(50.0, 20.0, 1.0));
        s.step(0.0, 0.0);
        for _ in 0..1200 {
            s.step(target, 1.0 / 60.0);
        }
        assert!(s.is_at_rest(target), "stalled short of {target}");
        assert_eq!(s.position(), target);
        assert_eq!(s.velocity(), 0.0);
    }
}

#[test]
fn spring_ignores_non_finite_targets() {
    let mut s = Spring::new(SpringConfig::new(50.0, 20.0, 1.0));
    s.step(10.0, 0.016);
    assert_eq!(s.step(f32::NAN, 0.016), 10.0);
    assert_eq!(s.step(f32::INFINITY, 0.016), 10.0);
}

#[test]
fn frame_factor_rate_reproduces_lerp_at_reference_fps() {
    let rate = rate_from_frame_factor(0.05, 60.0);
    assert!(approx(smoothing_alpha(rate, 1.0 / 60.0), 0.05, 1e-5));
}

#[test]
fn follow_is_frame_rate_independent() {
    let mut slow = Follow::from_frame_factor(0.0f32, 0.1);
    let mut fast = Follow::from_frame_factor(0.0f32, 0.1);
    for _ in 0..30 {
        slow.step(1.0, 1.0 / 30.0);
    }
    for _ in 0..144 {
        fast.step(1.0, 1.0 / 144.0);
    }
    assert!(approx(slow.value(), fast.value(), 1e-4));
}

#[test]
fn follow_holds_on_zero_dt() {
    let mut f = Follow::new(Vec2::new(1.0, 1.0), 5.0);
    assert_eq!(f.step(Vec2::ZERO, 0.0), Vec2::new(1.0, 1.0));
}
