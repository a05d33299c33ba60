// Host-side tests for scroll ranges, signals and the overlay layout.

use reveal_core::constants::*;
use reveal_core::*;

#[test]
fn scroll_progress_is_bounded_and_monotonic() {
    let range = WHITE_PAPER_RANGE;
    let mut prev = 0.0;
    for s in (-500..4000).step_by(7) {
        let p = range.progress(s as f32);
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= prev);
        prev = p;
    }
}

#[test]
fn white_paper_range_scenario() {
    assert_eq!(WHITE_PAPER_RANGE.progress(500.0), 0.0);
    assert!((WHITE_PAPER_RANGE.progress(1550.0) - 0.5).abs() < 1e-6);
    assert_eq!(WHITE_PAPER_RANGE.progress(2600.0), 1.0);
    assert_eq!(WHITE_PAPER_RANGE.progress(9000.0), 1.0);
}

#[test]
fn degenerate_ranges_never_produce_nan() {
    let p = scroll_progress(100.0, 100.0, 100.0);
    assert!(p.is_finite());
    assert_eq!(scroll_progress(f32::NAN, 0.0, 10.0), 0.0);
    assert_eq!(scroll_progress(f32::INFINITY, 0.0, 10.0), 1.0);
    assert_eq!(scroll_progress(f32::NEG_INFINITY, 0.0, 10.0), 0.0);
}

#[test]
fn checked_range_rejects_backwards_input() {
    assert!(ScrollRange::checked(10.0, 0.0).is_err());
    assert!(ScrollRange::checked(0.0, f32::NAN).is_err());
    let r = ScrollRange::checked(100.0, 2100.0).unwrap();
    assert_eq!(r, NIGHT_SKY_RANGE);
}

#[test]
fn map_range_clamps_to_the_domain() {
    assert_eq!(map_range(-50.0, (0.0, 400.0), (35.0, 5.0)), 35.0);
    assert_eq!(map_range(200.0, (0.0, 400.0), (35.0, 5.0)), 20.0);
    assert_eq!(map_range(900.0, (0.0, 400.0), (35.0, 5.0)), 5.0);
}

#[test]
fn signal_versions_only_move_on_change() {
    let (w, r) = signal(0.0f32);
    let r2 = r.clone();
    let v0 = r.version();
    assert!(!w.set(0.0));
    assert!(!r.changed_since(v0));
    assert!(w.set(12.5));
    assert!(r2.changed_since(v0));
    assert_eq!(r2.get(), 12.5);
    assert_eq!(w.reader().get(), 12.5);
}

#[test]
fn header_and_menu_endpoints() {
    let h0 = header_layout(0.0);
    assert_eq!((h0.top_pct, h0.left_pct, h0.x_pct, h0.y_pct, h0.scale), (35.0, 50.0, -50.0, -50.0, 1.0));
    let h1 = header_layout(400.0);
    assert_eq!((h1.top_pct, h1.left_pct, h1.x_pct, h1.y_pct), (5.0, 5.0, 0.0, 0.0));
    assert!((h1.scale - 0.65).abs() < 1e-6);
    assert_eq!(header_layout(5000.0), h1);

    let m0 = menu_layout(0.0);
    assert_eq!((m0.top_pct, m0.left_pct, m0.x_pct, m0.y_pct), (45.0, 50.0, -50.0, 10.0));
    let m1 = menu_layout(400.0);
    assert_eq!((m1.top_pct, m1.left_pct, m1.x_pct, m1.y_pct), (50.0, 5.0, 0.0, -50.0));
}

#[test]
fn overlay_flags_use_raw_scroll() {
    let d = Director::default();
    let mut o = OverlayChoreographer::new();
    let f = o.update(0.0, 0.016, &d, 0.0);
    assert!(!f.is_scrolled);
    let f = o.update(SCROLLED_FLAG_PX + 1.0, 0.016, &d, 0.016);
    assert!(f.is_scrolled);
    // Layout still trails the raw offset that flipped the flag
    assert!(f.header.top_pct > header_layout(SCROLLED_FLAG_PX).top_pct);
    assert_eq!(OverlayTheme::for_scroll(DARK_SECTION_PX), OverlayTheme::LightOnDark);
    assert_eq!(OverlayTheme::for_scroll(DARK_SECTION_PX + 1.0), OverlayTheme::DarkOnLight);
}

#[test]
fn overlay_layout_lags_behind_scroll() {
    let d = Director::default();
    let mut o = OverlayChoreographer::new();
    o.update(400.0, 0.016, &d, 0.0);
    let f = o.update(0.0, 1.0 / 60.0, &d, 0.016);
    assert!(f.header.top_pct < 10.0);
    let mut last = f;
    for i in 0..600 {
        last = o.update(0.0, 1.0 / 60.0, &d, 0.016 * i as f64);
    }
    assert_eq!(last.header, header_layout(0.0));
}

#[test]
fn overlay_stays_hidden_until_its_cue() {
    let mut d = Director::default();
    let mut o = OverlayChoreographer::new();
    let f = o.update(300.0, 0.016, &d, 1.0);
    assert!(!f.visible);
    assert_eq!(f.opacity, 0.0);
    d.activate(2.0);
    assert!(!o.update(300.0, 0.016, &d, 5.9).visible);
    let f = o.update(300.0, 0.016, &d, 6.5);
    assert!(f.visible && f.opacity > 0.0 && f.opacity < 1.0);
    assert_eq!(o.update(300.0, 0.016, &d, 7.0).opacity, 1.0);
}

#[test]
fn intro_hint_fades_in_then_out() {
    let mut d = Director::default();
    assert_eq!(hint_opacity(&d, 0.5), 0.0);
    assert!(hint_opacity(&d, 2.0) > 0.0);
    assert_eq!(hint_opacity(&d, 3.0), 1.0);
    let pulsing = hint_opacity(&d, 4.5);
    assert!(pulsing > 0.4 && pulsing < 1.0);
    d.activate(10.0);
    assert_eq!(hint_opacity(&d, 11.0), 0.0);
}
