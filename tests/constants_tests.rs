// Host-side tests for the web constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

const BURN_WGSL: &str = include_str!("../crates/reveal-core/shaders/burn.wgsl");

#[test]
fn element_ids_are_unique_and_non_empty() {
    let ids = [
        CANVAS_ID,
        INTRO_HINT_ID,
        OVERLAY_ID,
        OVERLAY_HEADER_ID,
        OVERLAY_MENU_ID,
        CURSOR_DOT_ID,
        CURSOR_BLOB_ID,
        MENU_TOGGLE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.starts_with('#'), "ids are looked up without a selector prefix");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn asset_urls_are_distinct_pngs() {
    let urls = [
        REVEAL_BG_URL,
        STATUE_LEFT_URL,
        STATUE_RIGHT_URL,
        NIGHT_SKY_URL,
        OLD_PAPER_URL,
    ];
    for (i, a) in urls.iter().enumerate() {
        assert!(a.starts_with("/assets/"));
        assert!(a.ends_with(".png"));
        assert!(!urls[i + 1..].contains(a));
    }
}

#[test]
fn paper_grid_matches_burn_shader() {
    let decl = format!("const PAPER_GRID: u32 = {}u;", PAPER_GRID);
    assert!(BURN_WGSL.contains(&decl), "burn.wgsl must declare {decl}");
    assert_eq!(PAPER_GRID_VERTICES, PAPER_GRID * PAPER_GRID * QUAD_VERTICES);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bloom_settings_are_sane() {
    assert!(BLOOM_THRESHOLD > 0.0);
    assert!(BLOOM_STRENGTH > 0.0);
    assert!(BLOOM_DOWNSAMPLE >= 1);
}

#[test]
fn colours_are_linear_unit_range() {
    for rgb in [EMBER_COLD_RGB, EMBER_HOT_RGB, HALO_RGB, DUST_RGB, FRAME_RGB] {
        for c in rgb {
            assert!((0.0..=1.0).contains(&c));
        }
    }
    for c in CLEAR_RGB {
        assert!((0.0..=1.0).contains(&c));
    }
    // The ember heats from a dim grey up to white
    for (cold, hot) in EMBER_COLD_RGB.iter().zip(EMBER_HOT_RGB) {
        assert!(*cold < hot);
    }
}
