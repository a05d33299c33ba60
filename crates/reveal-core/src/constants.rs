use crate::scroll::ScrollRange;

// Shared choreography and layout tuning constants. All times are seconds
// measured from the activation click unless noted otherwise.

// Shader effects
pub const PROGRESS_EPSILON: f32 = 0.001; // at or below this an effect draws nothing

// Activation sequence
pub const REVEAL_DURATION_SEC: f64 = 8.09;
pub const EMBER_EXIT_SEC: f64 = 0.8;
pub const DUST_EXIT_SEC: f64 = 1.5;
pub const HINT_FADE_OUT_SEC: f64 = 1.0;
pub const LEFT_IMAGE_DELAY_SEC: f64 = 3.5;
pub const RIGHT_IMAGE_DELAY_SEC: f64 = 3.9;
pub const IMAGE_ENTRY_SEC: f64 = 2.5;
pub const IMAGE_FADE_SEC: f64 = 1.5;
pub const OVERLAY_DELAY_SEC: f64 = 4.0;
pub const OVERLAY_FADE_SEC: f64 = 1.0;
pub const FRAME_DELAY_SEC: f64 = 4.5;
pub const FRAME_FADE_SEC: f64 = 2.0;
pub const SCROLL_LOCK_SEC: f64 = 4.5;

// Intro hint, measured from page load
pub const HINT_INTRO_DELAY_SEC: f64 = 1.0;
pub const HINT_INTRO_FADE_SEC: f64 = 2.0;

// Scroll ranges (CSS pixels). Every scroll-driven effect reads its range from
// here so thresholds cannot drift apart between components.
pub const OVERLAY_LAYOUT_RANGE: ScrollRange = ScrollRange::new(0.0, 400.0);
pub const IMAGE_EXIT_RANGE: ScrollRange = ScrollRange::new(0.0, 900.0);
pub const NIGHT_SKY_RANGE: ScrollRange = ScrollRange::new(100.0, 2100.0);
pub const WHITE_PAPER_RANGE: ScrollRange = ScrollRange::new(500.0, 2600.0);
pub const SCROLLED_FLAG_PX: f32 = 320.0; // 80% of the overlay layout range
pub const DARK_SECTION_PX: f32 = 1700.0; // overlay flips to dark-on-light past this
pub const SCROLL_LOCK_ANCHOR_PX: f32 = 0.0;

// Smoothing. Factors are the per-frame lerp fractions tuned at 60 Hz; they are
// converted to decay rates so the follow speed is frame-rate independent.
pub const REFERENCE_FPS: f32 = 60.0;
pub const PARALLAX_FOLLOW_FACTOR: f32 = 0.05;
pub const EMBER_INTENSITY_FOLLOW_FACTOR: f32 = 0.1;
pub const MOUSE_LIGHT_FOLLOW_FACTOR: f32 = 0.2;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches

// Parallax strengths (world units per unit of pointer NDC)
pub const BACKGROUND_PARALLAX: f32 = 0.2;
pub const IMAGE_PARALLAX: f32 = 0.5;
pub const FRAME_PARALLAX: f32 = 0.3;

// Overlay spring (stiffness, damping, mass)
pub const OVERLAY_SPRING_STIFFNESS: f32 = 50.0;
pub const OVERLAY_SPRING_DAMPING: f32 = 20.0;
pub const OVERLAY_SPRING_MASS: f32 = 1.0;

// Camera
pub const CAMERA_Z: f32 = 8.0;
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Background paper-burn plane
pub const BACKGROUND_Z: f32 = -5.0;
pub const BACKGROUND_PLANE_SCALE: f32 = 2.0; // twice the viewport since it sits further back

// Sliding images
pub const IMAGE_HEIGHT_FRACTION: f32 = 0.4; // of viewport width
pub const IMAGE_MAX_HEIGHT: f32 = 4.0;
pub const IMAGE_START_X_FRACTION: f32 = 0.45;
pub const IMAGE_START_Y_FRACTION: f32 = -0.4;
pub const LEFT_IMAGE_X_FRACTION: f32 = 0.32;
pub const RIGHT_IMAGE_X_FRACTION: f32 = 0.30;
pub const RIGHT_IMAGE_Y_OFFSET: f32 = -0.8;
pub const IMAGE_START_SCALE: f32 = 1.5;
pub const IMAGE_FEATHER: f32 = 0.15;
pub const IMAGE_EXIT_DISTANCE_FRACTION: f32 = 0.5;

// Central frame
pub const FRAME_Z: f32 = -0.5;
pub const FRAME_WIDTH_FRACTION: f32 = 0.25;
pub const FRAME_HEIGHT_FRACTION: f32 = 0.5;
pub const FRAME_THICKNESS: f32 = 0.02;
pub const FRAME_ACCENT_LEN: f32 = 0.2;
pub const FRAME_ACCENT_INSET: f32 = 0.1;
pub const FRAME_EMISSIVE: f32 = 0.5;

// Heart ember
pub const EMBER_Z: f32 = 1.0;
pub const EMBER_SIZE: f32 = 1.0;
pub const EMBER_HIT_Z: f32 = 1.1;
pub const EMBER_HIT_SIZE: f32 = 1.5;
pub const EMBER_PROXIMITY_RADIUS: f32 = 1.2; // pointer NDC distance at which intensity reaches 0
pub const EMBER_PULSE_SPEED_GAIN: f32 = 15.0;
pub const EMBER_EXIT_SCALE: f32 = 10.0;

// Mouse light
pub const MOUSE_LIGHT_Z: f32 = 1.0;
pub const MOUSE_LIGHT_SIZE: f32 = 0.5;

// Scroll-driven overlays
pub const NIGHT_SKY_Z: f32 = 0.1;
pub const NIGHT_SKY_PLANE_SCALE: f32 = 1.2;
pub const WHITE_PAPER_Z: f32 = 1.0;
pub const WHITE_PAPER_PLANE_SCALE: f32 = 1.5;

// Golden dust
pub const DUST_COUNT: usize = 1500;
pub const DUST_SEED: u64 = 0x00D4_A853;
pub const DUST_SPREAD: f32 = 15.0;
pub const DUST_DEPTH: f32 = 5.0;
pub const DUST_RING_RADIUS: f32 = 0.3;
pub const DUST_RING_THICKNESS: f32 = 0.2;
pub const DUST_HOVER_RADIUS: f32 = 2.0; // world units from centre that pull dust into the ring
pub const DUST_ATTRACTION: f32 = 2.0;
pub const DUST_RING_PULL: f32 = 5.0;
pub const DUST_EXPLOSION_SPEED: f32 = 15.0;
pub const DUST_JITTER: f32 = 0.05;
pub const DUST_SIZE: f32 = 0.08;
pub const DUST_OPACITY: f32 = 0.8;

// Custom cursor
pub const CURSOR_FADE_IN_SEC: f64 = 0.5;
pub const CURSOR_BLOB_FOLLOW_SEC: f64 = 0.5;
pub const CURSOR_SCALE_SEC: f64 = 0.3;
pub const CURSOR_HOVER_SCALE: f32 = 1.5;
