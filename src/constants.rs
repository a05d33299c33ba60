// Web-side constants for the DOM contract, asset URLs, render targets and
// the colours handed to the shaders. Choreography and layout live in
// `reveal_core::constants`. No crate imports here; host tests `include!` it.

// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const INTRO_HINT_ID: &str = "intro-hint";
pub const OVERLAY_ID: &str = "home-overlay";
pub const OVERLAY_HEADER_ID: &str = "overlay-header";
pub const OVERLAY_MENU_ID: &str = "overlay-menu";
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CURSOR_BLOB_ID: &str = "cursor-blob";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";

// Classes toggled on the overlay root
pub const SCROLLED_CLASS: &str = "is-scrolled";
pub const MENU_OPEN_CLASS: &str = "menu-open";
pub const LOADING_CLASS: &str = "is-loading";

// Asset URLs
pub const REVEAL_BG_URL: &str = "/assets/reveal_bg.png";
pub const STATUE_LEFT_URL: &str = "/assets/statue.png";
pub const STATUE_RIGHT_URL: &str = "/assets/statue_right.png";
pub const NIGHT_SKY_URL: &str = "/assets/night_sky.png";
pub const OLD_PAPER_URL: &str = "/assets/old_paper.png";

// Subdivision of the paper-burn plane; must match PAPER_GRID in burn.wgsl
pub const PAPER_GRID: u32 = 64;
pub const PAPER_GRID_VERTICES: u32 = PAPER_GRID * PAPER_GRID * 6;
pub const QUAD_VERTICES: u32 = 6;

// Bloom (bright pass runs on the half-res targets)
pub const BLOOM_THRESHOLD: f32 = 1.0;
pub const BLOOM_STRENGTH: f32 = 1.5;
pub const BLOOM_DOWNSAMPLE: u32 = 2;

// Scene clear colour (linear)
pub const CLEAR_RGB: [f64; 3] = [0.0, 0.0, 0.0];

// Linear colours for the sprite shaders
pub const EMBER_COLD_RGB: [f32; 3] = [0.058, 0.058, 0.058]; // #444444
pub const EMBER_HOT_RGB: [f32; 3] = [1.0, 1.0, 1.0];
pub const HALO_RGB: [f32; 3] = [1.0, 0.402, 0.0]; // #ffaa00
pub const DUST_RGB: [f32; 3] = [1.0, 0.66, 0.17];
pub const FRAME_RGB: [f32; 3] = [0.84, 0.66, 0.3];
