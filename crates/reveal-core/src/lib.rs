pub mod burn;
pub mod constants;
pub mod cursor;
pub mod director;
pub mod dust;
pub mod ease;
pub mod error;
pub mod objects;
pub mod overlay;
pub mod scene;
pub mod scroll;
pub mod sequence;
pub mod signal;
pub mod smoothing;
pub mod spring;
pub mod state;
pub mod tween;
pub mod viewport;

pub static QUAD_WGSL: &str = include_str!("../shaders/quad.wgsl");
pub static BURN_WGSL: &str = include_str!("../shaders/burn.wgsl");
pub static SPRITES_WGSL: &str = include_str!("../shaders/sprites.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub use cursor::*;
pub use director::*;
pub use dust::*;
pub use ease::*;
pub use error::*;
pub use objects::*;
pub use overlay::*;
pub use scene::*;
pub use scroll::*;
pub use sequence::*;
pub use signal::*;
pub use smoothing::*;
pub use spring::*;
pub use state::*;
pub use tween::*;
pub use viewport::*;
