//! Pure engine logic for the fluid metaball background: scene SDF
//! composition, sphere tracing, cursor physics, device quality tiers and the
//! GPU uniform mirror. Nothing in this crate touches the DOM or the GPU, so
//! everything is host-testable.

pub mod config;
pub mod constants;
pub mod cursor;
pub mod march;
pub mod quality;
pub mod scene;
pub mod sdf;
pub mod state;
pub mod uniforms;

/// Raymarched scene shader (vertex + fragment), embedded at compile time.
/// The renderer prepends the tier-derived `SPHERE_COUNT` and
/// `MAX_MARCH_STEPS` constants before creating the module.
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use config::*;
pub use cursor::*;
pub use march::*;
pub use quality::*;
pub use scene::*;
pub use state::*;
pub use uniforms::*;
