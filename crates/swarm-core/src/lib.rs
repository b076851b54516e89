pub mod buffer;
pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod font;
pub mod gate;
pub mod morph;
pub mod outline;
pub mod sampler;
pub mod scene;
pub mod sections;
pub mod swarm;
pub mod text;
pub mod tween;

pub use buffer::*;
pub use camera::*;
pub use config::*;
pub use error::{Result, SwarmError};
pub use font::FontFace;
pub use gate::*;
pub use morph::*;
pub use outline::*;
pub use sampler::*;
pub use scene::*;
pub use sections::*;
pub use swarm::Swarm;
pub use text::*;
pub use tween::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../../shaders/particles.wgsl");
pub static POST_WGSL: &str = include_str!("../../../shaders/post.wgsl");
