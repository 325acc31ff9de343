pub mod constants;
pub mod gesture;
pub mod particles;
pub mod session;
pub mod shapes;
pub mod viewport;

pub use constants::*;
pub use gesture::*;
pub use particles::*;
pub use session::*;
pub use shapes::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
