pub mod keyboard;
pub mod resize;

pub use keyboard::*;
pub use resize::*;
