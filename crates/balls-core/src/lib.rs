pub mod animator;
pub mod ball;
pub mod clock;
pub mod color;
pub mod constants;
pub mod field;
pub mod layout;
pub mod legacy;
pub mod surface;
pub mod vector;

pub use animator::*;
pub use ball::*;
pub use clock::*;
pub use color::*;
pub use constants::*;
pub use field::*;
pub use layout::*;
pub use legacy::*;
pub use surface::*;
pub use vector::*;

// Instanced circle shader for GPU frontends
pub static BALLS_WGSL: &str = include_str!("../shaders/balls.wgsl");
