pub mod combat;
pub mod movement;
pub mod render;
pub mod rules;

pub use combat::*;
pub use movement::*;
pub use render::*;
pub use rules::*;
