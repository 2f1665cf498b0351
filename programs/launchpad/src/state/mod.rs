pub mod campaign;
pub mod investor_position;
pub mod og_points;
pub mod platform;

pub use campaign::*;
pub use investor_position::*;
pub use og_points::*;
pub use platform::*;
