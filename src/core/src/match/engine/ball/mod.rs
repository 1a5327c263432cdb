pub mod ball;
pub mod events;

pub use ball::*;
pub use events::*;
