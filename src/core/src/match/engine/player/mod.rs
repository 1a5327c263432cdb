pub mod input;
pub mod kick;
pub mod movement;
pub mod player;
pub mod state;

pub use input::*;
pub use kick::*;
pub use movement::*;
pub use player::*;
pub use state::*;
