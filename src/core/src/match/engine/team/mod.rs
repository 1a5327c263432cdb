pub mod formation;
pub mod team;

pub use formation::*;
pub use team::*;
