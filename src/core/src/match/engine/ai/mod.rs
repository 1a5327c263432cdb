pub mod decision;
pub mod manager;

pub use decision::*;
pub use manager::*;
