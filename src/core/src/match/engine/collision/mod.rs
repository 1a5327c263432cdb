pub mod resolve;
pub mod system;

pub use resolve::*;
pub use system::*;
