pub mod goal;
pub mod referee;

pub use goal::*;
pub use referee::*;
