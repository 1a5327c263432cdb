pub mod bounds;
pub mod entity;
pub mod kinematics;

pub use bounds::*;
pub use entity::*;
pub use kinematics::*;
