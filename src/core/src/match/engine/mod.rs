pub mod ai;
pub mod ball;
pub mod collision;
pub mod context;
pub mod engine;
pub mod entity;
pub mod field;
pub mod goal;
pub mod player;
pub mod random;
pub mod score;
pub mod settings;
pub mod team;

pub use ai::*;
pub use ball::*;
pub use collision::*;
pub use context::*;
pub use engine::*;
pub use entity::*;
pub use field::*;
pub use goal::*;
pub use player::*;
pub use random::*;
pub use score::*;
pub use settings::*;
pub use team::*;
