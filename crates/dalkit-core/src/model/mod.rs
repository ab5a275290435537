//! Business-facing domain types

pub mod player;
pub mod position;
pub mod team;

pub use player::Player;
pub use position::Position;
pub use team::Team;
