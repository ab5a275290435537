pub mod logging;
pub mod roster;
