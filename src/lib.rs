mod game;
pub mod messages;

pub use game::*;
