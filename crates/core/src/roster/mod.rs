pub mod json_store;
pub mod player;

pub use json_store::{load, save, RosterError};
pub use player::{Player, Roster};
