pub mod events;
pub mod search;
pub mod state;
