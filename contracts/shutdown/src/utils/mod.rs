pub mod clients;
pub mod core;
pub mod events;
