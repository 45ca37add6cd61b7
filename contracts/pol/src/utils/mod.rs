pub mod core;
pub mod events;
