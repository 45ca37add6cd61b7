pub mod core;
pub mod events;
pub mod incentives;
pub mod payments;
pub mod votes;
