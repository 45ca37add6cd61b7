pub mod core;
pub mod deposits;
pub mod incentives;
pub mod periods;
pub mod protocols;
pub mod votes;
