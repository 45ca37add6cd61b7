pub mod allowances;
pub mod core;
