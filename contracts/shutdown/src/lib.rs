#![no_std]

mod contract;
mod errors;
mod storage;
mod utils;

mod tests;

pub use crate::contract::{ShutdownContract, ShutdownContractClient};
pub use crate::errors::ContractErrors;
pub use crate::storage::core::CoreState;
