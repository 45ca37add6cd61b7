#![no_std]

mod contract;
mod errors;
mod storage;
mod utils;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

mod tests;

pub use crate::contract::{BootstrapContract, BootstrapContractClient};
pub use crate::errors::ContractErrors;
pub use crate::storage::core::CoreState;
pub use crate::storage::deposits::Totals;
pub use crate::storage::periods::{Period, Periods};
