use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractErrors {
    AlreadyStarted = 0,
    NotStarted = 1,
    InvalidAmount = 2,
    NotKilled = 10,
}
