use soroban_sdk::{contracttype, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 30;
pub const INSTANCE_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoreState {
    pub admin: Address,

    /// The mintable LSD token, this contract must be its admin
    pub token: Address,

    /// Asset users deposit and protocols pay their application fee with
    pub native: Address,

    /// Vault where the minted tokens are staked until the lock ends
    pub staking: Address,

    pub treasury: Address,
    pub pol: Address,
}

#[contracttype]
pub enum CoreDataKeys {
    CoreState,
}

pub trait CoreFunc {
    fn core_state(&self) -> Option<CoreState>;
    fn set_core_state(&self, core_state: &CoreState);
    fn bump_instance(&self);
}

impl CoreFunc for Env {
    fn core_state(&self) -> Option<CoreState> {
        self.storage().instance().get(&CoreDataKeys::CoreState)
    }

    fn set_core_state(&self, core_state: &CoreState) {
        self.storage()
            .instance()
            .set(&CoreDataKeys::CoreState, core_state);
    }

    fn bump_instance(&self) {
        self.storage()
            .instance()
            .extend_ttl(INSTANCE_BUMP_CONSTANT_THRESHOLD, INSTANCE_BUMP_CONSTANT);
    }
}
