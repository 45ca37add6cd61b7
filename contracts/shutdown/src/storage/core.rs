use soroban_sdk::{contracttype, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 30;
pub const INSTANCE_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoreState {
    pub admin: Address,
    pub native: Address,

    /// Contract that owns the debt and can burn the LSD token
    pub bootstrap: Address,

    /// Reserve paying the native asset back, it must allow this contract to spend it
    pub pol: Address,
}

#[contracttype]
pub enum CoreDataKeys {
    CoreState,

    /// Optional liquidity pool whose kill switch also unlocks redemptions
    Pool,
}

pub trait CoreFunc {
    fn core_state(&self) -> Option<CoreState>;
    fn set_core_state(&self, core_state: &CoreState);
    fn pool(&self) -> Option<Address>;
    fn set_pool(&self, pool: &Address);
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

    fn pool(&self) -> Option<Address> {
        self.storage().instance().get(&CoreDataKeys::Pool)
    }

    fn set_pool(&self, pool: &Address) {
        self.storage().instance().set(&CoreDataKeys::Pool, pool);
    }

    fn bump_instance(&self) {
        self.storage()
            .instance()
            .extend_ttl(INSTANCE_BUMP_CONSTANT_THRESHOLD, INSTANCE_BUMP_CONSTANT);
    }
}
