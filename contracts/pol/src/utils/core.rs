use crate::errors::ContractErrors;
use crate::storage::core::{CoreFunc, CoreState};
use soroban_sdk::{panic_with_error, Env};

/// Allowance that is never decremented, also used as "everything" when sending
pub const UNLIMITED: u128 = u128::MAX;

pub fn core_state(e: &Env) -> CoreState {
    e.core_state()
        .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::NotStarted))
}

pub fn validate_admin(e: &Env) -> CoreState {
    let core_state: CoreState = core_state(e);
    core_state.admin.require_auth();
    core_state
}
