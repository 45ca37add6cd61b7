use crate::errors::ContractErrors;
use crate::storage::core::{CoreFunc, CoreState};
use crate::utils::clients::{LiquidityPoolClient, PolClient};
use soroban_sdk::{panic_with_error, Env};

pub fn core_state(e: &Env) -> CoreState {
    e.core_state()
        .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::NotStarted))
}

pub fn validate_admin(e: &Env) -> CoreState {
    let core_state: CoreState = core_state(e);
    core_state.admin.require_auth();
    core_state
}

/// Read live from the collaborators on every call, nothing is cached here
pub fn is_killed(e: &Env, core_state: &CoreState) -> bool {
    if let Some(pool) = e.pool() {
        if LiquidityPoolClient::new(e, &pool).killed() {
            return true;
        }
    }

    PolClient::new(e, &core_state.pol).killed()
}
