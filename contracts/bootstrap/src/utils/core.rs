use crate::errors::ContractErrors;
use crate::storage::core::{CoreFunc, CoreState};
use crate::storage::periods::{Periods, PeriodsFunc, Phase};
use soroban_sdk::{panic_with_error, Env};

/// One unit of any asset, amounts use 18 decimals
pub const UNIT: u128 = 1_000_000_000_000_000_000;

/// Exact amount a protocol pays in the native asset to apply
pub const APPLICATION_FEE: u128 = UNIT;

pub fn core_state(e: &Env) -> CoreState {
    e.core_state()
        .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::NotStarted))
}

pub fn validate_admin(e: &Env) -> CoreState {
    let core_state: CoreState = core_state(e);
    core_state.admin.require_auth();
    core_state
}

pub fn assert_in_period(e: &Env, phase: Phase) -> Periods {
    let periods: Periods = e.periods();
    if !periods.is_active(phase, e.ledger().timestamp()) {
        panic_with_error!(&e, &ContractErrors::OutsidePeriod);
    }
    periods
}

/// Winners can only be declared (and losers refunded) once voting is over and the lock has ended
pub fn assert_voting_concluded(e: &Env) {
    let periods: Periods = e.periods();
    let now: u64 = e.ledger().timestamp();
    if !periods.is_unlocked(now) || !periods.vote.has_ended(now) {
        panic_with_error!(&e, &ContractErrors::OutsidePeriod);
    }
}

pub fn assert_positive(e: &Env, amount: u128) {
    if amount == 0 {
        panic_with_error!(&e, &ContractErrors::InvalidAmount);
    }
}
