use crate::errors::ContractErrors;
use crate::storage::core::{CoreFunc, CoreState};
use crate::utils::clients::{BootstrapClient, PolClient};
use crate::utils::core::{core_state, is_killed, validate_admin};
use crate::utils::events;
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, BytesN, Env};

pub trait ShutdownContractTrait {
    fn init(e: Env, admin: Address, native: Address, bootstrap: Address, pol: Address);
    fn get_core_state(e: Env) -> CoreState;
    fn upgrade(e: Env, hash: BytesN<32>);
    fn set_admin(e: Env, address: Address);
    fn set_pool(e: Env, pool: Address);

    fn killed(e: Env) -> bool;
    fn redeem(e: Env, caller: Address, amount: u128);
}

#[contract]
pub struct ShutdownContract;

#[contractimpl]
impl ShutdownContractTrait for ShutdownContract {
    fn init(e: Env, admin: Address, native: Address, bootstrap: Address, pol: Address) {
        if e.core_state().is_some() {
            panic_with_error!(&e, &ContractErrors::AlreadyStarted);
        }

        e.set_core_state(&CoreState {
            admin,
            native,
            bootstrap,
            pol,
        });
        e.bump_instance();
    }

    fn get_core_state(e: Env) -> CoreState {
        e.bump_instance();
        core_state(&e)
    }

    fn upgrade(e: Env, hash: BytesN<32>) {
        validate_admin(&e);
        e.deployer().update_current_contract_wasm(hash);
        e.bump_instance();
    }

    fn set_admin(e: Env, address: Address) {
        let mut core_state: CoreState = validate_admin(&e);
        core_state.admin = address;
        e.set_core_state(&core_state);
        e.bump_instance();
    }

    fn set_pool(e: Env, pool: Address) {
        validate_admin(&e);
        e.set_pool(&pool);
        e.bump_instance();

        events::pool_updated(&e, &pool);
    }

    fn killed(e: Env) -> bool {
        e.bump_instance();
        is_killed(&e, &core_state(&e))
    }

    fn redeem(e: Env, caller: Address, amount: u128) {
        caller.require_auth();
        let core_state: CoreState = core_state(&e);

        if amount == 0 {
            panic_with_error!(&e, &ContractErrors::InvalidAmount);
        }

        if !is_killed(&e, &core_state) {
            panic_with_error!(&e, &ContractErrors::NotKilled);
        }
        e.bump_instance();

        log!(&e, "redeeming", caller, amount);
        BootstrapClient::new(&e, &core_state.bootstrap).repay(&caller, &amount);
        PolClient::new(&e, &core_state.pol).send(
            &e.current_contract_address(),
            &core_state.native,
            &caller,
            &amount,
        );

        events::redeemed(&e, &caller, amount);
    }
}
