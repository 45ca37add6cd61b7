use crate::errors::ContractErrors;
use crate::storage::allowances::AllowancesDataFunc;
use crate::storage::core::{CoreFunc, CoreState};
use crate::utils::core::{core_state, validate_admin, UNLIMITED};
use crate::utils::events;
use soroban_sdk::{contract, contractimpl, log, panic_with_error, token, Address, BytesN, Env};

pub trait PolContractTrait {
    fn init(e: Env, admin: Address);
    fn get_core_state(e: Env) -> CoreState;
    fn upgrade(e: Env, hash: BytesN<32>);
    fn set_admin(e: Env, address: Address);

    fn approve(e: Env, asset: Address, spender: Address, amount: u128);
    fn allowance(e: Env, asset: Address, spender: Address) -> u128;
    fn send(e: Env, spender: Address, asset: Address, receiver: Address, amount: u128);

    fn kill(e: Env);
    fn killed(e: Env) -> bool;
}

#[contract]
pub struct PolContract;

#[contractimpl]
impl PolContractTrait for PolContract {
    fn init(e: Env, admin: Address) {
        if e.core_state().is_some() {
            panic_with_error!(&e, &ContractErrors::AlreadyStarted);
        }

        e.set_core_state(&CoreState {
            admin,
            killed: false,
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

    fn approve(e: Env, asset: Address, spender: Address, amount: u128) {
        validate_admin(&e);
        e._allowances().set_allowance(&asset, &spender, &amount);
        e.bump_instance();

        events::approved(&e, &asset, &spender, amount);
    }

    fn allowance(e: Env, asset: Address, spender: Address) -> u128 {
        e.bump_instance();
        e._allowances().allowance(&asset, &spender)
    }

    fn send(e: Env, spender: Address, asset: Address, receiver: Address, amount: u128) {
        spender.require_auth();
        core_state(&e);

        let asset_client = token::Client::new(&e, &asset);
        let amount: u128 = if amount == UNLIMITED {
            asset_client.balance(&e.current_contract_address()) as u128
        } else {
            amount
        };

        if amount == 0 {
            panic_with_error!(&e, &ContractErrors::InvalidAmount);
        }

        let allowance: u128 = e._allowances().allowance(&asset, &spender);
        if allowance != UNLIMITED {
            if amount > allowance {
                log!(&e, "allowance too low", allowance, amount);
                panic_with_error!(&e, &ContractErrors::InsufficientAllowance);
            }
            e._allowances()
                .set_allowance(&asset, &spender, &(allowance - amount));
        }
        e.bump_instance();

        asset_client.transfer(&e.current_contract_address(), &receiver, &(amount as i128));
        events::sent(&e, &asset, &spender, &receiver, amount);
    }

    fn kill(e: Env) {
        let mut core_state: CoreState = validate_admin(&e);
        if core_state.killed {
            panic_with_error!(&e, &ContractErrors::AlreadyKilled);
        }

        core_state.killed = true;
        e.set_core_state(&core_state);
        e.bump_instance();

        events::killed(&e);
    }

    fn killed(e: Env) -> bool {
        e.bump_instance();
        core_state(&e).killed
    }
}
