//! Minimal staking vault used by the tests, shares are minted 1:1 with the staked token

use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};

#[contracttype]
enum MockStakingKeys {
    Asset,
    Shares(Address),
}

#[contract]
pub struct MockStaking;

#[contractimpl]
impl MockStaking {
    pub fn init(e: Env, asset: Address) {
        e.storage().instance().set(&MockStakingKeys::Asset, &asset);
    }

    pub fn deposit(e: Env, from: Address, assets: u128) -> u128 {
        from.require_auth();
        let contract: Address = e.current_contract_address();
        token::Client::new(&e, &asset(&e)).transfer_from(
            &contract,
            &from,
            &contract,
            &(assets as i128),
        );
        set_shares(&e, &from, shares(&e, &from) + assets);
        assets
    }

    pub fn transfer(e: Env, from: Address, to: Address, shares_amount: u128) {
        from.require_auth();
        set_shares(&e, &from, shares(&e, &from) - shares_amount);
        set_shares(&e, &to, shares(&e, &to) + shares_amount);
    }

    pub fn balance(e: Env, id: Address) -> u128 {
        shares(&e, &id)
    }

    pub fn withdraw(e: Env, caller: Address, shares_amount: u128) {
        caller.require_auth();
        set_shares(&e, &caller, shares(&e, &caller) - shares_amount);
        token::Client::new(&e, &asset(&e)).transfer(
            &e.current_contract_address(),
            &caller,
            &(shares_amount as i128),
        );
    }
}

fn asset(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&MockStakingKeys::Asset)
        .unwrap()
}

fn shares(e: &Env, id: &Address) -> u128 {
    e.storage()
        .instance()
        .get(&MockStakingKeys::Shares(id.clone()))
        .unwrap_or(0)
}

fn set_shares(e: &Env, id: &Address, amount: u128) {
    e.storage()
        .instance()
        .set(&MockStakingKeys::Shares(id.clone()), &amount);
}
