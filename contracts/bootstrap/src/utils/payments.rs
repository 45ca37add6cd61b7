use crate::storage::core::CoreState;
use num_integer::div_floor;
use soroban_sdk::{contractclient, token, Address, Env};

/// Share of every split that goes to the treasury, the rest goes to the POL
pub const TREASURY_SHARE_NUMERATOR: u128 = 9;
pub const TREASURY_SHARE_DENOMINATOR: u128 = 10;

#[contractclient(name = "StakingVaultClient")]
pub trait StakingVault {
    /// Pulls `assets` of the staked token from `from` and credits it with shares
    fn deposit(e: Env, from: Address, assets: u128) -> u128;
    fn transfer(e: Env, from: Address, to: Address, shares: u128);
    fn balance(e: Env, id: Address) -> u128;
}

pub fn receive_asset(e: &Env, asset: &Address, from: &Address, amount: u128) {
    token::Client::new(e, asset).transfer(from, &e.current_contract_address(), &(amount as i128));
}

pub fn send_asset(e: &Env, asset: &Address, to: &Address, amount: u128) {
    token::Client::new(e, asset).transfer(&e.current_contract_address(), to, &(amount as i128));
}

pub fn asset_balance(e: &Env, asset: &Address) -> u128 {
    token::Client::new(e, asset).balance(&e.current_contract_address()) as u128
}

/// Mints the LSD token to this contract and stakes it, the shares stay here until claimed
pub fn mint_and_stake(e: &Env, core_state: &CoreState, amount: u128) {
    let contract: Address = e.current_contract_address();
    token::StellarAssetClient::new(e, &core_state.token).mint(&contract, &(amount as i128));
    token::Client::new(e, &core_state.token).approve(
        &contract,
        &core_state.staking,
        &(amount as i128),
        &e.ledger().sequence(),
    );
    StakingVaultClient::new(e, &core_state.staking).deposit(&contract, &amount);
}

pub fn send_staked(e: &Env, core_state: &CoreState, to: &Address, shares: u128) {
    StakingVaultClient::new(e, &core_state.staking).transfer(
        &e.current_contract_address(),
        to,
        &shares,
    );
}

pub fn burn_token(e: &Env, core_state: &CoreState, from: &Address, amount: u128) {
    token::Client::new(e, &core_state.token).burn(from, &(amount as i128));
}

/// Returns (treasury share, POL share), the POL share takes the rounding remainder
pub fn split_amount(amount: u128) -> (u128, u128) {
    let treasury_share: u128 = div_floor(
        amount * TREASURY_SHARE_NUMERATOR,
        TREASURY_SHARE_DENOMINATOR,
    );
    (treasury_share, amount - treasury_share)
}
