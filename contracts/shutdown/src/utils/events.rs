use soroban_sdk::{symbol_short, Address, Env};

pub fn redeemed(e: &Env, caller: &Address, amount: u128) {
    e.events()
        .publish((symbol_short!("redeem"), caller.clone()), amount);
}

pub fn pool_updated(e: &Env, pool: &Address) {
    e.events()
        .publish((symbol_short!("set_pool"),), pool.clone());
}
