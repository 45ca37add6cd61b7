use soroban_sdk::{symbol_short, Address, Env};

pub fn approved(e: &Env, asset: &Address, spender: &Address, amount: u128) {
    e.events().publish(
        (symbol_short!("approve"), asset.clone(), spender.clone()),
        amount,
    );
}

pub fn sent(e: &Env, asset: &Address, spender: &Address, receiver: &Address, amount: u128) {
    e.events().publish(
        (symbol_short!("send"), asset.clone(), spender.clone()),
        (receiver.clone(), amount),
    );
}

pub fn killed(e: &Env) {
    e.events().publish((symbol_short!("kill"),), true);
}
