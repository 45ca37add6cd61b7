use soroban_sdk::{symbol_short, Address, Env};

pub fn applied(e: &Env, protocol: &Address, caller: &Address) {
    e.events()
        .publish((symbol_short!("apply"), protocol.clone()), caller.clone());
}

pub fn whitelisted(e: &Env, protocol: &Address, status: bool) {
    e.events()
        .publish((symbol_short!("whitelist"), protocol.clone()), status);
}

pub fn incentivized(e: &Env, protocol: &Address, asset: &Address, depositor: &Address, amount: u128) {
    e.events().publish(
        (symbol_short!("incentive"), protocol.clone(), asset.clone()),
        (depositor.clone(), amount),
    );
}

pub fn deposited(e: &Env, caller: &Address, beneficiary: &Address, amount: u128) {
    e.events().publish(
        (symbol_short!("deposit"), beneficiary.clone()),
        (caller.clone(), amount),
    );
}

pub fn claimed(e: &Env, account: &Address, receiver: &Address, amount: u128) {
    e.events().publish(
        (symbol_short!("claim"), account.clone()),
        (receiver.clone(), amount),
    );
}

pub fn voted(e: &Env, voter: &Address, protocol: &Address, amount: u128) {
    e.events().publish(
        (symbol_short!("vote"), protocol.clone()),
        (voter.clone(), amount),
    );
}

pub fn vote_undone(e: &Env, account: &Address, protocol: &Address, amount: u128) {
    e.events().publish(
        (symbol_short!("undo_vote"), protocol.clone()),
        (account.clone(), amount),
    );
}

pub fn winner(e: &Env, protocol: &Address) {
    e.events()
        .publish((symbol_short!("winner"),), protocol.clone());
}

pub fn incentive_claimed(e: &Env, protocol: &Address, asset: &Address, account: &Address, amount: u128) {
    e.events().publish(
        (symbol_short!("inc_claim"), protocol.clone(), asset.clone()),
        (account.clone(), amount),
    );
}

pub fn incentive_refunded(e: &Env, protocol: &Address, asset: &Address, depositor: &Address, amount: u128) {
    e.events().publish(
        (symbol_short!("refund"), protocol.clone(), asset.clone()),
        (depositor.clone(), amount),
    );
}

pub fn repaid(e: &Env, payer: &Address, amount: u128) {
    e.events()
        .publish((symbol_short!("repay"), payer.clone()), amount);
}

pub fn split(e: &Env, treasury_share: u128, pol_share: u128) {
    e.events()
        .publish((symbol_short!("split"),), (treasury_share, pol_share));
}
