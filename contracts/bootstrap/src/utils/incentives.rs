use crate::storage::incentives::IncentivesDataFunc;
use crate::storage::protocols::ProtocolsDataFunc;
use crate::storage::votes::VotesDataFunc;
use num_integer::div_floor;
use soroban_sdk::{Address, Env, U256};

/// Floor of `total * part / whole`, zero when nobody holds a share.
/// `part` can't be bigger than `whole` so the result always fits back in a u128.
pub fn pro_rata(e: &Env, total: u128, part: u128, whole: u128) -> u128 {
    if whole == 0 {
        return 0;
    }

    match total.checked_mul(part) {
        Some(product) => div_floor(product, whole),
        None => U256::from_u128(e, total)
            .mul(&U256::from_u128(e, part))
            .div(&U256::from_u128(e, whole))
            .to_u128()
            .unwrap_or(total),
    }
}

pub fn claimable_incentive(e: &Env, protocol: &Address, asset: &Address, account: &Address) -> u128 {
    if !e._protocols().is_winner(protocol) {
        return 0;
    }

    if e._incentives().claimed(protocol, asset, account) {
        return 0;
    }

    pro_rata(
        e,
        e._incentives().total(protocol, asset),
        e._votes().used_protocol(account, protocol),
        e._votes().votes(protocol),
    )
}
