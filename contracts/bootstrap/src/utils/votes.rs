use crate::errors::ContractErrors;
use crate::storage::deposits::{DepositsStorageFunc, Totals};
use crate::storage::protocols::ProtocolsDataFunc;
use crate::storage::votes::VotesDataFunc;
use soroban_sdk::{panic_with_error, Address, Env, Vec};

/// Validates every entry of a vote batch and returns its total, nothing is written
pub fn tally_votes(
    e: &Env,
    voter: &Address,
    protocols: &Vec<Address>,
    amounts: &Vec<u128>,
) -> u128 {
    if protocols.len() != amounts.len() {
        panic_with_error!(&e, &ContractErrors::InvalidVoteInput);
    }

    let mut total: u128 = 0;
    for (protocol, amount) in protocols.iter().zip(amounts.iter()) {
        if !e._protocols().is_whitelisted(&protocol) {
            panic_with_error!(&e, &ContractErrors::NotWhitelisted);
        }

        // The tally of a winner is what its incentives are split with, so it can't move
        if e._protocols().is_winner(&protocol) {
            panic_with_error!(&e, &ContractErrors::AlreadyWinner);
        }

        total = total
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::TooManyVotes));
    }

    let used: u128 = e
        ._votes()
        .used(voter)
        .checked_add(total)
        .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::TooManyVotes));
    if used > e._deposits().deposit(voter) {
        panic_with_error!(&e, &ContractErrors::TooManyVotes);
    }

    total
}

pub fn commit_votes(
    e: &Env,
    voter: &Address,
    protocols: &Vec<Address>,
    amounts: &Vec<u128>,
    total: u128,
) {
    for (protocol, amount) in protocols.iter().zip(amounts.iter()) {
        let used_protocol: u128 = e._votes().used_protocol(voter, &protocol);
        e._votes()
            .set_used_protocol(voter, &protocol, &(used_protocol + amount));
        let votes: u128 = e._votes().votes(&protocol);
        e._votes().set_votes(&protocol, &(votes + amount));
    }

    let used: u128 = e._votes().used(voter);
    e._votes().set_used(voter, &(used + total));

    let mut totals: Totals = e._deposits().totals();
    totals.voted += total;
    e._deposits().set_totals(&totals);
}

/// Removes every vote `account` gave to `protocol` and returns how many there were
pub fn revoke_votes(e: &Env, account: &Address, protocol: &Address) -> u128 {
    let amount: u128 = e._votes().used_protocol(account, protocol);
    if amount == 0 {
        return 0;
    }

    e._votes().set_used_protocol(account, protocol, &0);
    let used: u128 = e._votes().used(account);
    e._votes().set_used(account, &(used - amount));
    let votes: u128 = e._votes().votes(protocol);
    e._votes().set_votes(protocol, &(votes - amount));

    let mut totals: Totals = e._deposits().totals();
    totals.voted -= amount;
    e._deposits().set_totals(&totals);

    amount
}
