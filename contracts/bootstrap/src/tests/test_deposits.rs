#![cfg(test)]

use crate::errors::ContractErrors;
use crate::storage::deposits::Totals;
use crate::tests::test_utils::{
    create_test_data, deposit, fund_native, init_contract, set_timestamp, TestData,
    DEPOSIT_START, LOCK_END, ONE, VOTE_START,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

#[test]
pub fn test_deposit_early_late() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_contract(&e, &test_data);

    let depositor: Address = Address::generate(&e);
    fund_native(&test_data, &depositor, ONE);

    for timestamp in [DEPOSIT_START - 1, VOTE_START] {
        set_timestamp(&e, timestamp);
        let outside_period_error = test_data
            .contract_client
            .try_deposit(&depositor, &depositor, &ONE)
            .unwrap_err()
            .unwrap();
        assert_eq!(&outside_period_error, &ContractErrors::OutsidePeriod.into());
    }

    set_timestamp(&e, DEPOSIT_START);
    let invalid_amount_error = test_data
        .contract_client
        .try_deposit(&depositor, &depositor, &0)
        .unwrap_err()
        .unwrap();
    assert_eq!(&invalid_amount_error, &ContractErrors::InvalidAmount.into());
}

#[test]
pub fn test_deposit() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_contract(&e, &test_data);

    let alice: Address = Address::generate(&e);
    let bob: Address = Address::generate(&e);
    fund_native(&test_data, &alice, 3 * ONE);
    set_timestamp(&e, DEPOSIT_START);

    test_data.contract_client.deposit(&alice, &alice, &ONE);
    test_data.contract_client.deposit(&alice, &bob, &(2 * ONE));

    assert_eq!(test_data.contract_client.deposits(&alice), ONE);
    assert_eq!(test_data.contract_client.deposits(&bob), 2 * ONE);
    assert_eq!(
        test_data.contract_client.get_totals(),
        Totals {
            debt: 3 * ONE,
            deposited: 3 * ONE,
            voted: 0,
        }
    );

    // The native asset stays here until it's split, the minted tokens are staked
    assert_eq!(test_data.native_client.balance(&alice), 0);
    assert_eq!(
        test_data
            .native_client
            .balance(&test_data.contract_client.address),
        (3 * ONE) as i128
    );
    assert_eq!(
        test_data
            .token_client
            .balance(&test_data.staking_client.address),
        (3 * ONE) as i128
    );
    assert_eq!(
        test_data
            .token_client
            .balance(&test_data.contract_client.address),
        0
    );
    assert_eq!(
        test_data
            .staking_client
            .balance(&test_data.contract_client.address),
        3 * ONE
    );
}

#[test]
pub fn test_claim() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_contract(&e, &test_data);

    let alice: Address = deposit(&e, &test_data, 2 * ONE);
    let receiver: Address = Address::generate(&e);

    set_timestamp(&e, LOCK_END - 1);
    let still_locked_error = test_data
        .contract_client
        .try_claim(&alice, &ONE, &receiver)
        .unwrap_err()
        .unwrap();
    assert_eq!(&still_locked_error, &ContractErrors::StillLocked.into());

    set_timestamp(&e, LOCK_END);
    test_data.contract_client.claim(&alice, &ONE, &receiver);
    assert_eq!(test_data.staking_client.balance(&receiver), ONE);
    assert_eq!(test_data.contract_client.claimed(&alice), ONE);

    let exceeds_deposit_error = test_data
        .contract_client
        .try_claim(&alice, &(ONE + 1), &alice)
        .unwrap_err()
        .unwrap();
    assert_eq!(
        &exceeds_deposit_error,
        &ContractErrors::ClaimExceedsDeposit.into()
    );

    test_data.contract_client.claim(&alice, &ONE, &alice);
    assert_eq!(test_data.staking_client.balance(&alice), ONE);
    assert_eq!(test_data.contract_client.claimed(&alice), 2 * ONE);
    assert_eq!(
        test_data
            .staking_client
            .balance(&test_data.contract_client.address),
        0
    );

    // Claiming doesn't change the deposit nor the debt
    assert_eq!(test_data.contract_client.deposits(&alice), 2 * ONE);
    assert_eq!(test_data.contract_client.get_totals().debt, 2 * ONE);
}

#[test]
pub fn test_claim_overflowing_amount() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_contract(&e, &test_data);

    let alice: Address = deposit(&e, &test_data, ONE);
    set_timestamp(&e, LOCK_END);
    test_data.contract_client.claim(&alice, &1, &alice);

    let exceeds_deposit_error = test_data
        .contract_client
        .try_claim(&alice, &u128::MAX, &alice)
        .unwrap_err()
        .unwrap();
    assert_eq!(
        &exceeds_deposit_error,
        &ContractErrors::ClaimExceedsDeposit.into()
    );
    assert_eq!(test_data.contract_client.claimed(&alice), 1);
}

#[test]
pub fn test_repay() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_contract(&e, &test_data);

    let alice: Address = deposit(&e, &test_data, 2 * ONE);
    set_timestamp(&e, LOCK_END);
    test_data.contract_client.claim(&alice, &(2 * ONE), &alice);
    test_data.staking_client.withdraw(&alice, &(2 * ONE));
    assert_eq!(test_data.token_client.balance(&alice), (2 * ONE) as i128);

    test_data.contract_client.repay(&alice, &ONE);
    assert_eq!(test_data.contract_client.get_totals().debt, ONE);
    assert_eq!(test_data.contract_client.get_totals().deposited, 2 * ONE);
    assert_eq!(test_data.token_client.balance(&alice), ONE as i128);

    // Someone else holding tokens can repay too, but never more than the outstanding debt
    let bob: Address = Address::generate(&e);
    test_data.token_client.transfer(&alice, &bob, &(ONE as i128));
    let repay_exceeds_debt_error = test_data
        .contract_client
        .try_repay(&bob, &(ONE + 1))
        .unwrap_err()
        .unwrap();
    assert_eq!(
        &repay_exceeds_debt_error,
        &ContractErrors::RepayExceedsDebt.into()
    );

    test_data.contract_client.repay(&bob, &ONE);
    assert_eq!(test_data.contract_client.get_totals().debt, 0);
    assert_eq!(test_data.token_client.balance(&bob), 0);
}

#[test]
pub fn test_repay_without_balance() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_contract(&e, &test_data);

    deposit(&e, &test_data, ONE);
    let bob: Address = Address::generate(&e);

    // The burn fails in the token contract and the debt stays untouched
    assert!(test_data.contract_client.try_repay(&bob, &ONE).is_err());
    assert_eq!(test_data.contract_client.get_totals().debt, ONE);
}

#[test]
pub fn test_split() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_contract(&e, &test_data);

    let nothing_to_split_error = test_data
        .contract_client
        .try_split()
        .unwrap_err()
        .unwrap();
    assert_eq!(
        &nothing_to_split_error,
        &ContractErrors::NothingToSplit.into()
    );

    deposit(&e, &test_data, ONE);
    test_data.contract_client.split();

    assert_eq!(
        test_data.native_client.balance(&test_data.treasury),
        900_000_000_000_000_000
    );
    assert_eq!(
        test_data.native_client.balance(&test_data.pol),
        100_000_000_000_000_000
    );
    assert_eq!(
        test_data
            .native_client
            .balance(&test_data.contract_client.address),
        0
    );

    // Splitting doesn't touch the debt
    assert_eq!(test_data.contract_client.get_totals().debt, ONE);
}

#[test]
pub fn test_split_rounding() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_contract(&e, &test_data);

    deposit(&e, &test_data, 7);
    test_data.contract_client.split();

    assert_eq!(test_data.native_client.balance(&test_data.treasury), 6);
    assert_eq!(test_data.native_client.balance(&test_data.pol), 1);
}
