#![cfg(test)]

use crate::errors::ContractErrors;
use crate::storage::core::CoreState;
use crate::storage::periods::{Period, Periods};
use crate::tests::test_utils::{
    create_test_data, init_contract, TestData, DEPOSIT_START, INCENTIVE_START, LOCK_END,
    VOTE_END, VOTE_START, WHITELIST_START,
};
use soroban_sdk::testutils::{Address as _, MockAuth, MockAuthInvoke};
use soroban_sdk::{Address, Env, IntoVal};

#[test]
pub fn test_init_contract() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&e, &test_data);

    let core_state: CoreState = test_data.contract_client.get_core_state();
    assert_eq!(&core_state.admin, &test_data.admin);
    assert_eq!(&core_state.token, &test_data.token_client.address);
    assert_eq!(&core_state.native, &test_data.native_client.address);
    assert_eq!(&core_state.staking, &test_data.staking_client.address);
    assert_eq!(&core_state.treasury, &test_data.treasury);
    assert_eq!(&core_state.pol, &test_data.pol);

    let periods: Periods = test_data.contract_client.get_periods();
    assert_eq!(
        periods,
        Periods {
            whitelist: Period {
                start: WHITELIST_START,
                end: INCENTIVE_START,
            },
            incentive: Period {
                start: INCENTIVE_START,
                end: DEPOSIT_START,
            },
            deposit: Period {
                start: DEPOSIT_START,
                end: VOTE_START,
            },
            vote: Period {
                start: VOTE_START,
                end: VOTE_END,
            },
            lock_end: LOCK_END,
        }
    );

    let already_started_error = test_data
        .contract_client
        .try_init(
            &test_data.admin,
            &test_data.token_client.address,
            &test_data.native_client.address,
            &test_data.staking_client.address,
            &test_data.treasury,
            &test_data.pol,
        )
        .unwrap_err()
        .unwrap();

    assert_eq!(
        &already_started_error,
        &ContractErrors::AlreadyStarted.into()
    );
}

#[test]
pub fn test_not_started() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);

    let not_started_error = test_data
        .contract_client
        .try_set_lock_end(&LOCK_END)
        .unwrap_err()
        .unwrap();

    assert_eq!(&not_started_error, &ContractErrors::NotStarted.into());
}

#[test]
pub fn test_core_updates_validations() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&e, &test_data);

    let new_admin: Address = Address::generate(&e);
    let new_treasury: Address = Address::generate(&e);
    let new_pol: Address = Address::generate(&e);

    assert!(test_data.contract_client.try_set_admin(&new_admin).is_err());
    assert!(test_data.contract_client.try_set_lock_end(&0).is_err());

    test_data
        .contract_client
        .mock_auths(&[MockAuth {
            address: &test_data.admin,
            invoke: &MockAuthInvoke {
                contract: &test_data.contract_client.address,
                fn_name: "set_treasury",
                args: (new_treasury.clone(),).into_val(&e),
                sub_invokes: &[],
            },
        }])
        .set_treasury(&new_treasury);

    test_data
        .contract_client
        .mock_auths(&[MockAuth {
            address: &test_data.admin,
            invoke: &MockAuthInvoke {
                contract: &test_data.contract_client.address,
                fn_name: "set_pol",
                args: (new_pol.clone(),).into_val(&e),
                sub_invokes: &[],
            },
        }])
        .set_pol(&new_pol);

    test_data
        .contract_client
        .mock_auths(&[MockAuth {
            address: &test_data.admin,
            invoke: &MockAuthInvoke {
                contract: &test_data.contract_client.address,
                fn_name: "set_admin",
                args: (new_admin.clone(),).into_val(&e),
                sub_invokes: &[],
            },
        }])
        .set_admin(&new_admin);

    let core_state: CoreState = test_data.contract_client.get_core_state();
    assert_eq!(&core_state.admin, &new_admin);
    assert_eq!(&core_state.treasury, &new_treasury);
    assert_eq!(&core_state.pol, &new_pol);

    // The old admin can't update the schedule anymore
    let old_admin_error = test_data
        .contract_client
        .mock_auths(&[MockAuth {
            address: &test_data.admin,
            invoke: &MockAuthInvoke {
                contract: &test_data.contract_client.address,
                fn_name: "set_lock_end",
                args: (0u64,).into_val(&e),
                sub_invokes: &[],
            },
        }])
        .try_set_lock_end(&0);
    assert!(old_admin_error.is_err());
}

#[test]
pub fn test_invalid_period() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_contract(&e, &test_data);

    let invalid_period_error = test_data
        .contract_client
        .try_set_vote_period(&VOTE_END, &VOTE_START)
        .unwrap_err()
        .unwrap();

    assert_eq!(&invalid_period_error, &ContractErrors::InvalidPeriod.into());

    // An empty window is accepted, it just never opens
    test_data
        .contract_client
        .set_vote_period(&VOTE_START, &VOTE_START);
    assert_eq!(
        test_data.contract_client.get_periods().vote,
        Period {
            start: VOTE_START,
            end: VOTE_START,
        }
    );
}
