use crate::errors::ContractErrors;
use crate::storage::core::{CoreFunc, CoreState};
use crate::storage::deposits::{DepositsStorageFunc, Totals};
use crate::storage::incentives::IncentivesDataFunc;
use crate::storage::periods::{Period, Periods, PeriodsFunc, Phase};
use crate::storage::protocols::{Application, ProtocolsDataFunc};
use crate::storage::votes::VotesDataFunc;
use crate::utils::core::{
    assert_in_period, assert_positive, assert_voting_concluded, core_state, validate_admin,
    APPLICATION_FEE,
};
use crate::utils::events;
use crate::utils::incentives::claimable_incentive;
use crate::utils::payments::{
    asset_balance, burn_token, mint_and_stake, receive_asset, send_asset, send_staked,
    split_amount,
};
use crate::utils::votes::{commit_votes, revoke_votes, tally_votes};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, BytesN, Env, Vec};

pub trait BootstrapContractTrait {
    fn init(
        e: Env,
        admin: Address,
        token: Address,
        native: Address,
        staking: Address,
        treasury: Address,
        pol: Address,
    );
    fn get_core_state(e: Env) -> CoreState;
    fn upgrade(e: Env, hash: BytesN<32>);
    fn set_admin(e: Env, address: Address);
    fn set_treasury(e: Env, address: Address);
    fn set_pol(e: Env, address: Address);

    // Periods
    fn set_whitelist_period(e: Env, start: u64, end: u64);
    fn set_incentive_period(e: Env, start: u64, end: u64);
    fn set_deposit_period(e: Env, start: u64, end: u64);
    fn set_vote_period(e: Env, start: u64, end: u64);
    fn set_lock_end(e: Env, lock_end: u64);
    fn get_periods(e: Env) -> Periods;

    // Applications
    fn apply(e: Env, caller: Address, protocol: Address, fee: u128);
    fn has_applied(e: Env, protocol: Address) -> bool;
    fn is_whitelisted(e: Env, protocol: Address) -> bool;
    fn whitelist(e: Env, protocol: Address);
    fn undo_whitelist(e: Env, protocol: Address);

    // Incentives
    fn incentivize(e: Env, caller: Address, protocol: Address, incentive: Address, amount: u128);
    fn incentives(e: Env, protocol: Address, incentive: Address) -> u128;
    fn incentive_deposits(e: Env, protocol: Address, incentive: Address, account: Address) -> u128;
    fn refund_incentive(e: Env, protocol: Address, incentive: Address, depositor: Address);

    // Deposits and debt
    fn deposit(e: Env, caller: Address, beneficiary: Address, amount: u128);
    fn deposits(e: Env, account: Address) -> u128;
    fn claim(e: Env, caller: Address, amount: u128, receiver: Address);
    fn claimed(e: Env, account: Address) -> u128;
    fn repay(e: Env, caller: Address, amount: u128);
    fn split(e: Env);
    fn get_totals(e: Env) -> Totals;

    // Votes
    fn vote(e: Env, caller: Address, protocols: Vec<Address>, amounts: Vec<u128>);
    fn undo_vote(e: Env, protocol: Address, account: Address);
    fn votes(e: Env, protocol: Address) -> u128;
    fn votes_used(e: Env, account: Address) -> u128;
    fn votes_used_protocol(e: Env, account: Address, protocol: Address) -> u128;
    fn votes_available(e: Env, account: Address) -> u128;

    // Winners
    fn declare_winners(e: Env, protocols: Vec<Address>);
    fn winners(e: Env) -> Vec<Address>;
    fn is_winner(e: Env, protocol: Address) -> bool;
    fn claimable_incentive(e: Env, protocol: Address, incentive: Address, account: Address) -> u128;
    fn claim_incentive(e: Env, protocol: Address, incentive: Address, account: Address);
    fn incentive_claimed(e: Env, protocol: Address, incentive: Address, account: Address) -> bool;
}

#[contract]
pub struct BootstrapContract;

fn set_period(e: &Env, phase: Phase, start: u64, end: u64) {
    validate_admin(e);

    if end < start {
        panic_with_error!(&e, &ContractErrors::InvalidPeriod);
    }

    let mut periods: Periods = e.periods();
    periods.set_period(phase, Period { start, end });
    e.set_periods(&periods);
    e.bump_instance();
}

#[contractimpl]
impl BootstrapContractTrait for BootstrapContract {
    fn init(
        e: Env,
        admin: Address,
        token: Address,
        native: Address,
        staking: Address,
        treasury: Address,
        pol: Address,
    ) {
        if e.core_state().is_some() {
            panic_with_error!(&e, &ContractErrors::AlreadyStarted);
        }

        e.set_core_state(&CoreState {
            admin,
            token,
            native,
            staking,
            treasury,
            pol,
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

    fn set_treasury(e: Env, address: Address) {
        let mut core_state: CoreState = validate_admin(&e);
        core_state.treasury = address;
        e.set_core_state(&core_state);
        e.bump_instance();
    }

    fn set_pol(e: Env, address: Address) {
        let mut core_state: CoreState = validate_admin(&e);
        core_state.pol = address;
        e.set_core_state(&core_state);
        e.bump_instance();
    }

    fn set_whitelist_period(e: Env, start: u64, end: u64) {
        set_period(&e, Phase::Whitelist, start, end);
    }

    fn set_incentive_period(e: Env, start: u64, end: u64) {
        set_period(&e, Phase::Incentive, start, end);
    }

    fn set_deposit_period(e: Env, start: u64, end: u64) {
        set_period(&e, Phase::Deposit, start, end);
    }

    fn set_vote_period(e: Env, start: u64, end: u64) {
        set_period(&e, Phase::Vote, start, end);
    }

    fn set_lock_end(e: Env, lock_end: u64) {
        validate_admin(&e);
        let mut periods: Periods = e.periods();
        periods.lock_end = lock_end;
        e.set_periods(&periods);
        e.bump_instance();
    }

    fn get_periods(e: Env) -> Periods {
        e.bump_instance();
        e.periods()
    }

    fn apply(e: Env, caller: Address, protocol: Address, fee: u128) {
        caller.require_auth();
        let core_state: CoreState = core_state(&e);
        assert_in_period(&e, Phase::Whitelist);

        if fee != APPLICATION_FEE {
            panic_with_error!(&e, &ContractErrors::IncorrectFee);
        }

        let mut application: Application = e._protocols().application(&protocol);
        if application.applied {
            panic_with_error!(&e, &ContractErrors::AlreadyApplied);
        }

        application.applied = true;
        e._protocols().set_application(&protocol, &application);
        e._protocols().bump_application(&protocol);
        e.bump_instance();

        receive_asset(&e, &core_state.native, &caller, fee);
        events::applied(&e, &protocol, &caller);
    }

    fn has_applied(e: Env, protocol: Address) -> bool {
        e.bump_instance();
        e._protocols().application(&protocol).applied
    }

    fn is_whitelisted(e: Env, protocol: Address) -> bool {
        e.bump_instance();
        e._protocols().is_whitelisted(&protocol)
    }

    fn whitelist(e: Env, protocol: Address) {
        validate_admin(&e);

        let mut application: Application = e._protocols().application(&protocol);
        if !application.applied {
            panic_with_error!(&e, &ContractErrors::NotApplied);
        }

        application.whitelisted = true;
        e._protocols().set_application(&protocol, &application);
        e._protocols().bump_application(&protocol);
        e.bump_instance();

        events::whitelisted(&e, &protocol, true);
    }

    fn undo_whitelist(e: Env, protocol: Address) {
        validate_admin(&e);

        if !e._protocols().application(&protocol).applied {
            panic_with_error!(&e, &ContractErrors::NotApplied);
        }

        if e._protocols().is_winner(&protocol) {
            panic_with_error!(&e, &ContractErrors::AlreadyWinner);
        }

        // Clearing the application too lets the protocol apply again later
        e._protocols()
            .set_application(&protocol, &Application::default());
        e._protocols().bump_application(&protocol);
        e.bump_instance();

        events::whitelisted(&e, &protocol, false);
    }

    fn incentivize(e: Env, caller: Address, protocol: Address, incentive: Address, amount: u128) {
        caller.require_auth();
        assert_in_period(&e, Phase::Incentive);
        assert_positive(&e, amount);

        if !e._protocols().is_whitelisted(&protocol) {
            panic_with_error!(&e, &ContractErrors::NotWhitelisted);
        }

        let total: u128 = e._incentives().total(&protocol, &incentive);
        e._incentives()
            .set_total(&protocol, &incentive, &(total + amount));
        let deposit: u128 = e._incentives().deposit(&protocol, &incentive, &caller);
        e._incentives()
            .set_deposit(&protocol, &incentive, &caller, &(deposit + amount));
        e.bump_instance();

        receive_asset(&e, &incentive, &caller, amount);
        events::incentivized(&e, &protocol, &incentive, &caller, amount);
    }

    fn incentives(e: Env, protocol: Address, incentive: Address) -> u128 {
        e.bump_instance();
        e._incentives().total(&protocol, &incentive)
    }

    fn incentive_deposits(e: Env, protocol: Address, incentive: Address, account: Address) -> u128 {
        e.bump_instance();
        e._incentives().deposit(&protocol, &incentive, &account)
    }

    fn refund_incentive(e: Env, protocol: Address, incentive: Address, depositor: Address) {
        assert_voting_concluded(&e);

        if e._protocols().winners().is_empty() {
            panic_with_error!(&e, &ContractErrors::WinnersNotDeclared);
        }

        if e._protocols().is_winner(&protocol) {
            panic_with_error!(&e, &ContractErrors::AlreadyWinner);
        }

        let amount: u128 = e._incentives().deposit(&protocol, &incentive, &depositor);
        if amount == 0 {
            panic_with_error!(&e, &ContractErrors::NothingToRefund);
        }

        e._incentives()
            .set_deposit(&protocol, &incentive, &depositor, &0);
        let total: u128 = e._incentives().total(&protocol, &incentive);
        e._incentives()
            .set_total(&protocol, &incentive, &(total - amount));
        e.bump_instance();

        send_asset(&e, &incentive, &depositor, amount);
        events::incentive_refunded(&e, &protocol, &incentive, &depositor, amount);
    }

    fn deposit(e: Env, caller: Address, beneficiary: Address, amount: u128) {
        caller.require_auth();
        let core_state: CoreState = core_state(&e);
        assert_in_period(&e, Phase::Deposit);
        assert_positive(&e, amount);

        let mut totals: Totals = e._deposits().totals();
        totals.debt += amount;
        totals.deposited += amount;
        e._deposits().set_totals(&totals);

        let deposit: u128 = e._deposits().deposit(&beneficiary);
        e._deposits().set_deposit(&beneficiary, &(deposit + amount));
        e._deposits().bump(&beneficiary);
        e.bump_instance();

        receive_asset(&e, &core_state.native, &caller, amount);
        mint_and_stake(&e, &core_state, amount);
        events::deposited(&e, &caller, &beneficiary, amount);
    }

    fn deposits(e: Env, account: Address) -> u128 {
        e.bump_instance();
        e._deposits().deposit(&account)
    }

    fn claim(e: Env, caller: Address, amount: u128, receiver: Address) {
        caller.require_auth();
        let core_state: CoreState = core_state(&e);
        assert_positive(&e, amount);

        if !e.periods().is_unlocked(e.ledger().timestamp()) {
            panic_with_error!(&e, &ContractErrors::StillLocked);
        }

        let claimed: u128 = e
            ._deposits()
            .claimed(&caller)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::ClaimExceedsDeposit));
        if claimed > e._deposits().deposit(&caller) {
            panic_with_error!(&e, &ContractErrors::ClaimExceedsDeposit);
        }

        e._deposits().set_claimed(&caller, &claimed);
        e._deposits().bump(&caller);
        e.bump_instance();

        send_staked(&e, &core_state, &receiver, amount);
        events::claimed(&e, &caller, &receiver, amount);
    }

    fn claimed(e: Env, account: Address) -> u128 {
        e.bump_instance();
        e._deposits().claimed(&account)
    }

    fn repay(e: Env, caller: Address, amount: u128) {
        caller.require_auth();
        let core_state: CoreState = core_state(&e);
        assert_positive(&e, amount);

        let mut totals: Totals = e._deposits().totals();
        if amount > totals.debt {
            panic_with_error!(&e, &ContractErrors::RepayExceedsDebt);
        }

        totals.debt -= amount;
        e._deposits().set_totals(&totals);
        e.bump_instance();

        burn_token(&e, &core_state, &caller, amount);
        events::repaid(&e, &caller, amount);
    }

    fn split(e: Env) {
        let core_state: CoreState = core_state(&e);

        let amount: u128 = asset_balance(&e, &core_state.native);
        if amount == 0 {
            panic_with_error!(&e, &ContractErrors::NothingToSplit);
        }

        let (treasury_share, pol_share) = split_amount(amount);
        log!(&e, "splitting native balance", amount, treasury_share, pol_share);
        e.bump_instance();

        if treasury_share > 0 {
            send_asset(&e, &core_state.native, &core_state.treasury, treasury_share);
        }
        if pol_share > 0 {
            send_asset(&e, &core_state.native, &core_state.pol, pol_share);
        }
        events::split(&e, treasury_share, pol_share);
    }

    fn get_totals(e: Env) -> Totals {
        e.bump_instance();
        e._deposits().totals()
    }

    fn vote(e: Env, caller: Address, protocols: Vec<Address>, amounts: Vec<u128>) {
        caller.require_auth();
        assert_in_period(&e, Phase::Vote);

        let total: u128 = tally_votes(&e, &caller, &protocols, &amounts);
        commit_votes(&e, &caller, &protocols, &amounts, total);
        e.bump_instance();

        for (protocol, amount) in protocols.iter().zip(amounts.iter()) {
            events::voted(&e, &caller, &protocol, amount);
        }
    }

    fn undo_vote(e: Env, protocol: Address, account: Address) {
        if e._protocols().is_whitelisted(&protocol) {
            panic_with_error!(&e, &ContractErrors::StillWhitelisted);
        }

        let amount: u128 = revoke_votes(&e, &account, &protocol);
        if amount == 0 {
            panic_with_error!(&e, &ContractErrors::NothingToUndo);
        }
        e.bump_instance();

        events::vote_undone(&e, &account, &protocol, amount);
    }

    fn votes(e: Env, protocol: Address) -> u128 {
        e.bump_instance();
        e._votes().votes(&protocol)
    }

    fn votes_used(e: Env, account: Address) -> u128 {
        e.bump_instance();
        e._votes().used(&account)
    }

    fn votes_used_protocol(e: Env, account: Address, protocol: Address) -> u128 {
        e.bump_instance();
        e._votes().used_protocol(&account, &protocol)
    }

    fn votes_available(e: Env, account: Address) -> u128 {
        e.bump_instance();
        e._deposits().deposit(&account) - e._votes().used(&account)
    }

    fn declare_winners(e: Env, protocols: Vec<Address>) {
        validate_admin(&e);
        assert_voting_concluded(&e);

        for (i, protocol) in protocols.iter().enumerate() {
            if !e._protocols().is_whitelisted(&protocol) {
                panic_with_error!(&e, &ContractErrors::NotWhitelisted);
            }

            let repeated: bool = protocols
                .iter()
                .take(i)
                .any(|previous| previous == protocol);
            if repeated || e._protocols().is_winner(&protocol) {
                panic_with_error!(&e, &ContractErrors::AlreadyWinner);
            }
        }

        for protocol in protocols.iter() {
            e._protocols().add_winner(&protocol);
            events::winner(&e, &protocol);
        }
        e.bump_instance();
    }

    fn winners(e: Env) -> Vec<Address> {
        e.bump_instance();
        e._protocols().winners()
    }

    fn is_winner(e: Env, protocol: Address) -> bool {
        e.bump_instance();
        e._protocols().is_winner(&protocol)
    }

    fn claimable_incentive(e: Env, protocol: Address, incentive: Address, account: Address) -> u128 {
        e.bump_instance();
        claimable_incentive(&e, &protocol, &incentive, &account)
    }

    fn claim_incentive(e: Env, protocol: Address, incentive: Address, account: Address) {
        if !e._protocols().is_winner(&protocol) {
            panic_with_error!(&e, &ContractErrors::NotWinner);
        }

        let amount: u128 = claimable_incentive(&e, &protocol, &incentive, &account);
        if amount == 0 {
            panic_with_error!(&e, &ContractErrors::NothingToClaim);
        }

        e._incentives().set_claimed(&protocol, &incentive, &account);
        e.bump_instance();

        send_asset(&e, &incentive, &account, amount);
        events::incentive_claimed(&e, &protocol, &incentive, &account, amount);
    }

    fn incentive_claimed(e: Env, protocol: Address, incentive: Address, account: Address) -> bool {
        e.bump_instance();
        e._incentives().claimed(&protocol, &incentive, &account)
    }
}
