use soroban_sdk::{contracttype, Env};

/// Half open window `[start, end)` measured in ledger timestamps
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Period {
    pub start: u64,
    pub end: u64,
}

impl Period {
    pub fn contains(&self, timestamp: u64) -> bool {
        self.start <= timestamp && timestamp < self.end
    }

    pub fn has_ended(&self, timestamp: u64) -> bool {
        timestamp >= self.end
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Protocols apply and get whitelisted during this window
    Whitelist,
    Incentive,
    Deposit,
    Vote,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Periods {
    pub whitelist: Period,
    pub incentive: Period,
    pub deposit: Period,
    pub vote: Period,

    /// Staked deposits can't be claimed and winners can't be declared before this moment
    pub lock_end: u64,
}

impl Periods {
    pub fn period(&self, phase: Phase) -> Period {
        match phase {
            Phase::Whitelist => self.whitelist,
            Phase::Incentive => self.incentive,
            Phase::Deposit => self.deposit,
            Phase::Vote => self.vote,
        }
    }

    pub fn set_period(&mut self, phase: Phase, period: Period) {
        match phase {
            Phase::Whitelist => self.whitelist = period,
            Phase::Incentive => self.incentive = period,
            Phase::Deposit => self.deposit = period,
            Phase::Vote => self.vote = period,
        }
    }

    pub fn is_active(&self, phase: Phase, timestamp: u64) -> bool {
        self.period(phase).contains(timestamp)
    }

    pub fn is_unlocked(&self, timestamp: u64) -> bool {
        timestamp >= self.lock_end
    }
}

#[contracttype]
pub enum PeriodsDataKeys {
    Periods,
}

pub trait PeriodsFunc {
    fn periods(&self) -> Periods;
    fn set_periods(&self, periods: &Periods);
}

impl PeriodsFunc for Env {
    fn periods(&self) -> Periods {
        self.storage()
            .instance()
            .get(&PeriodsDataKeys::Periods)
            .unwrap_or_default()
    }

    fn set_periods(&self, periods: &Periods) {
        self.storage()
            .instance()
            .set(&PeriodsDataKeys::Periods, periods);
    }
}
