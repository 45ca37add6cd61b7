use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Totals {
    /// Minted tokens that haven't been repaid yet
    pub debt: u128,

    /// Sum of every deposit ever made, it never goes down
    pub deposited: u128,

    /// Sum of the votes every protocol has received
    pub voted: u128,
}

#[contracttype]
pub enum DepositsDataKeys {
    Totals,
    Deposit(Address),

    /// Staking shares already claimed by the depositor
    Claimed(Address),
}

pub struct Deposits {
    pub env: Env,
}

impl Deposits {
    #[inline(always)]
    fn new(e: &Env) -> Deposits {
        Deposits { env: e.clone() }
    }

    pub fn totals(&self) -> Totals {
        self.env
            .storage()
            .instance()
            .get(&DepositsDataKeys::Totals)
            .unwrap_or_default()
    }

    pub fn set_totals(&self, totals: &Totals) {
        self.env
            .storage()
            .instance()
            .set(&DepositsDataKeys::Totals, totals);
    }

    pub fn deposit(&self, account: &Address) -> u128 {
        self.env
            .storage()
            .persistent()
            .get(&DepositsDataKeys::Deposit(account.clone()))
            .unwrap_or(0)
    }

    pub fn set_deposit(&self, account: &Address, amount: &u128) {
        self.env
            .storage()
            .persistent()
            .set(&DepositsDataKeys::Deposit(account.clone()), amount);
    }

    pub fn claimed(&self, account: &Address) -> u128 {
        self.env
            .storage()
            .persistent()
            .get(&DepositsDataKeys::Claimed(account.clone()))
            .unwrap_or(0)
    }

    pub fn set_claimed(&self, account: &Address, amount: &u128) {
        self.env
            .storage()
            .persistent()
            .set(&DepositsDataKeys::Claimed(account.clone()), amount);
    }

    pub fn bump(&self, account: &Address) {
        for key in [
            DepositsDataKeys::Deposit(account.clone()),
            DepositsDataKeys::Claimed(account.clone()),
        ] {
            if self.env.storage().persistent().has(&key) {
                self.env
                    .storage()
                    .persistent()
                    .extend_ttl(&key, 17280, 17280 * 30);
            }
        }
    }
}

pub trait DepositsStorageFunc {
    fn _deposits(&self) -> Deposits;
}

impl DepositsStorageFunc for Env {
    fn _deposits(&self) -> Deposits {
        Deposits::new(self)
    }
}
