use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
pub enum VotesDataKeys {
    /// Votes a protocol has received
    Votes(Address),

    /// Votes an account has allocated across all protocols
    Used(Address),

    /// (account, protocol)
    UsedProtocol((Address, Address)),
}

pub struct Votes {
    pub env: Env,
}

impl Votes {
    #[inline(always)]
    fn new(e: &Env) -> Votes {
        Votes { env: e.clone() }
    }

    fn get(&self, key: &VotesDataKeys) -> u128 {
        self.env.storage().persistent().get(key).unwrap_or(0)
    }

    fn set(&self, key: &VotesDataKeys, amount: &u128) {
        if *amount == 0 {
            self.env.storage().persistent().remove(key);
            return;
        }

        self.env.storage().persistent().set(key, amount);
        self.env
            .storage()
            .persistent()
            .extend_ttl(key, 17280, 17280 * 30);
    }

    pub fn votes(&self, protocol: &Address) -> u128 {
        self.get(&VotesDataKeys::Votes(protocol.clone()))
    }

    pub fn set_votes(&self, protocol: &Address, amount: &u128) {
        self.set(&VotesDataKeys::Votes(protocol.clone()), amount);
    }

    pub fn used(&self, account: &Address) -> u128 {
        self.get(&VotesDataKeys::Used(account.clone()))
    }

    pub fn set_used(&self, account: &Address, amount: &u128) {
        self.set(&VotesDataKeys::Used(account.clone()), amount);
    }

    pub fn used_protocol(&self, account: &Address, protocol: &Address) -> u128 {
        self.get(&VotesDataKeys::UsedProtocol((
            account.clone(),
            protocol.clone(),
        )))
    }

    pub fn set_used_protocol(&self, account: &Address, protocol: &Address, amount: &u128) {
        self.set(
            &VotesDataKeys::UsedProtocol((account.clone(), protocol.clone())),
            amount,
        );
    }
}

pub trait VotesDataFunc {
    fn _votes(&self) -> Votes;
}

impl VotesDataFunc for Env {
    #[inline(always)]
    fn _votes(&self) -> Votes {
        Votes::new(self)
    }
}
