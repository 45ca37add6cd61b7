use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
pub enum IncentivesDataKeys {
    /// (protocol, incentive asset)
    Total((Address, Address)),

    /// (protocol, incentive asset, depositor)
    Deposit((Address, Address, Address)),

    /// (protocol, incentive asset, account)
    Claimed((Address, Address, Address)),
}

pub struct Incentives {
    pub env: Env,
}

impl Incentives {
    #[inline(always)]
    fn new(e: &Env) -> Incentives {
        Incentives { env: e.clone() }
    }

    fn get(&self, key: &IncentivesDataKeys) -> u128 {
        self.env.storage().persistent().get(key).unwrap_or(0)
    }

    fn set(&self, key: &IncentivesDataKeys, amount: &u128) {
        self.env.storage().persistent().set(key, amount);
        self.env
            .storage()
            .persistent()
            .extend_ttl(key, 17280, 17280 * 30);
    }

    pub fn total(&self, protocol: &Address, asset: &Address) -> u128 {
        self.get(&IncentivesDataKeys::Total((protocol.clone(), asset.clone())))
    }

    pub fn set_total(&self, protocol: &Address, asset: &Address, amount: &u128) {
        self.set(
            &IncentivesDataKeys::Total((protocol.clone(), asset.clone())),
            amount,
        );
    }

    pub fn deposit(&self, protocol: &Address, asset: &Address, depositor: &Address) -> u128 {
        self.get(&IncentivesDataKeys::Deposit((
            protocol.clone(),
            asset.clone(),
            depositor.clone(),
        )))
    }

    pub fn set_deposit(
        &self,
        protocol: &Address,
        asset: &Address,
        depositor: &Address,
        amount: &u128,
    ) {
        self.set(
            &IncentivesDataKeys::Deposit((protocol.clone(), asset.clone(), depositor.clone())),
            amount,
        );
    }

    pub fn claimed(&self, protocol: &Address, asset: &Address, account: &Address) -> bool {
        self.env
            .storage()
            .persistent()
            .get(&IncentivesDataKeys::Claimed((
                protocol.clone(),
                asset.clone(),
                account.clone(),
            )))
            .unwrap_or(false)
    }

    pub fn set_claimed(&self, protocol: &Address, asset: &Address, account: &Address) {
        let key = IncentivesDataKeys::Claimed((protocol.clone(), asset.clone(), account.clone()));
        self.env.storage().persistent().set(&key, &true);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, 17280, 17280 * 30);
    }
}

pub trait IncentivesDataFunc {
    fn _incentives(&self) -> Incentives;
}

impl IncentivesDataFunc for Env {
    #[inline(always)]
    fn _incentives(&self) -> Incentives {
        Incentives::new(self)
    }
}
