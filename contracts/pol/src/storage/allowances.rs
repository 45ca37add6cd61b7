use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
pub enum AllowancesDataKeys {
    /// (asset, spender)
    Allowance((Address, Address)),
}

pub struct Allowances {
    pub env: Env,
}

impl Allowances {
    #[inline(always)]
    fn new(e: &Env) -> Allowances {
        Allowances { env: e.clone() }
    }

    pub fn allowance(&self, asset: &Address, spender: &Address) -> u128 {
        self.env
            .storage()
            .persistent()
            .get(&AllowancesDataKeys::Allowance((
                asset.clone(),
                spender.clone(),
            )))
            .unwrap_or(0)
    }

    pub fn set_allowance(&self, asset: &Address, spender: &Address, amount: &u128) {
        let key = AllowancesDataKeys::Allowance((asset.clone(), spender.clone()));
        if *amount == 0 {
            self.env.storage().persistent().remove(&key);
        } else {
            self.env.storage().persistent().set(&key, amount);
            self.env
                .storage()
                .persistent()
                .extend_ttl(&key, 17280, 17280 * 30);
        }
    }
}

pub trait AllowancesDataFunc {
    fn _allowances(&self) -> Allowances;
}

impl AllowancesDataFunc for Env {
    #[inline(always)]
    fn _allowances(&self) -> Allowances {
        Allowances::new(self)
    }
}
