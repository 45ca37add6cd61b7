use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "BootstrapClient")]
pub trait Bootstrap {
    /// Burns `amount` of the LSD token from `caller` and lowers the debt by the same amount
    fn repay(e: Env, caller: Address, amount: u128);
}

#[contractclient(name = "PolClient")]
pub trait Pol {
    fn killed(e: Env) -> bool;
    fn send(e: Env, spender: Address, asset: Address, receiver: Address, amount: u128);
}

#[contractclient(name = "LiquidityPoolClient")]
pub trait LiquidityPool {
    fn killed(e: Env) -> bool;
}
