#![cfg(test)]

mod test_core;
mod test_deposits;
