use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Application {
    pub applied: bool,
    pub whitelisted: bool,
}

#[contracttype]
pub enum ProtocolsDataKeys {
    Application(Address),
    Winner(Address),

    /// Vec<Address> with the winners in the order they were declared
    Winners,
}

pub struct Protocols {
    pub env: Env,
}

impl Protocols {
    #[inline(always)]
    pub fn new(e: &Env) -> Protocols {
        Protocols { env: e.clone() }
    }

    pub fn application(&self, protocol: &Address) -> Application {
        self.env
            .storage()
            .persistent()
            .get(&ProtocolsDataKeys::Application(protocol.clone()))
            .unwrap_or_default()
    }

    pub fn set_application(&self, protocol: &Address, application: &Application) {
        self.env.storage().persistent().set(
            &ProtocolsDataKeys::Application(protocol.clone()),
            application,
        );
    }

    pub fn bump_application(&self, protocol: &Address) {
        self.env.storage().persistent().extend_ttl(
            &ProtocolsDataKeys::Application(protocol.clone()),
            17280,
            17280 * 30,
        );
    }

    pub fn is_whitelisted(&self, protocol: &Address) -> bool {
        self.application(protocol).whitelisted
    }

    pub fn winners(&self) -> Vec<Address> {
        self.env
            .storage()
            .instance()
            .get(&ProtocolsDataKeys::Winners)
            .unwrap_or(Vec::new(&self.env))
    }

    pub fn is_winner(&self, protocol: &Address) -> bool {
        self.env
            .storage()
            .persistent()
            .get(&ProtocolsDataKeys::Winner(protocol.clone()))
            .unwrap_or(false)
    }

    /// Appends the protocol to the winners list, callers must make sure it wasn't declared before
    pub fn add_winner(&self, protocol: &Address) {
        let mut winners: Vec<Address> = self.winners();
        winners.push_back(protocol.clone());
        self.env
            .storage()
            .instance()
            .set(&ProtocolsDataKeys::Winners, &winners);

        let key = ProtocolsDataKeys::Winner(protocol.clone());
        self.env.storage().persistent().set(&key, &true);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, 17280, 17280 * 30);
    }
}

pub trait ProtocolsDataFunc {
    fn _protocols(&self) -> Protocols;
}

impl ProtocolsDataFunc for Env {
    #[inline(always)]
    fn _protocols(&self) -> Protocols {
        Protocols::new(self)
    }
}
