use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractErrors {
    AlreadyStarted = 0,
    NotStarted = 1,
    InvalidPeriod = 2,
    OutsidePeriod = 3,
    InvalidAmount = 4,

    // Applications
    IncorrectFee = 10,
    AlreadyApplied = 11,
    NotApplied = 12,
    NotWhitelisted = 13,
    StillWhitelisted = 14,

    // Votes
    InvalidVoteInput = 20,
    TooManyVotes = 21,
    NothingToUndo = 22,

    // Winners and incentives
    AlreadyWinner = 30,
    NotWinner = 31,
    NothingToClaim = 32,
    WinnersNotDeclared = 33,
    NothingToRefund = 34,

    // Deposits and debt
    StillLocked = 40,
    ClaimExceedsDeposit = 41,
    RepayExceedsDebt = 42,
    NothingToSplit = 43,
}
