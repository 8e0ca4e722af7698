use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Reentrancy = 2,

    NeedsMoreThanZero = 100,
    TokenNotAllowed = 101,
    TokenAddressesAndPriceFeedAddressesMustBeSameLength = 102,
    DuplicateCollateralToken = 103,

    InsufficientCollateral = 200,
    InsufficientDebt = 201,

    TransferFailed = 300,
    MintFailed = 301,
    BurnFailed = 302,

    HealthFactorBroken = 400,
    HealthFactorIsNotBroken = 401,
    HealthFactorNotImproved = 402,

    PriceUnavailable = 500,
    MathOverflowError = 501,
}
