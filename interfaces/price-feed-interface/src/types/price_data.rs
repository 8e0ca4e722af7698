use soroban_sdk::contracttype;

/// Price record with the feed's own decimals
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub timestamp: u64,
}
