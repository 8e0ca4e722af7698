use soroban_sdk::contracttype;

/// Debt and collateral value of an account, both with 18 decimals
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[contracttype]
pub struct AccountInformation {
    pub total_dsc_minted: i128,
    pub collateral_value_in_usd: i128,
}
