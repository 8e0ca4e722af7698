use engine_interface::types::account_information::AccountInformation;
use engine_interface::types::error::Error;
use soroban_sdk::Env;

use crate::methods::account_information::calculate_health_factor;

#[derive(Debug, Clone, Default)]
pub struct AccountData {
    /// Sum of collateral values in USD with 18 decimals
    pub collateral_value_in_usd: i128,
    /// Minted stable units
    pub debt: i128,
}

impl AccountData {
    pub fn health_factor(&self, env: &Env) -> Result<i128, Error> {
        calculate_health_factor(env, self.debt, self.collateral_value_in_usd)
    }

    pub fn get_information(&self) -> AccountInformation {
        AccountInformation {
            total_dsc_minted: self.debt,
            collateral_value_in_usd: self.collateral_value_in_usd,
        }
    }
}
