use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use super::deposit_collateral::do_deposit_collateral;
use super::mint_dsc::do_mint_dsc;
use super::utils::reentrancy::non_reentrant;

pub fn deposit_collateral_and_mint_dsc(
    env: &Env,
    who: &Address,
    asset: &Address,
    collateral_amount: i128,
    dsc_amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    non_reentrant(env, || {
        do_deposit_collateral(env, who, asset, collateral_amount)?;
        do_mint_dsc(env, who, dsc_amount)
    })
}
