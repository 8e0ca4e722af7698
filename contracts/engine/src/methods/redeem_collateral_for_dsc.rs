use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::types::price_provider::PriceProvider;

use super::burn_dsc::do_burn_dsc;
use super::redeem_collateral::do_redeem_collateral;
use super::utils::reentrancy::non_reentrant;

pub fn redeem_collateral_for_dsc(
    env: &Env,
    who: &Address,
    asset: &Address,
    collateral_amount: i128,
    dsc_amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    non_reentrant(env, || {
        do_burn_dsc(env, dsc_amount, who, who)?;
        do_redeem_collateral(
            env,
            who,
            who,
            asset,
            collateral_amount,
            Some(&mut PriceProvider::new(env)),
        )
    })
}
