use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::ledger::add_collateral;

use super::utils::reentrancy::non_reentrant;
use super::utils::token::transfer_collateral;
use super::utils::validation::{require_allowed_token, require_more_than_zero};

pub fn deposit_collateral(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    non_reentrant(env, || do_deposit_collateral(env, who, asset, amount))
}

pub(crate) fn do_deposit_collateral(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
) -> Result<(), Error> {
    require_more_than_zero(amount)?;
    require_allowed_token(env, asset)?;

    add_collateral(env, who, asset, amount)?;
    event::collateral_deposited(env, who, asset, amount);

    transfer_collateral(env, asset, who, &env.current_contract_address(), amount)
}
