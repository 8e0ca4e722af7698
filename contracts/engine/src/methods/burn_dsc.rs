use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::ledger::sub_debt;

use super::utils::reentrancy::non_reentrant;
use super::utils::token::pull_and_burn_stable;
use super::utils::validation::require_more_than_zero;

pub fn burn_dsc(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    non_reentrant(env, || do_burn_dsc(env, amount, who, who))
}

/// Repays `amount` of `on_behalf_of` debt with stable units held by `dsc_from`
pub(crate) fn do_burn_dsc(
    env: &Env,
    amount: i128,
    on_behalf_of: &Address,
    dsc_from: &Address,
) -> Result<(), Error> {
    require_more_than_zero(amount)?;

    sub_debt(env, on_behalf_of, amount)?;
    event::dsc_burned(env, on_behalf_of, dsc_from, amount);

    pull_and_burn_stable(env, dsc_from, amount)
}
