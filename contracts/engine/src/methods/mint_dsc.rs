use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::ledger::add_debt;
use crate::storage::read_dsc_minted;
use crate::types::calc_account_data_cache::CalcAccountDataCache;
use crate::types::price_provider::PriceProvider;

use super::account_information::calc_health_factor;
use super::utils::reentrancy::non_reentrant;
use super::utils::token::mint_stable;
use super::utils::validation::{require_healthy, require_more_than_zero};

pub fn mint_dsc(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    non_reentrant(env, || do_mint_dsc(env, who, amount))
}

pub(crate) fn do_mint_dsc(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    require_more_than_zero(amount)?;

    let debt_after = read_dsc_minted(env, who)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    let health_factor = calc_health_factor(
        env,
        who,
        &CalcAccountDataCache::with_debt(debt_after),
        &mut PriceProvider::new(env),
    )?;
    require_healthy(env, who, health_factor)?;

    add_debt(env, who, amount)?;
    event::dsc_minted(env, who, amount);

    mint_stable(env, who, amount)
}
