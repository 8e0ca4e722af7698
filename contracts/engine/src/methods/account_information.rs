use common::{mul_div_floor, percent_mul, LIQUIDATION_THRESHOLD, MAX_HEALTH_FACTOR, PRECISION};
use engine_interface::types::account_information::AccountInformation;
use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::{read_collateral, read_collateral_tokens, read_dsc_minted};
use crate::types::account_data::AccountData;
use crate::types::calc_account_data_cache::CalcAccountDataCache;
use crate::types::price_provider::PriceProvider;

pub fn account_information(env: &Env, who: &Address) -> Result<AccountInformation, Error> {
    let account_data = calc_account_data(
        env,
        who,
        &CalcAccountDataCache::none(),
        &mut PriceProvider::new(env),
    )?;

    Ok(account_data.get_information())
}

pub fn account_collateral_value(env: &Env, who: &Address) -> Result<i128, Error> {
    calc_collateral_value(env, who, &mut PriceProvider::new(env))
}

pub fn health_factor(env: &Env, who: &Address) -> Result<i128, Error> {
    calc_health_factor(
        env,
        who,
        &CalcAccountDataCache::none(),
        &mut PriceProvider::new(env),
    )
}

/// Health factor of a position with `total_dsc_minted` debt backed by
/// `collateral_value_in_usd`. Positions without debt get `MAX_HEALTH_FACTOR`,
/// as do factors too large to be represented.
pub fn calculate_health_factor(
    env: &Env,
    total_dsc_minted: i128,
    collateral_value_in_usd: i128,
) -> Result<i128, Error> {
    if total_dsc_minted <= 0 {
        return Ok(MAX_HEALTH_FACTOR);
    }

    let collateral_adjusted_for_threshold =
        percent_mul(env, collateral_value_in_usd, LIQUIDATION_THRESHOLD)
            .ok_or(Error::MathOverflowError)?;

    Ok(
        mul_div_floor(env, collateral_adjusted_for_threshold, PRECISION, total_dsc_minted)
            .unwrap_or(MAX_HEALTH_FACTOR),
    )
}

pub fn calc_account_data(
    env: &Env,
    who: &Address,
    cache: &CalcAccountDataCache,
    price_provider: &mut PriceProvider,
) -> Result<AccountData, Error> {
    let debt = cache
        .mb_who_debt
        .unwrap_or_else(|| read_dsc_minted(env, who));

    Ok(AccountData {
        collateral_value_in_usd: calc_collateral_value(env, who, price_provider)?,
        debt,
    })
}

/// Same as `calc_account_data(..).health_factor(..)` but skips price reads
/// for positions without debt
pub fn calc_health_factor(
    env: &Env,
    who: &Address,
    cache: &CalcAccountDataCache,
    price_provider: &mut PriceProvider,
) -> Result<i128, Error> {
    let debt = cache
        .mb_who_debt
        .unwrap_or_else(|| read_dsc_minted(env, who));

    if debt == 0 {
        return Ok(MAX_HEALTH_FACTOR);
    }

    calc_account_data(env, who, &CalcAccountDataCache::with_debt(debt), price_provider)?
        .health_factor(env)
}

fn calc_collateral_value(
    env: &Env,
    who: &Address,
    price_provider: &mut PriceProvider,
) -> Result<i128, Error> {
    let mut total_collateral_value_in_usd = 0i128;

    for asset in read_collateral_tokens(env) {
        let amount = read_collateral(env, who, &asset);

        if amount == 0 {
            continue;
        }

        total_collateral_value_in_usd = total_collateral_value_in_usd
            .checked_add(price_provider.usd_value(&asset, amount)?)
            .ok_or(Error::MathOverflowError)?;
    }

    Ok(total_collateral_value_in_usd)
}
