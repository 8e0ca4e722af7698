use common::{percent_mul, LIQUIDATION_BONUS, MIN_HEALTH_FACTOR};
use engine_interface::types::error::Error;
use soroban_sdk::{log, Address, Env};

use crate::event;
use crate::types::calc_account_data_cache::CalcAccountDataCache;
use crate::types::price_provider::PriceProvider;

use super::account_information::calc_health_factor;
use super::burn_dsc::do_burn_dsc;
use super::redeem_collateral::do_redeem_collateral;
use super::utils::reentrancy::non_reentrant;
use super::utils::validation::{require_allowed_token, require_healthy, require_more_than_zero};

pub fn liquidate(
    env: &Env,
    liquidator: &Address,
    collateral_asset: &Address,
    who: &Address,
    debt_to_cover: i128,
) -> Result<(), Error> {
    liquidator.require_auth();

    non_reentrant(env, || {
        do_liquidate(env, liquidator, collateral_asset, who, debt_to_cover)
    })
}

fn do_liquidate(
    env: &Env,
    liquidator: &Address,
    collateral_asset: &Address,
    who: &Address,
    debt_to_cover: i128,
) -> Result<(), Error> {
    require_more_than_zero(debt_to_cover)?;
    require_allowed_token(env, collateral_asset)?;

    let mut price_provider = PriceProvider::new(env);

    let starting_health_factor = calc_health_factor(
        env,
        who,
        &CalcAccountDataCache::none(),
        &mut price_provider,
    )?;

    if starting_health_factor >= MIN_HEALTH_FACTOR {
        return Err(Error::HealthFactorIsNotBroken);
    }

    let token_amount_from_debt_covered =
        price_provider.token_amount_from_usd(collateral_asset, debt_to_cover)?;
    let bonus_collateral = percent_mul(env, token_amount_from_debt_covered, LIQUIDATION_BONUS)
        .ok_or(Error::MathOverflowError)?;
    let total_collateral_to_redeem = token_amount_from_debt_covered
        .checked_add(bonus_collateral)
        .ok_or(Error::MathOverflowError)?;

    // Fails with InsufficientCollateral when the position is too deep under water to pay the bonus
    do_redeem_collateral(
        env,
        who,
        liquidator,
        collateral_asset,
        total_collateral_to_redeem,
        None,
    )?;
    do_burn_dsc(env, debt_to_cover, who, liquidator)?;

    let ending_health_factor = calc_health_factor(
        env,
        who,
        &CalcAccountDataCache::none(),
        &mut price_provider,
    )?;

    if ending_health_factor <= starting_health_factor {
        log!(
            env,
            "health factor not improved",
            starting_health_factor,
            ending_health_factor
        );
        return Err(Error::HealthFactorNotImproved);
    }

    let liquidator_health_factor = calc_health_factor(
        env,
        liquidator,
        &CalcAccountDataCache::none(),
        &mut price_provider,
    )?;
    require_healthy(env, liquidator, liquidator_health_factor)?;

    event::liquidation(
        env,
        who,
        liquidator,
        collateral_asset,
        debt_to_cover,
        total_collateral_to_redeem,
    );

    Ok(())
}
