use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::ledger::sub_collateral;
use crate::types::calc_account_data_cache::CalcAccountDataCache;
use crate::types::price_provider::PriceProvider;

use super::account_information::calc_health_factor;
use super::utils::reentrancy::non_reentrant;
use super::utils::token::transfer_collateral;
use super::utils::validation::{require_allowed_token, require_healthy, require_more_than_zero};

pub fn redeem_collateral(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    non_reentrant(env, || {
        do_redeem_collateral(env, who, who, asset, amount, Some(&mut PriceProvider::new(env)))
    })
}

/// Moves `amount` of `from` collateral to `to`.
/// `from` health is checked on the post-state only when `price_provider` is passed.
pub(crate) fn do_redeem_collateral(
    env: &Env,
    from: &Address,
    to: &Address,
    asset: &Address,
    amount: i128,
    price_provider: Option<&mut PriceProvider>,
) -> Result<(), Error> {
    require_more_than_zero(amount)?;
    require_allowed_token(env, asset)?;

    sub_collateral(env, from, asset, amount)?;
    event::collateral_redeemed(env, from, to, asset, amount);

    if let Some(price_provider) = price_provider {
        let health_factor =
            calc_health_factor(env, from, &CalcAccountDataCache::none(), price_provider)?;
        require_healthy(env, from, health_factor)?;
    }

    transfer_collateral(env, asset, &env.current_contract_address(), to, amount)
}
