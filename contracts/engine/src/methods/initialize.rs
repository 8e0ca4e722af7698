use engine_interface::types::error::Error;
use soroban_sdk::{vec, Address, Env, Vec};

use crate::event;
use crate::storage::{write_collateral_tokens, write_price_feed, write_stable_token};

use super::utils::validation::require_not_initialized;

pub fn initialize(
    env: &Env,
    collateral_tokens: &Vec<Address>,
    price_feeds: &Vec<Address>,
    stable_token: &Address,
) -> Result<(), Error> {
    require_not_initialized(env);

    if collateral_tokens.len() != price_feeds.len() {
        return Err(Error::TokenAddressesAndPriceFeedAddressesMustBeSameLength);
    }

    let mut registry = vec![env];

    for asset in collateral_tokens.iter() {
        if registry.contains(&asset) {
            return Err(Error::DuplicateCollateralToken);
        }

        registry.push_back(asset);
    }

    for (asset, feed) in registry.iter().zip(price_feeds.iter()) {
        write_price_feed(env, &asset, &feed);
    }

    write_collateral_tokens(env, &registry);
    write_stable_token(env, stable_token);

    event::initialized(env, stable_token, &registry);

    Ok(())
}
