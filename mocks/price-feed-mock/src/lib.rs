#![deny(warnings)]
#![no_std]

use crate::storage::*;
use price_feed_interface::types::{asset::Asset, price_data::PriceData};
use price_feed_interface::PriceFeedTrait;
use soroban_sdk::{contract, contractimpl, Env, Symbol, Vec};

mod storage;
#[cfg(test)]
mod test;

/// Decimals of every quoted price, the same as USD feeds of the usual aggregators
pub const DECIMALS: u32 = 8;

/// Price update period in seconds
pub const RESOLUTION: u32 = 300;

/// Oracle returning the records set by `init`. Records are kept most recent first.
#[contract]
pub struct PriceFeedMock;

#[contractimpl]
impl PriceFeedTrait for PriceFeedMock {
    fn base(env: Env) -> Asset {
        Asset::Other(Symbol::new(&env, "USD"))
    }

    fn assets(env: Env) -> Vec<Asset> {
        read_assets(&env)
    }

    fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    fn resolution(_env: Env) -> u32 {
        RESOLUTION
    }

    fn price(env: Env, asset: Asset, timestamp: u64) -> Option<PriceData> {
        read_prices(&env, &asset)?
            .iter()
            .find(|price| price.timestamp == timestamp)
    }

    fn prices(env: Env, asset: Asset, records: u32) -> Option<Vec<PriceData>> {
        let prices = read_prices(&env, &asset)?;
        let len = prices.len().min(records);

        Some(prices.slice(0..len))
    }

    fn lastprice(env: Env, asset: Asset) -> Option<PriceData> {
        read_prices(&env, &asset)?.first()
    }

    fn init(env: Env, asset: Asset, prices: Vec<PriceData>) {
        write_prices(&env, &asset, &prices);
    }
}
