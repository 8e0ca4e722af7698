use common::{Wad, PRICE_TIMEOUT};
use engine_interface::types::error::Error;
use price_feed_interface::types::asset::Asset;
use price_feed_interface::types::price_data::PriceData;
use price_feed_interface::PriceFeedClient;
use soroban_sdk::{log, Address, Env, Map};

use crate::storage::read_price_feed;

/// Converts between collateral amounts and USD values.
///
/// Prices are normalized to 18 decimals and read once per asset, so a single
/// provider must not outlive the invocation it was created in.
pub struct PriceProvider<'a> {
    env: &'a Env,
    prices: Map<Address, i128>,
}

impl<'a> PriceProvider<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self {
            env,
            prices: Map::new(env),
        }
    }

    /// `amount * price / PRECISION`
    pub fn usd_value(&mut self, asset: &Address, amount: i128) -> Result<i128, Error> {
        let price = self.price(asset)?;

        Wad::from_inner(price)
            .mul_int(self.env, amount)
            .ok_or(Error::MathOverflowError)
    }

    /// `usd_amount * PRECISION / price`
    pub fn token_amount_from_usd(
        &mut self,
        asset: &Address,
        usd_amount: i128,
    ) -> Result<i128, Error> {
        let price = self.price(asset)?;

        Wad::from_inner(price)
            .recip_mul_int(self.env, usd_amount)
            .ok_or(Error::MathOverflowError)
    }

    fn price(&mut self, asset: &Address) -> Result<i128, Error> {
        if let Some(price) = self.prices.get(asset.clone()) {
            return Ok(price);
        }

        let feed = read_price_feed(self.env, asset).ok_or(Error::TokenNotAllowed)?;
        let client = PriceFeedClient::new(self.env, &feed);

        let decimals = match client.try_decimals() {
            Ok(Ok(decimals)) => decimals,
            _ => return Err(Error::PriceUnavailable),
        };

        let price_data = match client.try_lastprice(&Asset::Stellar(asset.clone())) {
            Ok(Ok(Some(price_data))) => price_data,
            _ => return Err(Error::PriceUnavailable),
        };

        self.require_fresh(asset, &price_data)?;

        let price = Wad::from_decimals(price_data.price, decimals)
            .ok_or(Error::MathOverflowError)?
            .into_inner();

        if price <= 0 {
            return Err(Error::PriceUnavailable);
        }

        self.prices.set(asset.clone(), price);

        Ok(price)
    }

    fn require_fresh(&self, asset: &Address, price_data: &PriceData) -> Result<(), Error> {
        if price_data.price <= 0 {
            log!(self.env, "non-positive price", asset.clone(), price_data.price);
            return Err(Error::PriceUnavailable);
        }

        let age = self
            .env
            .ledger()
            .timestamp()
            .saturating_sub(price_data.timestamp);

        if age > PRICE_TIMEOUT {
            log!(self.env, "stale price", asset.clone(), age);
            return Err(Error::PriceUnavailable);
        }

        Ok(())
    }
}
