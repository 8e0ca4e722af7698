//! Client side of a SEP-40 oracle, see
//! https://github.com/stellar/stellar-protocol/blob/master/ecosystem/sep-0040.md
//!
//! Collateral is valued with `decimals` and `lastprice`, the rest of the
//! methods are kept so any SEP-40 feed can be plugged in.

#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Env, Vec};
use types::asset::Asset;
use types::price_data::PriceData;

pub mod types;

pub struct Spec;

#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedTrait {
    /// Quote asset of every price, e.g. `Other("USD")`
    fn base(env: Env) -> Asset;

    /// Assets with at least one price record
    fn assets(env: Env) -> Vec<Asset>;

    /// Decimals of `PriceData::price`, shared by all assets
    fn decimals(env: Env) -> u32;

    /// Seconds between two records
    fn resolution(env: Env) -> u32;

    /// Record published exactly at `timestamp`
    fn price(env: Env, asset: Asset, timestamp: u64) -> Option<PriceData>;

    /// Up to `records` most recent records, newest first
    fn prices(env: Env, asset: Asset, records: u32) -> Option<Vec<PriceData>>;

    /// Newest record of `asset`
    fn lastprice(env: Env, asset: Asset) -> Option<PriceData>;

    /// Replaces the records of `asset`, newest first. Not part of SEP-40.
    fn init(env: Env, asset: Asset, prices: Vec<PriceData>);
}
