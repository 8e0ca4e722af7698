#![deny(warnings)]
#![no_std]

use common::{LIQUIDATION_BONUS, LIQUIDATION_THRESHOLD, MIN_HEALTH_FACTOR, PRECISION};
use engine_interface::types::{account_information::AccountInformation, error::Error};
use engine_interface::DscEngineTrait;
use methods::{
    account_information::{
        account_collateral_value, account_information, calculate_health_factor, health_factor,
    },
    burn_dsc::burn_dsc,
    deposit_collateral::deposit_collateral,
    deposit_collateral_and_mint_dsc::deposit_collateral_and_mint_dsc,
    initialize::initialize,
    liquidate::liquidate,
    mint_dsc::mint_dsc,
    redeem_collateral::redeem_collateral,
    redeem_collateral_for_dsc::redeem_collateral_for_dsc,
};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use crate::storage::*;
use crate::types::price_provider::PriceProvider;

mod event;
mod ledger;
mod methods;
mod storage;
#[cfg(test)]
mod tests;
mod types;

#[contract]
pub struct DscEngine;

#[contractimpl]
impl DscEngineTrait for DscEngine {
    /// Registers the collateral assets with their price feeds and the stable token
    /// the engine mints. The engine must own the stable token.
    ///
    /// # Errors
    ///
    /// - AlreadyInitialized
    /// - TokenAddressesAndPriceFeedAddressesMustBeSameLength
    /// - DuplicateCollateralToken
    ///
    fn initialize(
        env: Env,
        collateral_tokens: Vec<Address>,
        price_feeds: Vec<Address>,
        stable_token: Address,
    ) -> Result<(), Error> {
        initialize(&env, &collateral_tokens, &price_feeds, &stable_token)
    }

    fn version() -> u32 {
        1
    }

    /// Locks `amount` of `asset` owned by `who` as collateral.
    ///
    /// # Errors
    ///
    /// - NeedsMoreThanZero
    /// - TokenNotAllowed
    /// - TransferFailed when `who` can't pay
    ///
    fn deposit_collateral(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), Error> {
        deposit_collateral(&env, &who, &asset, amount)
    }

    /// Mints `amount` stable units to `who` against the collateral already locked.
    ///
    /// # Errors
    ///
    /// - NeedsMoreThanZero
    /// - HealthFactorBroken if the debt after minting is not covered
    /// - PriceUnavailable
    /// - MintFailed
    ///
    fn mint_dsc(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        mint_dsc(&env, &who, amount)
    }

    fn deposit_collateral_and_mint_dsc(
        env: Env,
        who: Address,
        asset: Address,
        collateral_amount: i128,
        dsc_amount: i128,
    ) -> Result<(), Error> {
        deposit_collateral_and_mint_dsc(&env, &who, &asset, collateral_amount, dsc_amount)
    }

    /// Unlocks `amount` of `asset` collateral back to `who`.
    ///
    /// # Errors
    ///
    /// - NeedsMoreThanZero
    /// - TokenNotAllowed
    /// - InsufficientCollateral
    /// - HealthFactorBroken if the remaining collateral doesn't cover the debt
    /// - TransferFailed
    ///
    fn redeem_collateral(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), Error> {
        redeem_collateral(&env, &who, &asset, amount)
    }

    /// Repays `amount` of `who` debt burning stable units held by `who`.
    ///
    /// # Errors
    ///
    /// - NeedsMoreThanZero
    /// - InsufficientDebt
    /// - TransferFailed
    /// - BurnFailed
    ///
    fn burn_dsc(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        burn_dsc(&env, &who, amount)
    }

    fn redeem_collateral_for_dsc(
        env: Env,
        who: Address,
        asset: Address,
        collateral_amount: i128,
        dsc_amount: i128,
    ) -> Result<(), Error> {
        redeem_collateral_for_dsc(&env, &who, &asset, collateral_amount, dsc_amount)
    }

    /// Covers `debt_to_cover` of an undercollateralized `who` with stable units
    /// of `liquidator` who receives the equivalent `collateral_asset` plus a bonus.
    ///
    /// # Errors
    ///
    /// - NeedsMoreThanZero
    /// - TokenNotAllowed
    /// - HealthFactorIsNotBroken
    /// - InsufficientCollateral if `who` can't pay the collateral with the bonus
    /// - HealthFactorNotImproved
    /// - HealthFactorBroken if the liquidator ends up undercollateralized
    ///
    fn liquidate(
        env: Env,
        liquidator: Address,
        collateral_asset: Address,
        who: Address,
        debt_to_cover: i128,
    ) -> Result<(), Error> {
        liquidate(&env, &liquidator, &collateral_asset, &who, debt_to_cover)
    }

    fn account_information(env: Env, who: Address) -> Result<AccountInformation, Error> {
        account_information(&env, &who)
    }

    fn account_collateral_value(env: Env, who: Address) -> Result<i128, Error> {
        account_collateral_value(&env, &who)
    }

    fn health_factor(env: Env, who: Address) -> Result<i128, Error> {
        health_factor(&env, &who)
    }

    fn calculate_health_factor(
        env: Env,
        total_dsc_minted: i128,
        collateral_value_in_usd: i128,
    ) -> Result<i128, Error> {
        calculate_health_factor(&env, total_dsc_minted, collateral_value_in_usd)
    }

    fn usd_value(env: Env, asset: Address, amount: i128) -> Result<i128, Error> {
        PriceProvider::new(&env).usd_value(&asset, amount)
    }

    fn token_amount_from_usd(env: Env, asset: Address, usd_amount: i128) -> Result<i128, Error> {
        PriceProvider::new(&env).token_amount_from_usd(&asset, usd_amount)
    }

    fn collateral_balance(env: Env, who: Address, asset: Address) -> i128 {
        read_collateral(&env, &who, &asset)
    }

    fn dsc_minted(env: Env, who: Address) -> i128 {
        read_dsc_minted(&env, &who)
    }

    fn collateral_tokens(env: Env) -> Vec<Address> {
        read_collateral_tokens(&env)
    }

    fn price_feed(env: Env, asset: Address) -> Option<Address> {
        read_price_feed(&env, &asset)
    }

    fn stable_token(env: Env) -> Result<Address, Error> {
        read_stable_token(&env)
    }

    fn precision() -> i128 {
        PRECISION
    }

    fn liquidation_threshold() -> u32 {
        LIQUIDATION_THRESHOLD
    }

    fn liquidation_bonus() -> u32 {
        LIQUIDATION_BONUS
    }

    fn min_health_factor() -> i128 {
        MIN_HEALTH_FACTOR
    }
}
