#![deny(warnings)]
#![no_std]

mod wad;

pub use wad::*;

/// Fixed point denominator used for amounts, prices and health factors
pub const PRECISION: i128 = 1_000_000_000_000_000_000;

/// Number of decimals prices are normalized to
pub const PRICE_DECIMALS: u32 = 18;

/// Share of collateral value counted against debt, expressed in `LIQUIDATION_PRECISION`.
/// 50 means a position must be 200% collateralized
pub const LIQUIDATION_THRESHOLD: u32 = 50;

/// Denominator for `LIQUIDATION_THRESHOLD` and `LIQUIDATION_BONUS`
pub const LIQUIDATION_PRECISION: u32 = 100;

/// Extra collateral paid to a liquidator, expressed in `LIQUIDATION_PRECISION`
pub const LIQUIDATION_BONUS: u32 = 10;

/// Health factor below which a position can be liquidated
pub const MIN_HEALTH_FACTOR: i128 = PRECISION;

/// Health factor of a position without debt
pub const MAX_HEALTH_FACTOR: i128 = i128::MAX;

/// Max age of an oracle price in seconds
pub const PRICE_TIMEOUT: u64 = 3 * 60 * 60;
