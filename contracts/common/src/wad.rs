use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Env, I256};

use crate::{LIQUIDATION_PRECISION, PRECISION, PRICE_DECIMALS};

/// Calculates `x * y / denominator` rounding towards zero.
///
/// Operands are expected to be non-negative. When the intermediate product
/// does not fit into i128 the calculation is repeated with 256-bit host integers.
/// Returns None on zero denominator or when the result does not fit into i128.
pub fn mul_div_floor(env: &Env, x: i128, y: i128, denominator: i128) -> Option<i128> {
    if denominator == 0 {
        return None;
    }

    x.fixed_mul_floor(y, denominator).or_else(|| {
        I256::from_i128(env, x)
            .mul(&I256::from_i128(env, y))
            .div(&I256::from_i128(env, denominator))
            .to_i128()
    })
}

/// Calculates `value * percent / LIQUIDATION_PRECISION`
pub fn percent_mul(env: &Env, value: i128, percent: u32) -> Option<i128> {
    mul_div_floor(env, value, percent.into(), LIQUIDATION_PRECISION.into())
}

/// Fixed type with inner type of i128 and fixed denominator 10e18
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Wad(i128);

impl Wad {
    pub const DENOMINATOR: i128 = PRECISION;

    /// Returns inner value
    pub const fn into_inner(self) -> i128 {
        self.0
    }

    /// Construct Wad from inner value
    pub fn from_inner<T: Into<i128>>(inner: T) -> Wad {
        Wad(inner.into())
    }

    /// Rescales a value with `decimals` decimals to the Wad precision
    pub fn from_decimals(value: i128, decimals: u32) -> Option<Wad> {
        if decimals <= PRICE_DECIMALS {
            let scale = 10i128.checked_pow(PRICE_DECIMALS - decimals)?;
            value.checked_mul(scale).map(Wad)
        } else {
            let scale = 10i128.checked_pow(decimals - PRICE_DECIMALS)?;
            value.checked_div(scale).map(Wad)
        }
    }

    /// Calculates product of fixed value and int value.
    /// Result is int value
    pub fn mul_int(self, env: &Env, other: i128) -> Option<i128> {
        mul_div_floor(env, self.0, other, Self::DENOMINATOR)
    }

    /// Calculates division of non fixed int value and fixed value, e.g. other / self.
    /// Result is int value
    pub fn recip_mul_int(self, env: &Env, other: i128) -> Option<i128> {
        mul_div_floor(env, other, Self::DENOMINATOR, self.0)
    }
}
