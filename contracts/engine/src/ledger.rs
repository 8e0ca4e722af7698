use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::{read_collateral, read_dsc_minted, write_collateral, write_dsc_minted};

/// Increases collateral of `who` in `asset`. Returns the balance after.
pub fn add_collateral(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
) -> Result<i128, Error> {
    let balance_after = read_collateral(env, who, asset)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    write_collateral(env, who, asset, balance_after);

    Ok(balance_after)
}

/// Decreases collateral of `who` in `asset`. Returns the balance after.
pub fn sub_collateral(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
) -> Result<i128, Error> {
    let balance = read_collateral(env, who, asset);

    if amount > balance {
        return Err(Error::InsufficientCollateral);
    }

    let balance_after = balance - amount;
    write_collateral(env, who, asset, balance_after);

    Ok(balance_after)
}

pub fn add_debt(env: &Env, who: &Address, amount: i128) -> Result<i128, Error> {
    let debt_after = read_dsc_minted(env, who)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    write_dsc_minted(env, who, debt_after);

    Ok(debt_after)
}

pub fn sub_debt(env: &Env, who: &Address, amount: i128) -> Result<i128, Error> {
    let debt = read_dsc_minted(env, who);

    if amount > debt {
        return Err(Error::InsufficientDebt);
    }

    let debt_after = debt - amount;
    write_dsc_minted(env, who, debt_after);

    Ok(debt_after)
}
