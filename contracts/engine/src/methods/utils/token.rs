use engine_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};
use stable_token_interface::StableTokenClient;

use crate::storage::read_stable_token;

pub fn transfer_collateral(
    env: &Env,
    asset: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    match token::Client::new(env, asset).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

pub fn mint_stable(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let stable_token = read_stable_token(env)?;

    match StableTokenClient::new(env, &stable_token).try_mint(to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::MintFailed),
    }
}

/// Moves stable units of `from` to the engine and burns them there
pub fn pull_and_burn_stable(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let stable_token = read_stable_token(env)?;
    let client = StableTokenClient::new(env, &stable_token);
    let engine = env.current_contract_address();

    match client.try_transfer(from, &engine, &amount) {
        Ok(Ok(())) => {}
        _ => return Err(Error::TransferFailed),
    }

    match client.try_burn(&engine, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::BurnFailed),
    }
}
