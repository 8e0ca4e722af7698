use common::MIN_HEALTH_FACTOR;
use engine_interface::types::error::Error;
use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::storage::{has_stable_token, read_price_feed};

pub fn require_not_initialized(env: &Env) {
    if has_stable_token(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_more_than_zero(amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::NeedsMoreThanZero);
    }

    Ok(())
}

pub fn require_allowed_token(env: &Env, asset: &Address) -> Result<(), Error> {
    if read_price_feed(env, asset).is_none() {
        return Err(Error::TokenNotAllowed);
    }

    Ok(())
}

pub fn require_healthy(env: &Env, who: &Address, health_factor: i128) -> Result<(), Error> {
    if health_factor < MIN_HEALTH_FACTOR {
        log!(env, "health factor broken", who.clone(), health_factor);
        return Err(Error::HealthFactorBroken);
    }

    Ok(())
}
