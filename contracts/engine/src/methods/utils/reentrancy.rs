use engine_interface::types::error::Error;
use soroban_sdk::Env;

use crate::storage::{is_locked, write_locked};

/// Runs `f` holding the engine lock. The lock is released whatever `f` returns.
pub fn non_reentrant<T, F>(env: &Env, f: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, Error>,
{
    if is_locked(env) {
        return Err(Error::Reentrancy);
    }

    write_locked(env, true);
    let result = f();
    write_locked(env, false);

    result
}
