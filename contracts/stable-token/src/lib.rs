#![deny(warnings)]
#![no_std]

use crate::balance::*;
use crate::storage::*;
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;
use stable_token_interface::StableTokenTrait;

mod balance;
mod event;
mod storage;

#[cfg(test)]
mod test;

#[contract]
pub struct StableToken;

#[contractimpl]
impl StableTokenTrait for StableToken {
    /// Initializes the stable token contract.
    ///
    /// # Arguments
    ///
    /// - owner - The address allowed to mint and burn, normally the engine contract.
    /// - decimal - The number of decimals of the token.
    /// - name - The name of the token.
    /// - symbol - The symbol of the token.
    ///
    /// # Panics
    ///
    /// Panics if the specified decimal value exceeds the maximum value of u8.
    /// Panics if the contract has already been initialized.
    /// Panics if name or symbol is empty
    ///
    fn initialize(e: Env, owner: Address, decimal: u32, name: String, symbol: String) {
        if decimal > u32::from(u8::MAX) {
            panic!("stable-token: decimal must fit in a u8");
        }

        if name.len() == 0 {
            panic!("stable-token: no name");
        }

        if symbol.len() == 0 {
            panic!("stable-token: no symbol");
        }

        if has_owner(&e) {
            panic!("stable-token: already initialized");
        }

        write_owner(&e, &owner);
        write_metadata(
            &e,
            TokenMetadata {
                decimal,
                name: name.clone(),
                symbol: symbol.clone(),
            },
        );

        event::initialized(&e, owner, decimal, name, symbol);
    }

    /// Returns the address allowed to mint and burn.
    fn owner(e: Env) -> Address {
        read_owner(&e)
    }

    /// Hands minting and burning rights over to `new_owner`.
    ///
    /// # Panics
    ///
    /// Panics if the caller is not the current owner.
    ///
    fn transfer_ownership(e: Env, new_owner: Address) {
        let owner = read_owner(&e);
        owner.require_auth();

        write_owner(&e, &new_owner);
        event::ownership_transferred(&e, owner, new_owner);
    }

    /// Returns the amount of tokens that the `spender` is allowed to withdraw from the `from` address.
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&e, from, spender).amount
    }

    /// Set the allowance for a spender to withdraw from the `from` address by a specified amount of tokens.
    ///
    /// # Panics
    ///
    /// Panics if the caller is not authorized.
    /// Panics if the amount is negative.
    /// Panics if `expiration_ledger` is in the past while amount is positive.
    ///
    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();

        require_nonnegative_amount(amount);

        write_allowance(&e, from.clone(), spender.clone(), amount, expiration_ledger);
        event::approve(&e, from, spender, amount, expiration_ledger);
    }

    fn balance(e: Env, id: Address) -> i128 {
        read_balance(&e, id)
    }

    /// Transfers a specified amount of tokens from one account (`from`) to another account (`to`).
    ///
    /// # Panics
    ///
    /// Panics if the caller (`from`) is not authorized.
    /// Panics if the amount is not positive or exceeds the balance.
    ///
    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        require_positive_amount(amount);

        spend_balance(&e, from.clone(), amount);
        receive_balance(&e, to.clone(), amount);
        event::transfer(&e, from, to, amount);
    }

    /// Transfers a specified amount of tokens from the from account to the to account on behalf of the spender account.
    ///
    /// # Panics
    ///
    /// Panics if the spender is not authorized.
    /// Panics if the spender is not allowed to spend `amount`.
    /// Panics if the amount is not positive or exceeds the balance.
    ///
    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        require_positive_amount(amount);

        spend_allowance(&e, from.clone(), spender, amount);
        spend_balance(&e, from.clone(), amount);
        receive_balance(&e, to.clone(), amount);
        event::transfer(&e, from, to, amount);
    }

    /// Burns tokens held by the owner.
    ///
    /// # Panics
    ///
    /// Panics if `from` is not the owner or did not authorize the call.
    /// Panics if the amount is not positive.
    /// Panics if the amount exceeds the owner's balance.
    ///
    fn burn(e: Env, from: Address, amount: i128) {
        let owner = read_owner(&e);
        if from != owner {
            panic!("stable-token: only owner can burn");
        }
        from.require_auth();
        require_positive_amount(amount);

        if read_balance(&e, from.clone()) < amount {
            panic!("stable-token: burn amount exceeds balance");
        }

        spend_balance(&e, from.clone(), amount);
        add_total_supply(&e, amount.checked_neg().expect("stable-token: no overflow"));
        event::burn(&e, from, amount);
    }

    /// Burns tokens of `from` using an allowance given to the owner.
    ///
    /// # Panics
    ///
    /// Panics if `spender` is not the owner or did not authorize the call.
    /// Panics if the allowance or the balance is insufficient.
    ///
    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        let owner = read_owner(&e);
        if spender != owner {
            panic!("stable-token: only owner can burn");
        }
        spender.require_auth();
        require_positive_amount(amount);

        spend_allowance(&e, from.clone(), spender, amount);
        spend_balance(&e, from.clone(), amount);
        add_total_supply(&e, amount.checked_neg().expect("stable-token: no overflow"));
        event::burn(&e, from, amount);
    }

    /// Mints a specified amount of tokens for a given `to`.
    ///
    /// # Panics
    ///
    /// Panics if the amount is not positive.
    /// Panics if the caller is not the owner.
    ///
    fn mint(e: Env, to: Address, amount: i128) {
        let owner = read_owner(&e);
        owner.require_auth();
        require_positive_amount(amount);

        receive_balance(&e, to.clone(), amount);
        add_total_supply(&e, amount);
        event::mint(&e, owner, to, amount);
    }

    fn decimals(e: Env) -> u32 {
        read_decimal(&e)
    }

    fn name(e: Env) -> String {
        read_name(&e)
    }

    fn symbol(e: Env) -> String {
        read_symbol(&e)
    }

    fn total_supply(e: Env) -> i128 {
        read_total_supply(&e)
    }
}
