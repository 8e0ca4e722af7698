#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, String};
pub struct Spec;

/// Interface for the pegged stable token.
///
/// Token methods follow the Stellar token interface, so the contract can be used
/// through `soroban_sdk::token::Client` as well. Minting and burning are restricted
/// to the owner, which is the engine after deployment.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "StableTokenClient")]
pub trait StableTokenTrait {
    fn initialize(e: Env, owner: Address, decimal: u32, name: String, symbol: String);

    fn owner(e: Env) -> Address;

    fn transfer_ownership(e: Env, new_owner: Address);

    fn allowance(e: Env, from: Address, spender: Address) -> i128;

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32);

    fn balance(e: Env, id: Address) -> i128;

    fn transfer(e: Env, from: Address, to: Address, amount: i128);

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128);

    fn burn(e: Env, from: Address, amount: i128);

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128);

    fn mint(e: Env, to: Address, amount: i128);

    fn decimals(e: Env) -> u32;

    fn name(e: Env) -> String;

    fn symbol(e: Env) -> String;

    fn total_supply(e: Env) -> i128;
}
