#![cfg(test)]
extern crate std;

use soroban_sdk::testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation};
use soroban_sdk::{symbol_short, Address, Env, IntoVal, String, Symbol};
use stable_token_interface::StableTokenClient;

use crate::StableToken;

fn create_token<'a>(e: &Env) -> (StableTokenClient<'a>, Address) {
    let owner = Address::generate(e);

    let token = StableTokenClient::new(e, &e.register_contract(None, StableToken {}));

    token.initialize(
        &owner,
        &18,
        &"Decentralized Stable Coin".into_val(e),
        &"DSC".into_val(e),
    );

    (token, owner)
}

#[test]
fn initialize() {
    let e = Env::default();
    e.mock_all_auths();

    let (token, owner) = create_token(&e);

    assert_eq!(token.decimals(), 18);
    assert_eq!(
        token.name(),
        String::from_str(&e, "Decentralized Stable Coin")
    );
    assert_eq!(token.symbol(), String::from_str(&e, "DSC"));
    assert_eq!(token.owner(), owner);
    assert_eq!(token.total_supply(), 0);
}

#[test]
#[should_panic(expected = "stable-token: already initialized")]
fn initialize_already_initialized() {
    let e = Env::default();
    let (token, _owner) = create_token(&e);

    token.initialize(
        &Address::generate(&e),
        &18,
        &"name".into_val(&e),
        &"symbol".into_val(&e),
    );
}

#[test]
#[should_panic(expected = "stable-token: decimal must fit in a u8")]
fn initialize_decimal_too_large() {
    let e = Env::default();
    let token = StableTokenClient::new(&e, &e.register_contract(None, StableToken {}));

    token.initialize(
        &Address::generate(&e),
        &(u32::from(u8::MAX) + 1),
        &"name".into_val(&e),
        &"symbol".into_val(&e),
    );
}

#[test]
#[should_panic(expected = "stable-token: no name")]
fn initialize_empty_name() {
    let e = Env::default();
    let token = StableTokenClient::new(&e, &e.register_contract(None, StableToken {}));

    token.initialize(
        &Address::generate(&e),
        &18,
        &"".into_val(&e),
        &"symbol".into_val(&e),
    );
}

#[test]
fn mint_requires_owner() {
    let e = Env::default();
    e.mock_all_auths();

    let (token, owner) = create_token(&e);
    let user = Address::generate(&e);

    token.mint(&user, &1000);

    assert_eq!(
        e.auths(),
        [(
            owner.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    token.address.clone(),
                    symbol_short!("mint"),
                    (&user, 1000i128).into_val(&e)
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
    assert_eq!(token.balance(&user), 1000);
    assert_eq!(token.total_supply(), 1000);
}

#[test]
#[should_panic(expected = "stable-token: zero or negative amount is not allowed")]
fn mint_zero() {
    let e = Env::default();
    e.mock_all_auths();

    let (token, _owner) = create_token(&e);

    token.mint(&Address::generate(&e), &0);
}

#[test]
fn transfer() {
    let e = Env::default();
    e.mock_all_auths();

    let (token, _owner) = create_token(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);

    token.mint(&user1, &1000);
    token.transfer(&user1, &user2, &600);

    assert_eq!(
        e.auths(),
        [(
            user1.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    token.address.clone(),
                    symbol_short!("transfer"),
                    (&user1, &user2, 600i128).into_val(&e)
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
    assert_eq!(token.balance(&user1), 400);
    assert_eq!(token.balance(&user2), 600);
    assert_eq!(token.total_supply(), 1000);
}

#[test]
#[should_panic(expected = "stable-token: insufficient balance")]
fn transfer_more_than_balance() {
    let e = Env::default();
    e.mock_all_auths();

    let (token, _owner) = create_token(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);

    token.mint(&user1, &1000);
    token.transfer(&user1, &user2, &1001);
}

#[test]
fn approve_and_transfer_from() {
    let e = Env::default();
    e.mock_all_auths();

    let (token, _owner) = create_token(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    let spender = Address::generate(&e);

    token.mint(&user1, &1000);
    token.approve(&user1, &spender, &500, &200);
    assert_eq!(token.allowance(&user1, &spender), 500);

    token.transfer_from(&spender, &user1, &user2, &400);

    assert_eq!(
        e.auths(),
        [(
            spender.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    token.address.clone(),
                    Symbol::new(&e, "transfer_from"),
                    (&spender, &user1, &user2, 400i128).into_val(&e)
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
    assert_eq!(token.balance(&user1), 600);
    assert_eq!(token.balance(&user2), 400);
    assert_eq!(token.allowance(&user1, &spender), 100);
}

#[test]
#[should_panic(expected = "stable-token: insufficient allowance")]
fn transfer_from_insufficient_allowance() {
    let e = Env::default();
    e.mock_all_auths();

    let (token, _owner) = create_token(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    let spender = Address::generate(&e);

    token.mint(&user1, &1000);
    token.approve(&user1, &spender, &100, &200);
    token.transfer_from(&spender, &user1, &user2, &101);
}

#[test]
fn burn_by_owner() {
    let e = Env::default();
    e.mock_all_auths();

    let (token, owner) = create_token(&e);

    token.mint(&owner, &1000);
    token.burn(&owner, &300);

    assert_eq!(token.balance(&owner), 700);
    assert_eq!(token.total_supply(), 700);
}

#[test]
#[should_panic(expected = "stable-token: only owner can burn")]
fn burn_by_non_owner() {
    let e = Env::default();
    e.mock_all_auths();

    let (token, _owner) = create_token(&e);
    let user = Address::generate(&e);

    token.mint(&user, &1000);
    token.burn(&user, &300);
}

#[test]
#[should_panic(expected = "stable-token: burn amount exceeds balance")]
fn burn_more_than_balance() {
    let e = Env::default();
    e.mock_all_auths();

    let (token, owner) = create_token(&e);

    token.mint(&owner, &1000);
    token.burn(&owner, &1001);
}

#[test]
fn burn_from_with_allowance() {
    let e = Env::default();
    e.mock_all_auths();

    let (token, owner) = create_token(&e);
    let user = Address::generate(&e);

    token.mint(&user, &1000);
    token.approve(&user, &owner, &400, &200);
    token.burn_from(&owner, &user, &400);

    assert_eq!(token.balance(&user), 600);
    assert_eq!(token.total_supply(), 600);
    assert_eq!(token.allowance(&user, &owner), 0);
}

#[test]
fn transfer_ownership() {
    let e = Env::default();
    e.mock_all_auths();

    let (token, owner) = create_token(&e);
    let new_owner = Address::generate(&e);

    token.transfer_ownership(&new_owner);

    assert_eq!(
        e.auths(),
        [(
            owner.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    token.address.clone(),
                    Symbol::new(&e, "transfer_ownership"),
                    (&new_owner,).into_val(&e)
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
    assert_eq!(token.owner(), new_owner);

    let user = Address::generate(&e);
    token.mint(&user, &10);
    assert_eq!(
        e.auths().first().map(|a| a.0.clone()).unwrap(),
        new_owner
    );
}
