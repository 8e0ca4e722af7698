use crate::tests::sut::{init_engine, ONE};
use crate::*;
use soroban_sdk::testutils::Address as _;

#[test]
fn should_deposit_and_mint() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let user = Address::generate(&env);
    let weth = sut.weth().address.clone();

    sut.weth_admin().mint(&user, &(10 * ONE));
    sut.engine
        .deposit_collateral_and_mint_dsc(&user, &weth, &(10 * ONE), &ONE);

    assert_eq!(sut.stable_token.balance(&user), ONE);
    assert_eq!(sut.engine.dsc_minted(&user), ONE);
    assert_eq!(sut.engine.collateral_balance(&user, &weth), 10 * ONE);
    assert_eq!(sut.weth().balance(&user), 0);
    assert_eq!(sut.weth().balance(&sut.engine.address), 10 * ONE);
}

#[test]
fn should_roll_back_deposit_when_mint_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let user = Address::generate(&env);
    let weth = sut.weth().address.clone();

    sut.weth_admin().mint(&user, &ONE);

    // 1 weth backs 1000 stable units
    assert_eq!(
        sut.engine
            .try_deposit_collateral_and_mint_dsc(&user, &weth, &ONE, &(1_000 * ONE + 1))
            .unwrap_err()
            .unwrap(),
        Error::HealthFactorBroken
    );

    assert_eq!(sut.engine.collateral_balance(&user, &weth), 0);
    assert_eq!(sut.engine.dsc_minted(&user), 0);
    assert_eq!(sut.weth().balance(&user), ONE);
    assert_eq!(sut.stable_token.balance(&user), 0);
}

#[test]
fn should_fail_when_zero_amounts() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let user = Address::generate(&env);
    let weth = sut.weth().address.clone();

    sut.weth_admin().mint(&user, &ONE);

    assert_eq!(
        sut.engine
            .try_deposit_collateral_and_mint_dsc(&user, &weth, &0, &ONE)
            .unwrap_err()
            .unwrap(),
        Error::NeedsMoreThanZero
    );
    assert_eq!(
        sut.engine
            .try_deposit_collateral_and_mint_dsc(&user, &weth, &ONE, &0)
            .unwrap_err()
            .unwrap(),
        Error::NeedsMoreThanZero
    );
    assert_eq!(sut.engine.collateral_balance(&user, &weth), 0);
}
