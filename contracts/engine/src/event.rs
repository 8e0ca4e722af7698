use soroban_sdk::{Address, Env, Symbol, Vec};

pub(crate) fn initialized(e: &Env, stable_token: &Address, collateral_tokens: &Vec<Address>) {
    let topics = (Symbol::new(e, "initialize"), stable_token.clone());
    e.events().publish(topics, collateral_tokens.clone());
}

pub(crate) fn collateral_deposited(e: &Env, who: &Address, asset: &Address, amount: i128) {
    let topics = (Symbol::new(e, "collateral_deposited"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn collateral_redeemed(
    e: &Env,
    from: &Address,
    to: &Address,
    asset: &Address,
    amount: i128,
) {
    let topics = (Symbol::new(e, "collateral_redeemed"), from.clone());
    e.events().publish(topics, (to.clone(), asset.clone(), amount));
}

pub(crate) fn dsc_minted(e: &Env, who: &Address, amount: i128) {
    let topics = (Symbol::new(e, "dsc_minted"), who.clone());
    e.events().publish(topics, amount);
}

pub(crate) fn dsc_burned(e: &Env, on_behalf_of: &Address, dsc_from: &Address, amount: i128) {
    let topics = (Symbol::new(e, "dsc_burned"), on_behalf_of.clone());
    e.events().publish(topics, (dsc_from.clone(), amount));
}

pub(crate) fn liquidation(
    e: &Env,
    who: &Address,
    liquidator: &Address,
    asset: &Address,
    debt_covered: i128,
    collateral_seized: i128,
) {
    let topics = (Symbol::new(e, "liquidation"), who.clone());
    e.events().publish(
        topics,
        (liquidator.clone(), asset.clone(), debt_covered, collateral_seized),
    );
}
