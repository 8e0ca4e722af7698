use soroban_sdk::{Address, Env};

use crate::storage::{
    read_allowance, read_balance, read_total_supply, write_allowance, write_balance,
    write_total_supply,
};

pub fn require_nonnegative_amount(amount: i128) {
    if amount < 0 {
        panic!("stable-token: negative amount is not allowed: {}", amount)
    }
}

pub fn require_positive_amount(amount: i128) {
    if amount <= 0 {
        panic!("stable-token: zero or negative amount is not allowed: {}", amount)
    }
}

pub fn receive_balance(e: &Env, addr: Address, amount: i128) {
    let balance = read_balance(e, addr.clone());
    write_balance(
        e,
        addr,
        balance
            .checked_add(amount)
            .expect("stable-token: no overflow"),
    );
}

pub fn spend_balance(e: &Env, addr: Address, amount: i128) {
    let balance = read_balance(e, addr.clone());
    if balance < amount {
        panic!("stable-token: insufficient balance");
    }
    write_balance(e, addr, balance - amount);
}

pub fn spend_allowance(e: &Env, from: Address, spender: Address, amount: i128) {
    let allowance = read_allowance(e, from.clone(), spender.clone());
    if allowance.amount < amount {
        panic!("stable-token: insufficient allowance");
    }
    if amount > 0 {
        write_allowance(
            e,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        );
    }
}

pub fn add_total_supply(e: &Env, amount: i128) {
    let total_supply = read_total_supply(e)
        .checked_add(amount)
        .expect("stable-token: no overflow");
    if total_supply.is_negative() {
        panic!("stable-token: negative total supply");
    }

    write_total_supply(e, total_supply);
}
