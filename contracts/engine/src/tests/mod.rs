
mod deposit_collateral_and_mint_dsc;
