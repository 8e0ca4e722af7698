pub mod account_data;
pub mod calc_account_data_cache;
pub mod price_provider;
