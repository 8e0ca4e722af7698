use price_feed_interface::types::asset::Asset;
use price_feed_interface::types::price_data::PriceData;
use soroban_sdk::{contracttype, vec, Env, Vec};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Assets,
    Prices(Asset),
}

pub fn write_prices(env: &Env, asset: &Asset, prices: &Vec<PriceData>) {
    let mut assets = read_assets(env);
    if !assets.contains(asset) {
        assets.push_back(asset.clone());
        env.storage().instance().set(&DataKey::Assets, &assets);
    }

    env.storage()
        .instance()
        .set(&DataKey::Prices(asset.clone()), prices);
}

pub fn read_prices(env: &Env, asset: &Asset) -> Option<Vec<PriceData>> {
    env.storage().instance().get(&DataKey::Prices(asset.clone()))
}

pub fn read_assets(env: &Env) -> Vec<Asset> {
    env.storage()
        .instance()
        .get(&DataKey::Assets)
        .unwrap_or(vec![env])
}
