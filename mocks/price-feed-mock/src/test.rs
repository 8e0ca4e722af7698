use price_feed_interface::types::{asset::Asset, price_data::PriceData};
use price_feed_interface::PriceFeedClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env, Symbol};

use crate::{PriceFeedMock, DECIMALS};

fn create_feed<'a>(e: &Env) -> PriceFeedClient<'a> {
    PriceFeedClient::new(e, &e.register_contract(None, PriceFeedMock {}))
}

#[test]
fn unknown_asset_has_no_price() {
    let e = Env::default();
    let feed = create_feed(&e);
    let asset = Asset::Stellar(Address::generate(&e));

    assert_eq!(feed.lastprice(&asset), None);
    assert_eq!(feed.prices(&asset, &3), None);
    assert_eq!(feed.price(&asset, &0), None);
    assert_eq!(feed.assets().len(), 0);
}

#[test]
fn metadata() {
    let e = Env::default();
    let feed = create_feed(&e);

    assert_eq!(feed.decimals(), DECIMALS);
    assert_eq!(feed.base(), Asset::Other(Symbol::new(&e, "USD")));
    assert_eq!(feed.resolution(), 300);
}

#[test]
fn init_and_read() {
    let e = Env::default();
    let feed = create_feed(&e);
    let asset = Asset::Stellar(Address::generate(&e));

    feed.init(
        &asset,
        &vec![
            &e,
            PriceData {
                price: 2_000_00000000,
                timestamp: 600,
            },
            PriceData {
                price: 1_900_00000000,
                timestamp: 300,
            },
        ],
    );

    assert_eq!(
        feed.lastprice(&asset),
        Some(PriceData {
            price: 2_000_00000000,
            timestamp: 600,
        })
    );
    assert_eq!(
        feed.price(&asset, &300),
        Some(PriceData {
            price: 1_900_00000000,
            timestamp: 300,
        })
    );
    assert_eq!(feed.price(&asset, &100), None);
    assert_eq!(feed.prices(&asset, &1).map(|p| p.len()), Some(1));
    assert_eq!(feed.prices(&asset, &5).map(|p| p.len()), Some(2));
    assert_eq!(feed.assets(), vec![&e, asset.clone()]);

    feed.init(
        &asset,
        &vec![
            &e,
            PriceData {
                price: 1_000_00000000,
                timestamp: 900,
            },
        ],
    );

    assert_eq!(feed.lastprice(&asset).map(|p| p.price), Some(1_000_00000000));
    assert_eq!(feed.assets().len(), 1);
}
