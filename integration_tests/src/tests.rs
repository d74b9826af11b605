#![cfg(test)]
extern crate std;

use crate::contracts;
use crate::testutils::Setup;
use interfaces::Fee;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{Address, IntoVal, Symbol, Val, Vec};
use utils::test_utils::jump;

const NATIVE: &str = contracts::params::NATIVE_DENOM;

#[test]
fn test_integration() {
    let setup = Setup::default();
    let e = &setup.env;

    let providers = std::vec![Address::generate(e), Address::generate(e)];
    let traders = std::vec![Address::generate(e), Address::generate(e)];
    for user in providers.iter().chain(traders.iter()) {
        for denom in ["btc", "eth", "uatom", NATIVE] {
            setup.fund(user, denom, 1_000_000_000);
        }
    }

    // three pools at different rates
    for (asset, asset_amount, native_amount) in [
        ("btc", 1_000_000_u128, 50_000_000_u128),
        ("eth", 20_000_000, 40_000_000),
        ("uatom", 300_000_000, 30_000_000),
    ] {
        let shares = setup.coinswap.add_liquidity(
            &providers[0],
            &setup.coin(asset, asset_amount),
            &native_amount,
            &native_amount,
            &setup.deadline(),
        );
        assert_eq!(shares, native_amount);
    }
    // second provider joins the btc pool with half of the first deposit
    let shares = setup.coinswap.add_liquidity(
        &providers[1],
        &setup.coin("btc", 500_000),
        &25_000_000,
        &25_000_000,
        &setup.deadline(),
    );
    assert_eq!(shares, 25_000_000);

    // single and double swaps in both directions
    let out = setup.coinswap.swap(
        &traders[0],
        &setup.coin(NATIVE, 1_000_000),
        &setup.denom("btc"),
        &1,
        &setup.deadline(),
    );
    assert_eq!(setup.balance(&traders[0], "btc"), 1_000_000_000 + out as i128);

    let estimate = setup
        .coinswap
        .estimate_swap(&setup.coin("eth", 100_000), &setup.denom("uatom"));
    let out = setup.coinswap.swap(
        &traders[1],
        &setup.coin("eth", 100_000),
        &setup.denom("uatom"),
        &estimate,
        &setup.deadline(),
    );
    assert_eq!(out, estimate);
    assert_eq!(setup.balance(&traders[1], "uatom"), 1_000_000_000 + out as i128);
    assert_eq!(setup.balance(&traders[1], NATIVE), 1_000_000_000);

    let paid = setup.coinswap.swap_strict_receive(
        &traders[1],
        &setup.denom("uatom"),
        &setup.coin("btc", 1_000),
        &u128::MAX,
        &setup.deadline(),
    );
    assert!(paid > 0);
    assert_eq!(setup.balance(&traders[1], "btc"), 1_000_001_000);

    // everybody leaves every pool
    for provider in providers.iter() {
        for asset in ["btc", "eth", "uatom"] {
            let shares = setup.shares(provider, asset);
            if shares == 0 {
                continue;
            }
            setup.coinswap.remove_liquidity(
                provider,
                &setup.coin(asset, 0),
                &0,
                &(shares as u128),
                &setup.deadline(),
            );
        }
    }

    // nothing was created or destroyed: every unit is back with a user
    for denom in ["btc", "eth", "uatom", NATIVE] {
        let supply = setup.ledger.supply(&setup.denom(denom));
        assert_eq!(supply, 4_000_000_000);
        let held: i128 = providers
            .iter()
            .chain(traders.iter())
            .map(|user| setup.balance(user, denom))
            .sum();
        assert_eq!(held, supply);
    }
    for asset in ["btc", "eth", "uatom"] {
        let pool_name = setup.coinswap.get_pool_name(&setup.denom(asset));
        let (reserves, found) = setup.coinswap.get_reserve_pool(&pool_name);
        assert!(found);
        assert!(reserves.is_empty());
        assert_eq!(setup.ledger.supply(&pool_name), 0);
    }
}

#[test]
fn test_providers_earn_fees() {
    let setup = Setup::default();
    let e = &setup.env;
    let provider = Address::generate(e);
    let trader = Address::generate(e);
    setup.fund(&provider, "btc", 1_000_000);
    setup.fund(&provider, NATIVE, 1_000_000);
    setup.fund(&trader, NATIVE, 1_000_000);

    setup.coinswap.add_liquidity(
        &provider,
        &setup.coin("btc", 1_000_000),
        &1_000_000,
        &1_000_000,
        &setup.deadline(),
    );

    // round trips only pay fees into the pool
    for _ in 0..5 {
        let out = setup.coinswap.swap(
            &trader,
            &setup.coin(NATIVE, 100_000),
            &setup.denom("btc"),
            &0,
            &setup.deadline(),
        );
        setup.coinswap.swap(
            &trader,
            &setup.coin("btc", out),
            &setup.native(),
            &0,
            &setup.deadline(),
        );
    }
    assert!(setup.balance(&trader, NATIVE) < 1_000_000);

    let (asset_out, native_out) = setup.coinswap.remove_liquidity(
        &provider,
        &setup.coin("btc", 1_000_000),
        &1_000_000,
        &1_000_000,
        &setup.deadline(),
    );
    assert!(asset_out >= 1_000_000);
    assert!(native_out > 1_000_000);
    assert_eq!(
        setup.balance(&trader, NATIVE) + setup.balance(&provider, NATIVE),
        2_000_000
    );
}

#[test]
fn test_fee_update() {
    let setup = Setup::default();
    let e = &setup.env;
    let provider = Address::generate(e);
    setup.fund(&provider, "btc", 10_000);
    setup.fund(&provider, NATIVE, 10_000);
    setup.coinswap.add_liquidity(
        &provider,
        &setup.coin("btc", 10_000),
        &10_000,
        &10_000,
        &setup.deadline(),
    );

    let input = setup.coin(NATIVE, 1_000);
    let before = setup.coinswap.estimate_swap(&input, &setup.denom("btc"));
    setup
        .params
        .set_fee(&setup.admin, &Fee::new(30, 1000));
    let after = setup.coinswap.estimate_swap(&input, &setup.denom("btc"));
    assert!(after < before);

    // invalid updates are refused by the store and pricing is unaffected
    assert!(setup
        .params
        .try_set_fee(&setup.admin, &Fee::new(1000, 1000))
        .is_err());
    assert_eq!(
        setup.coinswap.estimate_swap(&input, &setup.denom("btc")),
        after
    );
}

#[test]
fn test_expired_intents() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    setup.fund(&user, "btc", 10_000);
    setup.fund(&user, NATIVE, 10_000);

    let deadline = setup.deadline();
    jump(e, 601);

    assert_eq!(
        setup.coinswap.try_add_liquidity(
            &user,
            &setup.coin("btc", 100),
            &10,
            &10,
            &deadline
        ),
        Err(Ok(contracts::coinswap::Error::DeadlineExpired))
    );
    assert_eq!(
        setup.coinswap.try_swap(
            &user,
            &setup.coin(NATIVE, 100),
            &setup.denom("btc"),
            &0,
            &deadline
        ),
        Err(Ok(contracts::coinswap::Error::DeadlineExpired))
    );
    assert_eq!(setup.balance(&user, "btc"), 10_000);
}

#[test]
fn test_create_pool_event() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    setup.fund(&user, "btc", 100);
    setup.fund(&user, NATIVE, 10);

    let pool_name = setup.coinswap.get_pool_name(&setup.denom("btc"));
    let pool = setup.coinswap.get_pool_address(&pool_name);
    let create_topics: Vec<Val> =
        (Symbol::new(e, "create_pool"), pool_name.clone()).into_val(e);
    let add_topics: Vec<Val> =
        (Symbol::new(e, "add_liquidity"), pool_name.clone(), user.clone()).into_val(e);

    setup.coinswap.add_liquidity(
        &user,
        &setup.coin("btc", 100),
        &10,
        &10,
        &setup.deadline(),
    );

    let mut created = false;
    let mut added = false;
    for (contract, topics, _) in e.events().all().iter() {
        if contract != setup.coinswap.address {
            continue;
        }
        created |= topics == create_topics;
        added |= topics == add_topics;
    }
    assert!(created && added);
    assert!(setup.ledger.account_exists(&pool));
}
