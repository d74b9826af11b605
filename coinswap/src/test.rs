#![cfg(test)]
extern crate std;

use crate::errors::CoinswapError;
use crate::testutils::Setup;
use coinswap_params::testutils::NATIVE_DENOM;
use interfaces::Coin;
use soroban_sdk::testutils::{AuthorizedFunction, MockAuth, MockAuthInvoke};
use soroban_sdk::{map, IntoVal, String, Symbol};
use utils::test_utils::jump;

#[test]
fn test_pool_name() {
    let setup = Setup::default();
    let e = &setup.env;

    assert_eq!(
        setup.coinswap.get_pool_name(&setup.denom("btc")),
        String::from_str(e, "swap:btc:iris-atto")
    );
    assert_eq!(
        setup.coinswap.try_get_pool_name(&setup.native()),
        Err(Ok(CoinswapError::InvalidDenom))
    );
    assert_eq!(
        setup.coinswap.try_get_pool_name(&setup.denom("bad:denom")),
        Err(Ok(CoinswapError::InvalidDenom))
    );
    assert_eq!(
        setup.coinswap.try_get_pool_name(&setup.denom("")),
        Err(Ok(CoinswapError::InvalidDenom))
    );

    for bad_name in [
        "",
        "swap:btc",
        "swap:btc:uatom",
        "swop:btc:iris-atto",
        "swap:btc:iris-atto:eth",
        "swap:iris-atto:iris-atto",
    ] {
        assert_eq!(
            setup.coinswap.try_get_reserve_pool(&setup.denom(bad_name)),
            Err(Ok(CoinswapError::InvalidPoolName))
        );
    }
}

#[test]
fn test_pool_address() {
    let setup = Setup::default();

    let btc_pool = setup.coinswap.get_pool_address(&setup.pool_name("btc"));
    let eth_pool = setup.coinswap.get_pool_address(&setup.pool_name("eth"));
    assert_ne!(btc_pool, eth_pool);
    assert_ne!(btc_pool, setup.coinswap.address);
    assert_eq!(
        setup.coinswap.get_pool_address(&setup.pool_name("btc")),
        btc_pool
    );
    assert_eq!(
        setup.coinswap.try_get_pool_address(&setup.denom("")),
        Err(Ok(CoinswapError::InvalidPoolName))
    );
}

#[test]
fn test_get_reserve_pool_not_found() {
    let setup = Setup::default();
    let pool_name = setup.pool_name("btc");
    let pool = setup.coinswap.get_pool_address(&pool_name);

    let (reserves, found) = setup.coinswap.get_reserve_pool(&pool_name);
    assert!(!found);
    assert!(reserves.is_empty());
    // lookups never create the pool
    let (_, found) = setup.coinswap.get_reserve_pool(&pool_name);
    assert!(!found);
    assert!(!setup.ledger.account_exists(&pool));
}

#[test]
fn test_create_reserve_pool() {
    let setup = Setup::default();
    let pool_name = setup.pool_name("btc");

    let pool = setup.coinswap.create_reserve_pool(&pool_name);
    assert_eq!(pool, setup.coinswap.get_pool_address(&pool_name));
    assert!(setup.ledger.account_exists(&pool));

    // an existing pool with nothing in it is still found
    let (reserves, found) = setup.coinswap.get_reserve_pool(&pool_name);
    assert!(found);
    assert!(reserves.is_empty());
}

#[test]
#[should_panic(expected = "Error(Contract, #201)")]
fn test_create_reserve_pool_twice() {
    let setup = Setup::default();
    let pool_name = setup.pool_name("btc");

    setup.coinswap.create_reserve_pool(&pool_name);
    setup.coinswap.create_reserve_pool(&pool_name);
}

#[test]
fn test_prefunded_pool_address() {
    let setup = Setup::default();
    let e = &setup.env;
    let provider = &setup.users[0];
    let donor = &setup.users[1];
    let pool_name = setup.pool_name("btc");
    let pool = setup.coinswap.get_pool_address(&pool_name);

    // a plain transfer reaches the pool address before the pool exists
    setup.fund(donor, NATIVE_DENOM, 1);
    setup.ledger.transfer(donor, &pool, &1, &setup.native());
    assert!(setup.ledger.account_exists(&pool));
    let (_, found) = setup.coinswap.get_reserve_pool(&pool_name);
    assert!(!found);

    // the first deposit takes over the address together with the donation
    setup.seed_pool(provider, "btc", 100, 10);
    assert_eq!(
        setup.ledger.account_manager(&pool),
        Some(setup.coinswap.address.clone())
    );
    assert_eq!(setup.pool_reserves("btc"), (100, 11, 10));

    // only the provider signs the withdrawal
    let deadline = setup.deadline();
    e.mock_auths(&[MockAuth {
        address: provider,
        invoke: &MockAuthInvoke {
            contract: &setup.coinswap.address,
            fn_name: "remove_liquidity",
            args: (
                provider.clone(),
                Coin::new(e, "btc", 0),
                0_u128,
                10_u128,
                deadline,
            )
                .into_val(e),
            sub_invokes: &[],
        },
    }]);
    let withdrawn =
        setup
            .coinswap
            .remove_liquidity(provider, &Coin::new(e, "btc", 0), &0, &10, &deadline);
    assert_eq!(withdrawn, (100, 11));
    assert_eq!(setup.balance(provider, "btc"), 100);
    assert_eq!(setup.balance(provider, NATIVE_DENOM), 11);
}

#[test]
fn test_liquidity() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[0];
    let btc = setup.denom("btc");
    let native = setup.native();
    let pool_name = setup.pool_name("btc");
    setup.fund(user, "btc", 1000);
    setup.fund(user, NATIVE_DENOM, 1000);

    let deposit = Coin::new(e, "btc", 100);
    let shares = setup
        .coinswap
        .add_liquidity(user, &deposit, &10, &10, &setup.deadline());
    assert_eq!(shares, 10);
    assert_eq!(e.auths()[0].0, user.clone());
    assert_eq!(
        e.auths()[0].1.function,
        AuthorizedFunction::Contract((
            setup.coinswap.address.clone(),
            Symbol::new(e, "add_liquidity"),
            (user, deposit.clone(), 10_u128, 10_u128, setup.deadline()).into_val(e),
        ))
    );

    let (reserves, found) = setup.coinswap.get_reserve_pool(&pool_name);
    assert!(found);
    assert_eq!(
        reserves,
        map![
            e,
            (btc.clone(), 100_i128),
            (native.clone(), 10_i128),
            (pool_name.clone(), 10_i128)
        ]
    );
    assert_eq!(setup.balance(user, "btc"), 900);
    assert_eq!(setup.balance(user, NATIVE_DENOM), 990);
    assert_eq!(setup.ledger.balance(user, &pool_name), 10);

    // same deposit against the 100:10 pool
    let shares = setup
        .coinswap
        .add_liquidity(user, &deposit, &10, &10, &setup.deadline());
    assert_eq!(shares, 10);
    assert_eq!(setup.pool_reserves("btc"), (200, 20, 20));
    assert_eq!(setup.balance(user, "btc"), 800);
    assert_eq!(setup.balance(user, NATIVE_DENOM), 980);
    assert_eq!(setup.ledger.balance(user, &pool_name), 20);

    let withdrawn = setup.coinswap.remove_liquidity(
        user,
        &Coin::new(e, "btc", 100),
        &10,
        &10,
        &setup.deadline(),
    );
    assert_eq!(withdrawn, (100, 10));
    assert_eq!(setup.pool_reserves("btc"), (100, 10, 10));
    assert_eq!(setup.balance(user, "btc"), 900);
    assert_eq!(setup.balance(user, NATIVE_DENOM), 990);
    assert_eq!(setup.ledger.balance(user, &pool_name), 10);
}

#[test]
fn test_add_liquidity_max_native_exceeded() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[0];
    setup.seed_pool(&setup.users[1], "btc", 100, 10);
    setup.fund(user, "btc", 1000);
    setup.fund(user, NATIVE_DENOM, 1000);

    assert_eq!(
        setup.coinswap.try_add_liquidity(
            user,
            &Coin::new(e, "btc", 100),
            &9,
            &0,
            &setup.deadline()
        ),
        Err(Ok(CoinswapError::InMaxNotSatisfied))
    );
    assert_eq!(setup.balance(user, "btc"), 1000);
    assert_eq!(setup.balance(user, NATIVE_DENOM), 1000);
    assert_eq!(setup.pool_reserves("btc"), (100, 10, 10));
}

#[test]
fn test_add_liquidity_min_shares() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[0];
    setup.fund(user, "btc", 1000);
    setup.fund(user, NATIVE_DENOM, 1000);

    assert_eq!(
        setup.coinswap.try_add_liquidity(
            user,
            &Coin::new(e, "btc", 100),
            &10,
            &11,
            &setup.deadline()
        ),
        Err(Ok(CoinswapError::OutMinNotSatisfied))
    );
    // a rejected first deposit doesn't leave a pool behind
    let (_, found) = setup.coinswap.get_reserve_pool(&setup.pool_name("btc"));
    assert!(!found);
    assert_eq!(setup.balance(user, "btc"), 1000);
}

#[test]
fn test_empty_pool_requires_both_amounts() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[0];
    setup.fund(user, "btc", 1000);
    setup.fund(user, NATIVE_DENOM, 1000);

    assert_eq!(
        setup.coinswap.try_add_liquidity(
            user,
            &Coin::new(e, "btc", 100),
            &0,
            &0,
            &setup.deadline()
        ),
        Err(Ok(CoinswapError::ZeroAmount))
    );
    assert_eq!(
        setup.coinswap.try_add_liquidity(
            user,
            &Coin::new(e, "btc", 0),
            &10,
            &0,
            &setup.deadline()
        ),
        Err(Ok(CoinswapError::ZeroAmount))
    );
}

#[test]
fn test_add_liquidity_insufficient_balance() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[0];
    setup.fund(user, "btc", 50);
    setup.fund(user, NATIVE_DENOM, 1000);

    assert_eq!(
        setup.coinswap.try_add_liquidity(
            user,
            &Coin::new(e, "btc", 100),
            &10,
            &10,
            &setup.deadline()
        ),
        Err(Ok(CoinswapError::InsufficientBalance))
    );
    assert_eq!(
        setup.coinswap.try_add_liquidity(
            user,
            &Coin::new(e, "btc", 50),
            &1001,
            &0,
            &setup.deadline()
        ),
        Err(Ok(CoinswapError::InsufficientBalance))
    );
    assert_eq!(setup.balance(user, "btc"), 50);
    assert_eq!(setup.balance(user, NATIVE_DENOM), 1000);
}

#[test]
fn test_deadline() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[0];
    setup.fund(user, "btc", 1000);
    setup.fund(user, NATIVE_DENOM, 1000);

    let deadline = setup.deadline();
    jump(e, 61);
    assert_eq!(
        setup.coinswap.try_add_liquidity(
            user,
            &Coin::new(e, "btc", 100),
            &10,
            &10,
            &deadline
        ),
        Err(Ok(CoinswapError::DeadlineExpired))
    );

    // the deadline itself is still in time
    let now = e.ledger().timestamp();
    setup
        .coinswap
        .add_liquidity(user, &Coin::new(e, "btc", 100), &10, &10, &now);

    jump(e, 1);
    assert_eq!(
        setup.coinswap.try_remove_liquidity(
            user,
            &Coin::new(e, "btc", 0),
            &0,
            &10,
            &now
        ),
        Err(Ok(CoinswapError::DeadlineExpired))
    );
    assert_eq!(setup.pool_reserves("btc"), (100, 10, 10));
}

#[test]
fn test_rounding_favours_pool() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[0];
    setup.seed_pool(&setup.users[1], "btc", 3, 2);
    setup.fund(user, "btc", 1000);
    setup.fund(user, NATIVE_DENOM, 1000);

    // native floor(2 * 2 / 3) = 1, shares min(floor(2 * 2 / 3), floor(1 * 2 / 2)) = 1
    let shares = setup.coinswap.add_liquidity(
        user,
        &Coin::new(e, "btc", 2),
        &1000,
        &0,
        &setup.deadline(),
    );
    assert_eq!(shares, 1);
    assert_eq!(setup.pool_reserves("btc"), (5, 3, 3));
    assert_eq!(setup.balance(user, NATIVE_DENOM), 999);

    // too small to be worth a single share
    assert_eq!(
        setup.coinswap.try_add_liquidity(
            user,
            &Coin::new(e, "btc", 1),
            &1000,
            &0,
            &setup.deadline()
        ),
        Err(Ok(CoinswapError::ZeroAmount))
    );

    // floor(1 * 5 / 3) = 1 asset, floor(1 * 3 / 3) = 1 native
    let withdrawn = setup.coinswap.remove_liquidity(
        user,
        &Coin::new(e, "btc", 0),
        &0,
        &1,
        &setup.deadline(),
    );
    assert_eq!(withdrawn, (1, 1));
    assert_eq!(setup.pool_reserves("btc"), (4, 2, 2));
}

#[test]
fn test_remove_liquidity_min_not_satisfied() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[0];
    setup.seed_pool(user, "btc", 100, 10);

    assert_eq!(
        setup.coinswap.try_remove_liquidity(
            user,
            &Coin::new(e, "btc", 51),
            &0,
            &5,
            &setup.deadline()
        ),
        Err(Ok(CoinswapError::OutMinNotSatisfied))
    );
    assert_eq!(
        setup.coinswap.try_remove_liquidity(
            user,
            &Coin::new(e, "btc", 0),
            &6,
            &5,
            &setup.deadline()
        ),
        Err(Ok(CoinswapError::OutMinNotSatisfied))
    );
    assert_eq!(setup.pool_reserves("btc"), (100, 10, 10));
    assert_eq!(setup.ledger.balance(user, &setup.pool_name("btc")), 10);
}

#[test]
fn test_remove_liquidity_insufficient_shares() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[0];
    let stranger = &setup.users[1];
    setup.seed_pool(user, "btc", 100, 10);

    assert_eq!(
        setup.coinswap.try_remove_liquidity(
            stranger,
            &Coin::new(e, "btc", 0),
            &0,
            &1,
            &setup.deadline()
        ),
        Err(Ok(CoinswapError::InsufficientBalance))
    );
    assert_eq!(
        setup.coinswap.try_remove_liquidity(
            user,
            &Coin::new(e, "btc", 0),
            &0,
            &11,
            &setup.deadline()
        ),
        Err(Ok(CoinswapError::InsufficientBalance))
    );
    assert_eq!(
        setup.coinswap.try_remove_liquidity(
            user,
            &Coin::new(e, "btc", 0),
            &0,
            &0,
            &setup.deadline()
        ),
        Err(Ok(CoinswapError::ZeroAmount))
    );
    assert_eq!(
        setup.coinswap.try_remove_liquidity(
            user,
            &Coin::new(e, "eth", 0),
            &0,
            &1,
            &setup.deadline()
        ),
        Err(Ok(CoinswapError::PoolNotFound))
    );
}

#[test]
fn test_withdraw_all_and_reseed() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[0];
    let pool_name = setup.pool_name("btc");
    setup.seed_pool(user, "btc", 100, 10);

    let withdrawn = setup.coinswap.remove_liquidity(
        user,
        &Coin::new(e, "btc", 100),
        &10,
        &10,
        &setup.deadline(),
    );
    assert_eq!(withdrawn, (100, 10));
    let (reserves, found) = setup.coinswap.get_reserve_pool(&pool_name);
    assert!(found);
    assert!(reserves.is_empty());

    // an emptied pool is seeded again at a new rate
    setup.fund(user, NATIVE_DENOM, 10);
    let shares = setup.coinswap.add_liquidity(
        user,
        &Coin::new(e, "btc", 50),
        &20,
        &20,
        &setup.deadline(),
    );
    assert_eq!(shares, 20);
    assert_eq!(setup.pool_reserves("btc"), (50, 20, 20));
}

#[test]
fn test_deposit_withdraw_keeps_ratio() {
    let setup = Setup::default();
    let e = &setup.env;
    let provider = &setup.users[0];
    let user = &setup.users[1];
    setup.seed_pool(provider, "btc", 7_000, 3_000);
    setup.fund(user, "btc", 1_000_000);
    setup.fund(user, NATIVE_DENOM, 1_000_000);

    for amount in [70_u128, 700, 7_001, 123_457] {
        let before = setup.pool_reserves("btc");
        let shares = setup.coinswap.add_liquidity(
            user,
            &Coin::new(e, "btc", amount),
            &1_000_000,
            &1,
            &setup.deadline(),
        );
        setup.coinswap.remove_liquidity(
            user,
            &Coin::new(e, "btc", 0),
            &0,
            &shares,
            &setup.deadline(),
        );
        let after = setup.pool_reserves("btc");

        // the pool never ends up poorer, and the ratio is back where it was
        assert!(after.0 >= before.0 && after.1 >= before.1);
        assert_eq!(after.2, before.2);
        if after.0 == before.0 {
            assert_eq!(after.1, before.1);
        }
    }
    assert_eq!(setup.ledger.balance(user, &setup.pool_name("btc")), 0);
}

#[test]
fn test_no_free_shares() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[0];
    setup.seed_pool(user, "btc", 1_000, 100);

    let (asset, native, shares) = setup.pool_reserves("btc");
    assert!(asset > 0 && native > 0 && shares > 0);

    setup.coinswap.remove_liquidity(
        user,
        &Coin::new(e, "btc", 0),
        &0,
        &100,
        &setup.deadline(),
    );
    assert_eq!(setup.pool_reserves("btc"), (0, 0, 0));
    assert_eq!(setup.ledger.balance(user, &setup.pool_name("btc")), 0);
    assert_eq!(setup.ledger.supply(&setup.pool_name("btc")), 0);
}
