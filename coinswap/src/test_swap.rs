#![cfg(test)]
extern crate std;

use crate::errors::CoinswapError;
use crate::swap::{check_invariant, fee_amount, get_amount_in, get_amount_out};
use crate::testutils::Setup;
use coinswap_params::testutils::NATIVE_DENOM;
use interfaces::{Coin, Fee};
use soroban_sdk::Env;
use utils::test_utils::jump;

#[test]
fn test_amount_out() {
    let e = Env::default();
    let fee = Fee::default_fee();

    // 10000 * 100 * 997 / (10000 * 1000 + 100 * 997)
    assert_eq!(get_amount_out(&e, 100, 10_000, 10_000, &fee), Ok(98));
    assert_eq!(get_amount_out(&e, 1, 10_000, 10_000, &fee), Ok(0));
    assert_eq!(
        get_amount_out(&e, 100, 0, 10_000, &fee),
        Err(CoinswapError::EmptyReserve)
    );
    assert_eq!(
        get_amount_out(&e, 100, 10_000, 0, &fee),
        Err(CoinswapError::EmptyReserve)
    );
    assert_eq!(
        get_amount_out(&e, 0, 10_000, 10_000, &fee),
        Err(CoinswapError::ZeroAmount)
    );
    assert_eq!(
        get_amount_out(&e, 1 << 100, 1 << 100, 1 << 100, &fee).map(|out| out < 1 << 99),
        Ok(true)
    );
}

#[test]
fn test_amount_in() {
    let e = Env::default();
    let fee = Fee::default_fee();

    // ceil(ceil(10000 * 98 / 9902) * 1000 / 997)
    assert_eq!(get_amount_in(&e, 98, 10_000, 10_000, &fee), Ok(100));
    assert_eq!(
        get_amount_in(&e, 10_000, 10_000, 10_000, &fee),
        Err(CoinswapError::InsufficientLiquidity)
    );
    assert_eq!(
        get_amount_in(&e, 1, 10_000, 0, &fee),
        Err(CoinswapError::EmptyReserve)
    );
    assert_eq!(fee_amount(&e, 100, &fee), 1);
    assert_eq!(fee_amount(&e, 1000, &fee), 3);
}

#[test]
fn test_invariant_holds_for_priced_amounts() {
    let e = Env::default();
    let fee = Fee::new(1, 100);

    for (in_amount, in_reserve, out_reserve) in [
        (1_u128, 7_u128, 13_u128),
        (500, 1_000, 1_000),
        (999_999, 1_000_000, 3),
        (12_345, 67_890, 1_000_000_000),
    ] {
        let out = get_amount_out(&e, in_amount, in_reserve, out_reserve, &fee).unwrap();
        check_invariant(&e, in_amount, out, in_reserve, out_reserve, &fee);

        if out > 0 {
            let needed = get_amount_in(&e, out, in_reserve, out_reserve, &fee).unwrap();
            assert!(needed <= in_amount + 2);
            check_invariant(&e, needed, out, in_reserve, out_reserve, &fee);
        }
    }
}

#[test]
#[should_panic(expected = "Error(Contract, #202)")]
fn test_invariant_violation() {
    let e = Env::default();
    check_invariant(&e, 100, 99, 10_000, 10_000, &Fee::default_fee());
}

#[test]
#[should_panic(expected = "Error(Contract, #203)")]
fn test_fee_out_of_bounds() {
    let e = Env::default();
    get_amount_out(&e, 100, 10_000, 10_000, &Fee::new(1000, 1000)).unwrap();
}

#[test]
fn test_swap() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[1];
    setup.seed_pool(&setup.users[0], "btc", 10_000, 10_000);
    setup.fund(user, NATIVE_DENOM, 1000);

    let input = Coin::new(e, NATIVE_DENOM, 100);
    assert_eq!(setup.coinswap.estimate_swap(&input, &setup.denom("btc")), 98);
    let out = setup
        .coinswap
        .swap(user, &input, &setup.denom("btc"), &98, &setup.deadline());
    assert_eq!(out, 98);
    assert_eq!(setup.balance(user, NATIVE_DENOM), 900);
    assert_eq!(setup.balance(user, "btc"), 98);
    assert_eq!(setup.pool_reserves("btc"), (9_902, 10_100, 10_000));

    // and back
    let out = setup.coinswap.swap(
        user,
        &Coin::new(e, "btc", 98),
        &setup.native(),
        &0,
        &setup.deadline(),
    );
    assert!(out < 100);
    assert_eq!(setup.balance(user, "btc"), 0);
    assert_eq!(setup.balance(user, NATIVE_DENOM), 900 + out as i128);
}

#[test]
fn test_swap_out_min_not_satisfied() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[1];
    setup.seed_pool(&setup.users[0], "btc", 10_000, 10_000);
    setup.fund(user, NATIVE_DENOM, 1000);

    assert_eq!(
        setup.coinswap.try_swap(
            user,
            &Coin::new(e, NATIVE_DENOM, 100),
            &setup.denom("btc"),
            &99,
            &setup.deadline()
        ),
        Err(Ok(CoinswapError::OutMinNotSatisfied))
    );
    assert_eq!(setup.balance(user, NATIVE_DENOM), 1000);
    assert_eq!(setup.pool_reserves("btc"), (10_000, 10_000, 10_000));
}

#[test]
fn test_swap_strict_receive() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[1];
    setup.seed_pool(&setup.users[0], "btc", 10_000, 10_000);
    setup.fund(user, NATIVE_DENOM, 1000);

    let output = Coin::new(e, "btc", 98);
    assert_eq!(
        setup
            .coinswap
            .estimate_swap_strict_receive(&setup.native(), &output),
        100
    );
    assert_eq!(
        setup.coinswap.try_swap_strict_receive(
            user,
            &setup.native(),
            &output,
            &99,
            &setup.deadline()
        ),
        Err(Ok(CoinswapError::InMaxNotSatisfied))
    );

    let paid = setup.coinswap.swap_strict_receive(
        user,
        &setup.native(),
        &output,
        &100,
        &setup.deadline(),
    );
    assert_eq!(paid, 100);
    assert_eq!(setup.balance(user, NATIVE_DENOM), 900);
    assert_eq!(setup.balance(user, "btc"), 98);

    assert_eq!(
        setup.coinswap.try_estimate_swap_strict_receive(
            &setup.native(),
            &Coin::new(e, "btc", 9_902)
        ),
        Err(Ok(CoinswapError::InsufficientLiquidity))
    );
}

#[test]
fn test_swap_rejections() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[1];
    setup.seed_pool(&setup.users[0], "btc", 10_000, 10_000);
    setup.fund(user, NATIVE_DENOM, 10);

    let deadline = setup.deadline();
    let native_in = Coin::new(e, NATIVE_DENOM, 100);
    assert_eq!(
        setup
            .coinswap
            .try_swap(user, &native_in, &setup.native(), &0, &deadline),
        Err(Ok(CoinswapError::CannotSwapSameDenom))
    );
    assert_eq!(
        setup
            .coinswap
            .try_swap(user, &native_in, &setup.denom("eth"), &0, &deadline),
        Err(Ok(CoinswapError::PoolNotFound))
    );
    assert_eq!(
        setup
            .coinswap
            .try_swap(user, &native_in, &setup.denom("bad denom"), &0, &deadline),
        Err(Ok(CoinswapError::InvalidDenom))
    );
    assert_eq!(
        setup.coinswap.try_swap(
            user,
            &Coin::new(e, NATIVE_DENOM, 0),
            &setup.denom("btc"),
            &0,
            &deadline
        ),
        Err(Ok(CoinswapError::ZeroAmount))
    );
    assert_eq!(
        setup
            .coinswap
            .try_swap(user, &native_in, &setup.denom("btc"), &0, &deadline),
        Err(Ok(CoinswapError::InsufficientBalance))
    );

    jump(e, 61);
    assert_eq!(
        setup.coinswap.try_swap(
            user,
            &Coin::new(e, NATIVE_DENOM, 10),
            &setup.denom("btc"),
            &0,
            &deadline
        ),
        Err(Ok(CoinswapError::DeadlineExpired))
    );
    assert_eq!(setup.balance(user, NATIVE_DENOM), 10);
}

#[test]
fn test_swap_empty_reserve() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[1];
    setup.fund(user, NATIVE_DENOM, 1000);
    setup.coinswap.create_reserve_pool(&setup.pool_name("eth"));

    assert_eq!(
        setup.coinswap.try_swap(
            user,
            &Coin::new(e, NATIVE_DENOM, 100),
            &setup.denom("eth"),
            &0,
            &setup.deadline()
        ),
        Err(Ok(CoinswapError::EmptyReserve))
    );
    assert_eq!(setup.balance(user, NATIVE_DENOM), 1000);
}

#[test]
fn test_double_swap() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[1];
    setup.seed_pool(&setup.users[0], "btc", 10_000, 10_000);
    setup.seed_pool(&setup.users[0], "eth", 10_000, 10_000);
    setup.fund(user, "btc", 1000);

    let input = Coin::new(e, "btc", 100);
    assert_eq!(setup.coinswap.estimate_swap(&input, &setup.denom("eth")), 96);
    let out = setup
        .coinswap
        .swap(user, &input, &setup.denom("eth"), &96, &setup.deadline());
    assert_eq!(out, 96);

    // btc -> 98 native -> 96 eth, the fee is paid in both pools
    assert_eq!(setup.balance(user, "btc"), 900);
    assert_eq!(setup.balance(user, "eth"), 96);
    assert_eq!(setup.balance(user, NATIVE_DENOM), 0);
    assert_eq!(setup.pool_reserves("btc"), (10_100, 9_902, 10_000));
    assert_eq!(setup.pool_reserves("eth"), (9_904, 10_098, 10_000));
}

#[test]
fn test_double_swap_strict_receive() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[1];
    setup.seed_pool(&setup.users[0], "btc", 10_000, 10_000);
    setup.seed_pool(&setup.users[0], "eth", 10_000, 10_000);
    setup.fund(user, "btc", 1000);

    let output = Coin::new(e, "eth", 96);
    assert_eq!(
        setup
            .coinswap
            .estimate_swap_strict_receive(&setup.denom("btc"), &output),
        100
    );
    let paid = setup.coinswap.swap_strict_receive(
        user,
        &setup.denom("btc"),
        &output,
        &100,
        &setup.deadline(),
    );
    assert_eq!(paid, 100);
    assert_eq!(setup.balance(user, "btc"), 900);
    assert_eq!(setup.balance(user, "eth"), 96);
    assert_eq!(setup.pool_reserves("btc"), (10_100, 9_902, 10_000));
    assert_eq!(setup.pool_reserves("eth"), (9_904, 10_098, 10_000));
}

#[test]
fn test_reserves_product_never_decreases() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = &setup.users[1];
    setup.seed_pool(&setup.users[0], "btc", 1_000_000, 250_000);
    setup.fund(user, "btc", 10_000_000);
    setup.fund(user, NATIVE_DENOM, 10_000_000);

    let mut product = {
        let (asset, native, _) = setup.pool_reserves("btc");
        asset * native
    };
    for (i, amount) in [1_u128, 17, 4_000, 999_999, 3, 250_000, 77_777].iter().enumerate() {
        let (input, output) = if i % 2 == 0 {
            (Coin::new(e, "btc", *amount), setup.native())
        } else {
            (Coin::new(e, NATIVE_DENOM, *amount), setup.denom("btc"))
        };
        if setup
            .coinswap
            .try_swap(user, &input, &output, &0, &setup.deadline())
            .is_err()
        {
            continue;
        }

        let (asset, native, _) = setup.pool_reserves("btc");
        assert!(asset * native >= product);
        product = asset * native;
    }
}

#[test]
fn test_fee_is_read_on_every_swap() {
    let setup = Setup::default();
    let e = &setup.env;
    setup.seed_pool(&setup.users[0], "btc", 10_000, 10_000);

    let input = Coin::new(e, NATIVE_DENOM, 1_000);
    assert_eq!(setup.coinswap.get_fee(), Fee::default_fee());
    assert_eq!(setup.coinswap.estimate_swap(&input, &setup.denom("btc")), 906);

    setup.params.set_fee(&setup.admin, &Fee::new(1, 100));
    assert_eq!(setup.coinswap.get_fee(), Fee::new(1, 100));
    assert_eq!(setup.coinswap.estimate_swap(&input, &setup.denom("btc")), 900);
    assert_eq!(setup.coinswap.get_native_denom(), setup.native());
}
