use soroban_sdk::{Address, Env, String, Symbol};

#[derive(Clone)]
pub struct Events(Env);

impl Events {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> Events {
        Events(env.clone())
    }

    pub fn create_pool(&self, pool_name: String, pool: Address) {
        // topics ["create_pool", pool_name], body [pool_account]
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "create_pool"), pool_name), (pool,))
    }

    pub fn add_liquidity(
        &self,
        pool_name: String,
        depositor: Address,
        asset_amount: u128,
        native_amount: u128,
        shares: u128,
    ) {
        // topics ["add_liquidity", pool_name, depositor]
        // body [shares_minted, asset_amount, native_amount]
        self.env().events().publish(
            (Symbol::new(self.env(), "add_liquidity"), pool_name, depositor),
            (shares, asset_amount, native_amount),
        )
    }

    pub fn remove_liquidity(
        &self,
        pool_name: String,
        withdrawer: Address,
        asset_amount: u128,
        native_amount: u128,
        shares: u128,
    ) {
        self.env().events().publish(
            (
                Symbol::new(self.env(), "remove_liquidity"),
                pool_name,
                withdrawer,
            ),
            (shares, asset_amount, native_amount),
        )
    }

    pub fn trade(
        &self,
        pool_name: String,
        sender: Address,
        in_denom: String,
        out_denom: String,
        in_amount: u128,
        out_amount: u128,
        fee_amount: u128,
    ) {
        // one event per pool the trade went through
        self.env().events().publish(
            (Symbol::new(self.env(), "trade"), pool_name, sender),
            (in_denom, out_denom, in_amount, out_amount, fee_amount),
        )
    }
}
