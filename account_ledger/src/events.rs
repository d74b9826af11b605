use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

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

    pub fn create_account(&self, module: Address, id: Address) {
        self.env().events().publish(
            (Symbol::new(self.env(), "create_account"), module, id),
            (),
        )
    }

    pub fn transfer(&self, from: Address, to: Address, denom: String, amount: i128) {
        self.env()
            .events()
            .publish((symbol_short!("transfer"), from, to, denom), amount)
    }

    pub fn mint(&self, module: Address, to: Address, denom: String, amount: i128) {
        self.env()
            .events()
            .publish((symbol_short!("mint"), module, to, denom), amount)
    }

    pub fn burn(&self, module: Address, from: Address, denom: String, amount: i128) {
        self.env()
            .events()
            .publish((symbol_short!("burn"), module, from, denom), amount)
    }
}
