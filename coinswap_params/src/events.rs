use interfaces::Fee;
use soroban_sdk::{Env, String, Symbol};

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

    pub fn set_params(&self, fee: Fee, native_denom: String) {
        self.env().events().publish(
            (Symbol::new(self.env(), "set_params"),),
            (fee.numerator, fee.denominator, native_denom),
        )
    }
}
