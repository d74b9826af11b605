use crate::role::{Role, SymbolRepresentation};
use soroban_sdk::{Address, Env, Symbol, Vec};

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

    pub fn set_role_address(&self, role: Role, address: Address) {
        self.env().events().publish(
            (
                Symbol::new(self.env(), "set_role_address"),
                role.as_symbol(self.env()),
            ),
            (address,),
        )
    }

    pub fn set_role_addresses(&self, role: Role, addresses: Vec<Address>) {
        self.env().events().publish(
            (
                Symbol::new(self.env(), "set_role_addresses"),
                role.as_symbol(self.env()),
            ),
            (addresses,),
        )
    }
}
