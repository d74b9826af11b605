use soroban_sdk::{Env, Symbol};

#[derive(Clone)]
pub enum Role {
    // owner: sets parameters and registers modules
    Admin,
    // contracts allowed to manage escrow accounts, mint and burn
    Module,
}

impl Role {
    pub(crate) fn has_many_users(&self) -> bool {
        match self {
            Role::Admin => false,
            Role::Module => true,
        }
    }
}

pub trait SymbolRepresentation {
    fn as_symbol(&self, e: &Env) -> Symbol;
}

impl SymbolRepresentation for Role {
    fn as_symbol(&self, e: &Env) -> Symbol {
        match self {
            Role::Admin => Symbol::new(e, "Admin"),
            Role::Module => Symbol::new(e, "Module"),
        }
    }
}
