use soroban_sdk::String;

pub const MAX_DENOM_LEN: usize = 64;

// Denominations are ascii alphanumerics plus `-`, `.`, `_` and `/`.
// `:` is reserved as the pool name separator.
pub fn is_valid_denom(denom: &String) -> bool {
    let len = denom.len() as usize;
    if len == 0 || len > MAX_DENOM_LEN {
        return false;
    }

    let mut buf = [0u8; MAX_DENOM_LEN];
    denom.copy_into_slice(&mut buf[..len]);
    is_valid_denom_bytes(&buf[..len])
}

pub fn is_valid_denom_bytes(denom: &[u8]) -> bool {
    !denom.is_empty() && denom.len() <= MAX_DENOM_LEN && denom.iter().all(|&c| is_denom_char(c))
}

pub fn is_denom_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'-' | b'.' | b'_' | b'/')
}
