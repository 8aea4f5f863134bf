// `traders activate`: switch the account used for API calls.

use super::Context;
use crate::error::{Error, Result};
use crate::store::validate_symbol;

pub fn run(ctx: &Context, symbol: &str) -> Result<()> {
    validate_symbol(symbol)?;
    if !ctx.store.has_token(symbol) {
        return Err(Error::UnknownAccount(symbol.to_string()));
    }
    ctx.store.set_active(symbol)?;
    println!("Active account is now {}", symbol);
    Ok(())
}
