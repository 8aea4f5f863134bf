// `traders init`: register a new agent and make it the active account.

use super::Context;
use crate::error::{Error, Result};
use crate::models::RegisterRequest;
use crate::store::validate_symbol;
use crate::ui;

pub const DEFAULT_FACTION: &str = "COSMIC";

/// Register `symbol` with `faction`, store its token and activate it.
/// Refuses to touch an account that already has a token.
pub fn run(ctx: &Context, symbol: &str, faction: &str) -> Result<()> {
    validate_symbol(symbol)?;
    if ctx.store.has_token(symbol) {
        return Err(Error::AccountExists(symbol.to_string()));
    }
    ctx.store.ensure_dir()?;

    let api = ctx.client()?;
    let req = RegisterRequest {
        symbol: symbol.to_string(),
        faction: faction.to_string(),
    };
    let resp = ui::with_spinner("Registering...", || api.register(&req))?;

    ctx.store.write_token(symbol, &resp.token)?;
    ctx.store.set_active(symbol)?;

    println!(
        "Successfully initialized account {} (headquarters {})",
        resp.agent.symbol, resp.agent.headquarters
    );
    Ok(())
}
