// `traders accounts`: list stored accounts.

use super::Context;
use crate::error::Result;
use crate::ui;
use serde::Serialize;

#[derive(Serialize, Debug)]
struct AccountsView<'a> {
    active: Option<&'a str>,
    accounts: &'a [String],
}

pub fn run(ctx: &Context) -> Result<()> {
    let accounts = ctx.store.accounts()?;
    let active = ctx.store.active_symbol().ok();
    if ctx.json {
        return ui::print_json(&AccountsView {
            active: active.as_deref(),
            accounts: &accounts,
        });
    }
    ui::print_accounts(&accounts, active.as_deref());
    Ok(())
}
