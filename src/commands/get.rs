// `traders get ...`: read-only views of the active agent's world.

use super::Context;
use crate::error::Result;
use crate::models::system_of_waypoint;
use crate::ui;

pub fn agent(ctx: &Context) -> Result<()> {
    let Some(api) = ctx.authed_client()? else {
        return Ok(());
    };
    let agent = ui::with_spinner("Fetching agent...", || api.my_agent())?;
    if ctx.json {
        return ui::print_json(&agent);
    }
    ui::print_agent(&agent);
    Ok(())
}

pub fn contracts(ctx: &Context) -> Result<()> {
    let Some(api) = ctx.authed_client()? else {
        return Ok(());
    };
    let contracts = ui::with_spinner("Fetching contracts...", || api.my_contracts())?;
    if ctx.json {
        return ui::print_json(&contracts);
    }
    ui::print_contracts(&contracts);
    Ok(())
}

/// Look up the agent's headquarters, then fetch that waypoint.
pub fn headquarters(ctx: &Context) -> Result<()> {
    let Some(api) = ctx.authed_client()? else {
        return Ok(());
    };
    let waypoint = ui::with_spinner("Fetching headquarters...", || {
        let agent = api.my_agent()?;
        let system = system_of_waypoint(&agent.headquarters)?;
        api.waypoint(system, &agent.headquarters)
    })?;
    if ctx.json {
        return ui::print_json(&waypoint);
    }
    ui::print_waypoint(&waypoint);
    Ok(())
}

/// Fetch `symbol`, or the headquarters system when none is given.
pub fn system(ctx: &Context, symbol: Option<&str>) -> Result<()> {
    let Some(api) = ctx.authed_client()? else {
        return Ok(());
    };
    let system = ui::with_spinner("Fetching system...", || {
        let symbol = match symbol {
            Some(s) => s.to_string(),
            None => {
                let agent = api.my_agent()?;
                system_of_waypoint(&agent.headquarters)?.to_string()
            }
        };
        api.system(&symbol)
    })?;
    if ctx.json {
        return ui::print_json(&system);
    }
    ui::print_system(&system);
    Ok(())
}
