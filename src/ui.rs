// UI layer: terminal output for API results, a spinner around requests,
// and the interactive prompts used when a required value is missing.

use crate::error::{Error, Result};
use crate::models::{Agent, Contract, System, Waypoint};
use crossterm::style::Stylize;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::IsTerminal;
use std::time::Duration;

/// Run `f` while a spinner with `msg` is shown on stderr. The spinner is
/// hidden automatically when stderr is not a terminal.
pub fn with_spinner<T>(msg: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    let out = f();
    spinner.finish_and_clear();
    out
}

/// Whether we can ask the user for missing input.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

pub fn prompt_symbol() -> Result<String> {
    Input::<String>::new()
        .with_prompt("Agent symbol")
        .interact_text()
        .map_err(|e| Error::Prompt(e.to_string()))
}

/// Let the user pick one of `accounts`, preselecting the active one.
pub fn select_account(accounts: &[String], active: Option<&str>) -> Result<String> {
    let default = active
        .and_then(|a| accounts.iter().position(|s| s == a))
        .unwrap_or(0);
    let idx = Select::new()
        .with_prompt("Account")
        .items(accounts)
        .default(default)
        .interact()
        .map_err(|e| Error::Prompt(e.to_string()))?;
    Ok(accounts[idx].clone())
}

fn field(label: &str, value: impl std::fmt::Display) {
    println!("{}: {}", label.bold(), value);
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_agent(agent: &Agent) {
    field("Account Id", opt(&agent.account_id));
    field("Symbol", &agent.symbol);
    field("Headquarters", &agent.headquarters);
    field("Credits", agent.credits);
    field("Starting Faction", &agent.starting_faction);
    field("Ships", agent.ship_count);
}

pub fn print_contracts(contracts: &[Contract]) {
    println!("{}", "Contracts:".bold());
    if contracts.is_empty() {
        println!("(none)");
    }
    for (idx, c) in contracts.iter().enumerate() {
        println!("({}) ---------", idx + 1);
        field("Id", &c.id);
        field("Faction Symbol", &c.faction_symbol);
        field("Type", &c.kind);
        field("Accepted", c.accepted);
        field("Fulfilled", c.fulfilled);
        field("Expiration", opt(&c.expiration));
        field("Deadline To Accept", opt(&c.deadline_to_accept));
        field("Deadline", &c.terms.deadline);
        field(
            "Payment",
            format!(
                "{} on accept, {} on fulfil",
                c.terms.payment.on_accepted, c.terms.payment.on_fulfilled
            ),
        );
        for d in &c.terms.deliver {
            println!(
                "  deliver {} {}/{} to {}",
                d.trade_symbol, d.units_fulfilled, d.units_required, d.destination_symbol
            );
        }
    }
}

pub fn print_waypoint(wp: &Waypoint) {
    field("Symbol", &wp.symbol);
    field("System", &wp.system_symbol);
    field("Type", &wp.kind);
    field("X", wp.x);
    field("Y", wp.y);
    if !wp.traits.is_empty() {
        let names: Vec<&str> = wp.traits.iter().map(|t| t.name.as_str()).collect();
        field("Traits", names.join(", "));
    }
    if !wp.orbitals.is_empty() {
        let symbols: Vec<&str> = wp.orbitals.iter().map(|o| o.symbol.as_str()).collect();
        field("Orbitals", symbols.join(", "));
    }
}

pub fn print_system(system: &System) {
    field("Symbol", &system.symbol);
    field("Sector", &system.sector_symbol);
    field("Type", &system.kind);
    field("X", system.x);
    field("Y", system.y);
    field("Waypoints", system.waypoints.len());
    for wp in &system.waypoints {
        println!("  {} {} ({}, {})", wp.symbol, wp.kind.as_str().dark_grey(), wp.x, wp.y);
    }
}

pub fn print_accounts(accounts: &[String], active: Option<&str>) {
    if accounts.is_empty() {
        println!("No accounts. Create one with `traders init --symbol <SYMBOL>`.");
        return;
    }
    for symbol in accounts {
        if Some(symbol.as_str()) == active {
            println!("* {}", symbol.as_str().bold());
        } else {
            println!("  {}", symbol);
        }
    }
}
