// Library root
// -----------
// The `traders` binary (`main.rs`) parses arguments and hands off to the
// command handlers exposed here.
//
// Module responsibilities:
// - `api`: blocking HTTP client for the SpaceTraders REST API.
// - `models`: response/request shapes and the waypoint symbol split.
// - `store`: config and token files under the data directory.
// - `config`: per-invocation settings (data dir, API base URL).
// - `commands`: one handler per CLI command.
// - `ui`: terminal output, spinner and prompts.
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod ui;

pub use error::{Error, Result};
