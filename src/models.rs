// Subset of the SpaceTraders v2 schema that this client reads or prints.
// Unknown fields are ignored and most optional ones default, so the
// upstream API can grow without breaking decoding.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Every API response wraps its payload in `{"data": ...}`.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    pub data: T,
}

/// Payload for `POST /register`.
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub symbol: String,
    pub faction: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    pub token: String,
    pub agent: Agent,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(default)]
    pub account_id: Option<String>,
    pub symbol: String,
    pub headquarters: String,
    pub credits: i64,
    #[serde(default)]
    pub starting_faction: String,
    #[serde(default)]
    pub ship_count: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub faction_symbol: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub terms: ContractTerms,
    pub accepted: bool,
    pub fulfilled: bool,
    #[serde(default)]
    pub expiration: Option<String>,
    #[serde(default)]
    pub deadline_to_accept: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContractTerms {
    pub deadline: String,
    pub payment: ContractPayment,
    #[serde(default)]
    pub deliver: Vec<ContractDeliverGood>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContractPayment {
    pub on_accepted: i64,
    pub on_fulfilled: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContractDeliverGood {
    pub trade_symbol: String,
    pub destination_symbol: String,
    pub units_required: u32,
    pub units_fulfilled: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub symbol: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub system_symbol: String,
    pub x: i64,
    pub y: i64,
    #[serde(default)]
    pub orbitals: Vec<SymbolRef>,
    #[serde(default)]
    pub traits: Vec<WaypointTrait>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SymbolRef {
    pub symbol: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WaypointTrait {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct System {
    pub symbol: String,
    pub sector_symbol: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: i64,
    pub y: i64,
    #[serde(default)]
    pub waypoints: Vec<SystemWaypoint>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SystemWaypoint {
    pub symbol: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: i64,
    pub y: i64,
}

/// Split a waypoint symbol such as `X1-DF55-20250Z` at its last hyphen,
/// returning the system symbol (`X1-DF55`).
pub fn system_of_waypoint(waypoint: &str) -> Result<&str> {
    match waypoint.rfind('-') {
        Some(idx) if idx > 0 && idx + 1 < waypoint.len() => Ok(&waypoint[..idx]),
        _ => Err(Error::InvalidWaypoint(waypoint.to_string())),
    }
}
