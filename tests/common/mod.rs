//! Shared helpers for the end-to-end tests: a canned-response HTTP server
//! on localhost and a preconfigured `traders` command.

#![allow(dead_code)]

use assert_cmd::Command;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;

/// One request as seen by the stub server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

/// Serves fixed responses keyed by `"METHOD /path"`. Unknown routes get 404.
pub struct StubServer {
    pub url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubServer {
    pub fn start(routes: &[(&str, u16, &str)]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let routes: HashMap<String, (u16, String)> = routes
            .iter()
            .map(|(k, s, b)| (k.to_string(), (*s, b.to_string())))
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                handle(stream, &routes, &seen);
            }
        });

        StubServer {
            url: format!("http://{}/v2", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(
    stream: TcpStream,
    routes: &HashMap<String, (u16, String)>,
    seen: &Arc<Mutex<Vec<Recorded>>>,
) {
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).unwrap_or(0) == 0 {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    let mut authorization = None;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim().to_string();
            match name.to_ascii_lowercase().as_str() {
                "content-length" => content_length = value.parse().unwrap_or(0),
                "authorization" => authorization = Some(value),
                _ => {}
            }
        }
    }
    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).unwrap();

    seen.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        authorization,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let key = format!("{} {}", method, path);
    let (status, payload) = routes
        .get(&key)
        .cloned()
        .unwrap_or((404, r#"{"error":{"message":"not found"}}"#.to_string()));
    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        payload.len(),
        payload
    );
    let mut stream = stream;
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// `traders` pointed at `home` and `api_url`, isolated from the caller's env.
pub fn traders(home: &Path, api_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("traders").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("SPACETRADERS_HOME", home)
        .env("SPACETRADERS_API_URL", api_url);
    cmd
}

pub const AGENT: &str = r#"{"data":{"accountId":"acc-123","symbol":"ZJ","headquarters":"X1-DF55-20250Z","credits":175000,"startingFaction":"COSMIC","shipCount":2}}"#;

pub const CONTRACTS: &str = r#"{"data":[{"id":"clx1","factionSymbol":"COSMIC","type":"PROCUREMENT","terms":{"deadline":"2026-11-01T00:00:00Z","payment":{"onAccepted":4000,"onFulfilled":21000},"deliver":[{"tradeSymbol":"IRON_ORE","destinationSymbol":"X1-DF55-20250Z","unitsRequired":50,"unitsFulfilled":0}]},"accepted":false,"fulfilled":false,"expiration":"2026-10-20T00:00:00Z","deadlineToAccept":"2026-10-20T00:00:00Z"}],"meta":{"total":1,"page":1,"limit":10}}"#;

pub const WAYPOINT: &str = r#"{"data":{"symbol":"X1-DF55-20250Z","type":"PLANET","systemSymbol":"X1-DF55","x":-42,"y":17,"orbitals":[{"symbol":"X1-DF55-20250Y"}],"traits":[{"symbol":"MARKETPLACE","name":"Marketplace","description":"A market."}]}}"#;

pub const SYSTEM: &str = r#"{"data":{"symbol":"X1-DF55","sectorSymbol":"X1","type":"RED_STAR","x":10,"y":-3,"waypoints":[{"symbol":"X1-DF55-20250Z","type":"PLANET","x":-42,"y":17}],"factions":[]}}"#;

pub const REGISTER: &str = r#"{"data":{"token":"tok-new","agent":{"accountId":"acc-9","symbol":"NEWBIE","headquarters":"X1-HQ","credits":100000,"startingFaction":"COSMIC","shipCount":1},"contract":{},"faction":{},"ship":{}}}"#;
