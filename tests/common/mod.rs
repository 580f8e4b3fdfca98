#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use megaverse::domains::logger::DomainLogger;
use megaverse::{ApiClient, Config, HttpResponse, HttpTransport, Sleeper, TransportError};

#[derive(Debug, Clone, PartialEq)]
pub struct Sent {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

/// Answers requests from a fixed script; 200 `{}` once the script runs out.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    pub sent: Mutex<Vec<Sent>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Result<HttpResponse, TransportError>>) -> Self {
        Self { script: Mutex::new(script.into()), sent: Mutex::new(Vec::new()) }
    }

    pub fn statuses(codes: &[u16]) -> Self {
        Self::new(codes.iter().map(|c| Ok(HttpResponse::new(*c, "{}"))).collect())
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn next(&self) -> Result<HttpResponse, TransportError> {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, "{}")))
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, TransportError> {
        self.sent.lock().unwrap().push(Sent { method: "POST", url: url.to_string(), body: Some(body.clone()) });
        self.next()
    }

    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.sent.lock().unwrap().push(Sent { method: "GET", url: url.to_string(), body: None });
        self.next()
    }
}

#[derive(Default)]
pub struct RecordingSleeper {
    pub waits: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

pub struct BridgeCapture {
    pub messages: Mutex<Vec<String>>,
}

impl BridgeCapture {
    pub fn new() -> Self { Self { messages: Mutex::new(Vec::new()) } }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl DomainLogger for BridgeCapture {
    fn info(&self, msg: &str) { self.messages.lock().unwrap().push(format!("INFO:{}", msg)); }
    fn warn(&self, msg: &str) { self.messages.lock().unwrap().push(format!("WARN:{}", msg)); }
    fn error(&self, msg: &str) { self.messages.lock().unwrap().push(format!("ERR:{}", msg)); }
}

pub struct Harness {
    pub transport: Arc<ScriptedTransport>,
    pub sleeper: Arc<RecordingSleeper>,
    pub log: Arc<BridgeCapture>,
    pub client: ApiClient,
}

pub fn harness(transport: ScriptedTransport) -> Harness {
    let transport = Arc::new(transport);
    let sleeper = Arc::new(RecordingSleeper::default());
    let log = Arc::new(BridgeCapture::new());
    let config = Config::new("cand-42", "https://api.test/api");
    let client = ApiClient::new(&config, transport.clone())
        .with_sleeper(sleeper.clone())
        .with_logger(log.clone());
    Harness { transport, sleeper, log, client }
}
