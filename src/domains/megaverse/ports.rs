use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::common::ApiResult;
use crate::domains::megaverse::goal::{Color, Direction, GoalGrid};

/// Raw outcome of a request that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures below the HTTP status level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    Timeout,
    Connect(String),
    InvalidUrl(String),
    NoResponse,
    Other(String),
}

/// Port for the outbound HTTP calls the client makes.
/// Adapters report any status (including non-2xx) as `Ok`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, TransportError>;
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Port for the blocking waits (backoff and pacing).
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Operations the replay driver needs from the megaverse API.
#[async_trait]
pub trait MegaverseApi: Send + Sync {
    async fn create_polyanet(&self, row: usize, column: usize) -> ApiResult<()>;
    async fn create_soloon(&self, row: usize, column: usize, color: Color) -> ApiResult<()>;
    async fn create_cometh(&self, row: usize, column: usize, direction: Direction) -> ApiResult<()>;
    async fn get_goal_map(&self) -> ApiResult<GoalGrid>;
}
