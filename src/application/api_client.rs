use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::adapters::outbound::{init_noop_logger, TokioSleeper};
use crate::common::{ApiError, ApiResult};
use crate::config::{Config, RetryConfig};
use crate::domains::logger::DynLogger;
use crate::domains::megaverse::{
    Color, Direction, GoalGrid, GoalMapResponse, HttpResponse, HttpTransport, MegaverseApi,
    Sleeper, TransportError,
};

/// Client for the megaverse challenge API.
///
/// Creation requests go through [`ApiClient::post`], which retries while the
/// server answers 429 and gives up immediately on anything else.
pub struct ApiClient {
    base_url: String,
    candidate_id: String,
    retry: RetryConfig,
    transport: Arc<dyn HttpTransport>,
    sleeper: Arc<dyn Sleeper>,
    logger: DynLogger,
}

impl ApiClient {
    pub fn new(config: &Config, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            candidate_id: config.candidate_id.clone(),
            retry: config.retry.clone(),
            transport,
            sleeper: Arc::new(TokioSleeper),
            logger: init_noop_logger(),
        }
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn with_logger(mut self, logger: DynLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn candidate_id(&self) -> &str {
        &self.candidate_id
    }

    /// POST `body` to `{base_url}{path}`, backing off on 429.
    pub async fn post(&self, path: &str, body: &Value) -> ApiResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        let max_attempts = self.retry.max_retries;
        let mut delay = self.retry.initial_delay();

        for attempt in 1..=max_attempts {
            let outcome = self
                .transport
                .post_json(&url, body)
                .await
                .map_err(classify_transport)
                .and_then(parse_success);

            match outcome {
                Ok(value) => return Ok(value),
                Err(err) if err.is_rate_limited() => {
                    if attempt == max_attempts {
                        break;
                    }
                    self.logger.warn(&format!(
                        "Too Many Requests for {}. Waiting {} seconds before retrying...",
                        url,
                        delay.as_secs_f64()
                    ));
                    self.sleeper.sleep(delay).await;
                    delay *= 2;
                }
                Err(err) => return Err(self.report(err)),
            }
        }

        Err(self.report(ApiError::MaxRetriesExceeded { attempts: max_attempts }))
    }

    fn report(&self, err: ApiError) -> ApiError {
        self.logger.error(&format!("API request failed: {}", err));
        err
    }

    fn body(&self, row: usize, column: usize) -> Value {
        json!({
            "candidateId": self.candidate_id,
            "row": row,
            "column": column,
        })
    }
}

#[async_trait]
impl MegaverseApi for ApiClient {
    async fn create_polyanet(&self, row: usize, column: usize) -> ApiResult<()> {
        self.post("/polyanets", &self.body(row, column)).await.map(|_| ())
    }

    async fn create_soloon(&self, row: usize, column: usize, color: Color) -> ApiResult<()> {
        let mut body = self.body(row, column);
        body["color"] = json!(color);
        self.post("/soloons", &body).await.map(|_| ())
    }

    async fn create_cometh(&self, row: usize, column: usize, direction: Direction) -> ApiResult<()> {
        let mut body = self.body(row, column);
        body["direction"] = json!(direction);
        self.post("/comeths", &body).await.map(|_| ())
    }

    /// Single attempt; the goal map is never retried.
    async fn get_goal_map(&self) -> ApiResult<GoalGrid> {
        let url = format!("{}/map/{}/goal", self.base_url, self.candidate_id);
        let value = self
            .transport
            .get(&url)
            .await
            .map_err(classify_transport)
            .and_then(parse_success)
            .map_err(|e| self.report(e))?;

        let resp: GoalMapResponse = serde_json::from_value(value)
            .map_err(|e| self.report(ApiError::Unexpected(format!("malformed goal map: {}", e))))?;
        Ok(GoalGrid::from(resp))
    }
}

fn classify_transport(err: TransportError) -> ApiError {
    match err {
        TransportError::Timeout => ApiError::Timeout,
        TransportError::Connect(msg) => ApiError::Connection(msg),
        TransportError::InvalidUrl(msg) => ApiError::InvalidUrl(msg),
        TransportError::NoResponse => ApiError::NoResponse,
        TransportError::Other(msg) => ApiError::Unexpected(msg),
    }
}

fn parse_success(resp: HttpResponse) -> ApiResult<Value> {
    if !resp.is_success() {
        return Err(ApiError::from_status(resp.status));
    }
    if resp.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&resp.body)
        .map_err(|e| ApiError::Unexpected(format!("invalid JSON in response: {}", e)))
}
