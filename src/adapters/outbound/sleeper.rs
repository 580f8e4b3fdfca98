use async_trait::async_trait;
use std::time::Duration;

use crate::domains::megaverse::ports::Sleeper;

/// Waits on the tokio timer. On a current-thread runtime nothing else runs meanwhile.
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
