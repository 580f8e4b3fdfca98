// Megaverse builder: goal grid -> ordered creation commands -> paced replay
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::outbound::{init_noop_logger, TokioSleeper};
use crate::common::{ApiError, MegaverseError, MegaverseResult, ReplayError};
use crate::config::{ReplayConfig, ReplayPolicy};
use crate::domains::logger::DynLogger;
use crate::domains::megaverse::{build_commands, CreationCommand, GoalGrid, MegaverseApi, Sleeper};

/// Result of a replay that ran to the end of the command list.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    pub commands: Vec<CreationCommand>,
    /// Commands that failed but were skipped under `ContinueOnError`.
    pub failures: Vec<(CreationCommand, ApiError)>,
}

impl ReplayReport {
    pub fn created(&self) -> usize {
        self.commands.len() - self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct MegaverseBuilder {
    api: Arc<dyn MegaverseApi>,
    sleeper: Arc<dyn Sleeper>,
    logger: DynLogger,
    pacing: Duration,
    policy: ReplayPolicy,
}

impl MegaverseBuilder {
    pub fn new(api: Arc<dyn MegaverseApi>, replay: &ReplayConfig) -> Self {
        Self {
            api,
            sleeper: Arc::new(TokioSleeper),
            logger: init_noop_logger(),
            pacing: replay.pacing(),
            policy: replay.policy,
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

    pub fn policy(&self) -> ReplayPolicy {
        self.policy
    }

    pub async fn fetch_goal(&self) -> MegaverseResult<GoalGrid> {
        self.api.get_goal_map().await.map_err(MegaverseError::Fetch)
    }

    pub async fn create_megaverse(&self, grid: &GoalGrid) -> Result<ReplayReport, ReplayError> {
        self.replay(build_commands(grid)).await
    }

    /// Submits `commands` in order with `pacing` between consecutive ones.
    pub async fn replay(&self, commands: Vec<CreationCommand>) -> Result<ReplayReport, ReplayError> {
        self.logger
            .info(&format!("Replaying {} creation commands", commands.len()));
        let mut failures = Vec::new();

        for (index, command) in commands.iter().enumerate() {
            if index > 0 {
                self.sleeper.sleep(self.pacing).await;
            }

            if let Err(source) = command.submit(self.api.as_ref()).await {
                let halts = self.policy == ReplayPolicy::HaltOnError
                    || matches!(source, ApiError::MaxRetriesExceeded { .. });
                if halts {
                    return Err(ReplayError { index, command: *command, source });
                }
                self.logger
                    .warn(&format!("Skipping {} after failure: {}", command, source));
                failures.push((*command, source));
            }
        }

        Ok(ReplayReport { commands, failures })
    }

    /// Fetches the goal map and replays it.
    pub async fn run(&self) -> MegaverseResult<ReplayReport> {
        let grid = self.fetch_goal().await?;
        Ok(self.create_megaverse(&grid).await?)
    }
}
