//! Fixed-interval render status polling with an attempt ceiling.
//!
//! The remote renderer moves a job through `queued → rendering → {done
//! | failed}`. [`poll_until_terminal`] queries the status at a fixed
//! interval until a terminal state is observed, the attempt ceiling is
//! reached, or the [`CancellationToken`] fires. Exactly one
//! [`PollOutcome`] is produced per job, and no further status requests
//! are issued once the loop returns.

use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::api::{ShotstackClient, ShotstackError};

/// Render lifecycle states reported by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    Queued,
    Fetching,
    Rendering,
    Saving,
    Done,
    Failed,
    /// A status string this client does not recognize; treated as
    /// in-progress.
    Unknown,
}

impl RenderStatus {
    /// Map a remote status string to a lifecycle state.
    pub fn from_remote(status: &str) -> Self {
        match status {
            "queued" => Self::Queued,
            "fetching" => Self::Fetching,
            "rendering" => Self::Rendering,
            "saving" => Self::Saving,
            "done" => Self::Done,
            "failed" => Self::Failed,
            _ => Self::Unknown,
        }
    }
}

/// One status observation for a render job.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub status: RenderStatus,
    /// Result URL, populated once the render is done.
    pub url: Option<String>,
    /// Server-provided error text for failed renders.
    pub error: Option<String>,
}

/// Source of status observations, injectable so the poller can be
/// exercised against scripted sequences in tests.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Query the current status of the render identified by `id`.
    async fn poll_status(&self, id: &str) -> Result<StatusReport, ShotstackError>;
}

#[async_trait]
impl StatusSource for ShotstackClient {
    async fn poll_status(&self, id: &str) -> Result<StatusReport, ShotstackError> {
        let body = self.status(id).await?;
        let response = body
            .get("response")
            .ok_or_else(|| ShotstackError::Malformed("missing response object".to_string()))?;
        let status = response
            .get("status")
            .and_then(|s| s.as_str())
            .ok_or_else(|| ShotstackError::Malformed("missing response.status".to_string()))?;

        Ok(StatusReport {
            status: RenderStatus::from_remote(status),
            url: response
                .get("url")
                .and_then(|u| u.as_str())
                .map(|u| u.to_string()),
            error: response
                .get("error")
                .and_then(|e| e.as_str())
                .map(|e| e.to_string()),
        })
    }
}

/// Tunable parameters for the polling loop.
pub struct PollerConfig {
    /// Delay between consecutive status queries.
    pub interval: Duration,
    /// Maximum number of queries before giving up.
    pub max_attempts: u32,
}

impl Default for PollerConfig {
    /// 60 attempts at 5-second intervals: a 5-minute ceiling.
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            max_attempts: 60,
        }
    }
}

/// Terminal outcome of one polling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The render finished and produced a result URL.
    Done { url: String },
    /// The render failed, or a poll itself errored.
    Failed { message: String },
    /// The attempt ceiling was reached without a terminal status.
    TimedOut,
    /// The cancellation token fired before a terminal status.
    Cancelled,
}

/// Poll a render's status until a terminal outcome.
///
/// Waits one interval before the first query, then once per attempt:
///
/// - a poll error (non-2xx or malformed body) fails the job immediately;
/// - `done` with a result URL resolves the job;
/// - `failed` fails the job with the server's error text;
/// - anything else counts the attempt and continues.
///
/// After `max_attempts` non-terminal observations the job times out
/// with a "taking longer than expected" outcome, distinct from failure.
/// Cancellation is honored at every await point.
pub async fn poll_until_terminal(
    source: &dyn StatusSource,
    id: &str,
    config: &PollerConfig,
    cancel: &CancellationToken,
) -> PollOutcome {
    for attempt in 1..=config.max_attempts {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(%id, "Render polling cancelled");
                return PollOutcome::Cancelled;
            }
            _ = tokio::time::sleep(config.interval) => {}
        }

        let report = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(%id, "Render polling cancelled");
                return PollOutcome::Cancelled;
            }
            result = source.poll_status(id) => match result {
                Ok(report) => report,
                Err(e) => {
                    tracing::error!(%id, attempt, error = %e, "Render status poll failed");
                    return PollOutcome::Failed {
                        message: e.to_string(),
                    };
                }
            }
        };

        match report.status {
            RenderStatus::Done => {
                return match report.url {
                    Some(url) => {
                        tracing::info!(%id, %url, "Render complete");
                        PollOutcome::Done { url }
                    }
                    None => PollOutcome::Failed {
                        message: "Render reported done without a result URL".to_string(),
                    },
                };
            }
            RenderStatus::Failed => {
                let message = report
                    .error
                    .unwrap_or_else(|| "Render failed".to_string());
                tracing::error!(%id, %message, "Render failed");
                return PollOutcome::Failed { message };
            }
            other => {
                tracing::debug!(%id, attempt, status = ?other, "Render in progress");
            }
        }
    }

    tracing::warn!(
        %id,
        attempts = config.max_attempts,
        "Render polling gave up without a terminal status",
    );
    PollOutcome::TimedOut
}
