//! Polling of a server's loading progress.
//!
//! While a viewer is still loading its data it serves a fallback page whose
//! indicator is driven by [`Poller`]: every tick issues one request against
//! the progress endpoint, stale responses are dropped, and once the server
//! reports [`Progress::done`] the sink is told to reload exactly once.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, warn};

use crate::error::Result;
use crate::serializer::escape_html;

/// Path of the progress endpoint unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "/api/v1/progress";

/// Delay between two requests unless configured otherwise.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// A progress report, as served by the status endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Progress {
    /// Whether loading has finished.
    pub done: bool,
    /// Name of the current loading stage.
    pub stage: String,
    /// Work items completed in the current stage.
    pub current: u64,
    /// Work items in the current stage, or `0` if unknown.
    pub total: u64,
}

/// What the loading indicator should show for a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView {
    /// Loading finished; the page reloads.
    Finished,
    /// A stage with a known amount of work.
    Counted {
        /// Stage name.
        stage: String,
        /// Completed work items.
        current: u64,
        /// Total work items.
        total: u64,
    },
    /// A stage without a known amount of work.
    Stage(String),
    /// Nothing new to show.
    Unchanged,
}

impl From<&Progress> for StatusView {
    fn from(progress: &Progress) -> Self {
        if progress.done {
            StatusView::Finished
        } else if progress.total != 0 {
            StatusView::Counted {
                stage: progress.stage.clone(),
                current: progress.current,
                total: progress.total,
            }
        } else if !progress.stage.is_empty() {
            StatusView::Stage(progress.stage.clone())
        } else {
            StatusView::Unchanged
        }
    }
}

impl StatusView {
    /// Renders the indicator markup, or `None` when the indicator keeps its
    /// previous content.
    #[must_use]
    pub fn to_html(&self) -> Option<String> {
        match self {
            StatusView::Finished => Some("Finished, reloading page ...".to_owned()),
            StatusView::Counted {
                stage,
                current,
                total,
            } => {
                let count = if current == total {
                    current.to_string()
                } else {
                    format!("{current}/{total}")
                };
                Some(format!(
                    "<code>{}</code> (<code>{count}</code>)",
                    escape_html(stage)
                ))
            }
            StatusView::Stage(stage) => Some(format!("<code>{}</code>", escape_html(stage))),
            StatusView::Unchanged => None,
        }
    }
}

/// A source of progress reports.
#[async_trait]
pub trait ProgressSource: Send + Sync + 'static {
    /// Fetches the current progress. Must be idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be retrieved or decoded.
    async fn fetch(&self) -> Result<Progress>;
}

/// Receives indicator updates from a [`Poller`].
pub trait ProgressSink {
    /// Shows a new status.
    fn update(&mut self, view: &StatusView);

    /// Called exactly once when loading finished.
    fn finished(&mut self);
}

/// Counters describing a completed poll run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollSummary {
    /// Requests issued.
    pub issued: u64,
    /// Responses applied to the sink.
    pub applied: u64,
    /// Responses dropped because a newer request had been issued.
    pub discarded: u64,
    /// Requests that failed.
    pub failed: u64,
}

/// Polls a [`ProgressSource`] on a fixed interval.
#[derive(Debug, Clone)]
pub struct Poller {
    interval: Duration,
}

impl Default for Poller {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

impl Poller {
    /// Creates a poller issuing one request per `interval`.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Polls until the source reports completion.
    ///
    /// The first request is issued immediately. Requests may overlap; each
    /// one is numbered and only the response to the most recently issued
    /// request is applied. Failed requests are logged and polling continues.
    pub async fn run<S, K>(&self, source: Arc<S>, sink: &mut K) -> PollSummary
    where
        S: ProgressSource,
        K: ProgressSink + ?Sized,
    {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut in_flight: JoinSet<(u64, Result<Progress>)> = JoinSet::new();
        let mut counter: u64 = 0;
        let mut summary = PollSummary::default();

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    counter += 1;
                    summary.issued += 1;
                    let request = counter;
                    let source = Arc::clone(&source);
                    in_flight.spawn(async move { (request, source.fetch().await) });
                }
                Some(joined) = in_flight.join_next() => {
                    let (request, result) = match joined {
                        Ok(response) => response,
                        Err(err) => {
                            summary.failed += 1;
                            error!(%err, "progress request task failed");
                            continue;
                        }
                    };

                    if request != counter {
                        summary.discarded += 1;
                        warn!(request, latest = counter, "received out-of-order response");
                        continue;
                    }

                    let progress = match result {
                        Ok(progress) => progress,
                        Err(err) => {
                            summary.failed += 1;
                            error!(%err, request, "failed to fetch progress");
                            continue;
                        }
                    };

                    let view = StatusView::from(&progress);
                    summary.applied += 1;
                    if view == StatusView::Finished {
                        sink.update(&view);
                        sink.finished();
                        debug!(?summary, "loading finished");
                        return summary;
                    }
                    if view != StatusView::Unchanged {
                        sink.update(&view);
                    }
                }
            }
        }
    }
}

/// Fetches progress reports over HTTP.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpProgressSource {
    client: reqwest::Client,
    url: url::Url,
}

#[cfg(feature = "http")]
impl HttpProgressSource {
    /// Creates a source for `endpoint` relative to `base`, e.g.
    /// `http://localhost:3000` and `/api/v1/progress`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`](crate::Error::Url) if the URL is invalid.
    pub fn new(base: &str, endpoint: &str) -> Result<Self> {
        let url = url::Url::parse(base)?.join(endpoint)?;
        Ok(Self {
            client: reqwest::Client::new(),
            url,
        })
    }

    /// Returns the polled URL.
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl ProgressSource for HttpProgressSource {
    async fn fetch(&self) -> Result<Progress> {
        let progress = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?
            .json::<Progress>()
            .await?;
        Ok(progress)
    }
}
