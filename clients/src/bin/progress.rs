//! `triplegraph-progress` — Follows a viewer's loading progress until it
//! reports completion.
//!
//! Polls `GET <base-url>/api/v1/progress` on a fixed interval and prints each
//! new stage. Exits once the server reports that loading is done.
//!
//! **Usage:**
//! ```text
//! triplegraph-progress <base-url> [--interval-ms <n>] [--endpoint <path>] [--config <file>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use triplegraph::progress::HttpProgressSource;
use triplegraph::{Poller, ProgressSink, StatusView};
use triplegraph_clients::{init_logging, load_config};

/// Follow a viewer's loading progress.
#[derive(Parser)]
#[command(
    name = "triplegraph-progress",
    about = "Follow a viewer's loading progress until it is done"
)]
struct Args {
    /// Base URL of the viewer, e.g. `http://localhost:3000`.
    base_url: String,

    /// Delay between requests in milliseconds.
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Path of the progress endpoint.
    #[arg(long)]
    endpoint: Option<String>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Prints status changes to stdout.
#[derive(Default)]
struct TerminalSink {
    last: Option<StatusView>,
}

impl ProgressSink for TerminalSink {
    fn update(&mut self, view: &StatusView) {
        if self.last.as_ref() == Some(view) {
            return;
        }
        match view {
            StatusView::Finished => println!("Finished."),
            StatusView::Counted {
                stage,
                current,
                total,
            } if current == total => println!("{stage} ({current})"),
            StatusView::Counted {
                stage,
                current,
                total,
            } => println!("{stage} ({current}/{total})"),
            StatusView::Stage(stage) => println!("{stage}"),
            StatusView::Unchanged => {}
        }
        self.last = Some(view.clone());
    }

    fn finished(&mut self) {
        info!("viewer finished loading");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(interval_ms) = args.interval_ms {
        config.poll_interval_ms = interval_ms;
    }
    if let Some(endpoint) = args.endpoint {
        config.progress_endpoint = endpoint;
    }

    let source = HttpProgressSource::new(&args.base_url, &config.progress_endpoint)
        .with_context(|| format!("Invalid base URL: {}", args.base_url))?;
    info!(url = %source.url(), "polling progress");

    let mut sink = TerminalSink::default();
    let summary = Poller::new(config.poll_interval())
        .run(Arc::new(source), &mut sink)
        .await;

    println!(
        "Done after {} requests ({} discarded, {} failed).",
        summary.issued, summary.discarded, summary.failed
    );
    Ok(())
}
