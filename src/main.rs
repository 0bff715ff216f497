//! dofbridged — bridges frontend selection events to a feedback-effects
//! receiver.
//!
//! Reads host events as newline-delimited JSON on stdin (one object per
//! line, see [`events::HostEvent`]) and forwards focus transitions to
//! the receiver's `DOFLinx` socket as fire-and-forget text commands.
//! The host side owns the loop; this binary just stands between its
//! event feed and the wire.

mod catalog;
mod channel;
mod dispatch;
mod events;
mod normalize;
mod tracker;
mod wire;

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use futures::StreamExt;
use tokio_util::codec::{FramedRead, LinesCodec};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use catalog::StaticCatalog;
use channel::PipeSender;
use dispatch::Dispatcher;
use events::{HostEvent, RawEvent};

#[derive(Debug, Parser)]
#[command(
    name = "dofbridged",
    about = "Bridge frontend selection events to a DOFLinx feedback receiver"
)]
struct Args {
    /// Socket path of the receiver. Defaults to DOFLinx under the
    /// runtime directory.
    #[arg(long)]
    socket: Option<PathBuf>,

    /// Connect timeout per outbound message, in milliseconds.
    #[arg(long, default_value_t = channel::DEFAULT_CONNECT_TIMEOUT.as_millis() as u64)]
    connect_timeout_ms: u64,

    /// JSON file mapping emulator ids to display titles.
    #[arg(long)]
    emulators: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let catalog = match &args.emulators {
        Some(path) => match StaticCatalog::load(path) {
            Ok(catalog) => {
                info!(path = %path.display(), emulators = catalog.len(), "catalog loaded");
                catalog
            }
            Err(e) => {
                error!(error = %e, "failed to load emulator catalog");
                std::process::exit(1);
            }
        },
        None => {
            info!("no emulator catalog; selection scopes fall back to empty titles");
            StaticCatalog::new(HashMap::new())
        }
    };

    let socket = args.socket.unwrap_or_else(PipeSender::default_endpoint);
    let sender = PipeSender::new(socket, Duration::from_millis(args.connect_timeout_ms));
    info!(socket = %sender.path().display(), "bridging host events to receiver");

    let mut dispatcher = Dispatcher::new(sender, catalog);
    let mut lines = FramedRead::new(tokio::io::stdin(), LinesCodec::new());

    while let Some(line) = lines.next().await {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "event feed read failed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<HostEvent>(&line) {
            Ok(host) => {
                let event = RawEvent::from(host);
                debug!(?event, "dispatching");
                dispatcher.dispatch(event).await;
            }
            Err(e) => warn!(error = %e, "malformed host event line, skipping"),
        }
    }

    info!(
        platform = %dispatcher.state().current_platform,
        game = %dispatcher.state().current_game,
        "event feed closed, shutting down"
    );
}
