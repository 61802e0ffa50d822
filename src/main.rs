//! handmouse — hand-gesture virtual mouse daemon.
//!
//! Reads per-frame hand-landmark observations from an external detector and
//! turns them into pointer moves, clicks, swipes, and scrolls.

mod backend;
mod dispatch;
mod feed;
mod gesture;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use backend::headless::{HeadlessBackend, HeadlessConfig};
use backend::InputBackend;
use dispatch::Dispatcher;
use feed::FeedMessage;
use gesture::{ClassifierConfig, MouseSession, PointerConfig};

#[derive(Parser, Debug)]
#[command(name = "handmouse", about = "Hand-gesture virtual mouse")]
struct Cli {
    /// Frame feed: path to a recorded feed file, or "-" for stdin
    #[arg(long, default_value = "-")]
    source: String,

    /// Virtual screen resolution (WxH) for the headless backend
    #[arg(long, default_value = "1920x1080")]
    screen: String,

    /// Drive the real desktop instead of the headless backend
    /// (requires the `system` build feature)
    #[arg(long)]
    system: bool,

    /// Show version and exit
    #[arg(long)]
    version: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("handmouse {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "handmouse=info".into()),
        )
        .init();

    info!("handmouse v{} starting", env!("CARGO_PKG_VERSION"));

    if cli.system {
        #[cfg(feature = "system")]
        {
            let mut backend = backend::system::SystemBackend::new()?;
            return run(&cli, &mut backend);
        }
        #[cfg(not(feature = "system"))]
        anyhow::bail!("this build has no system backend (rebuild with --features system)");
    }

    let (width, height) = HeadlessConfig::parse_resolution(&cli.screen)
        .with_context(|| format!("invalid --screen resolution: {}", cli.screen))?;
    let mut backend = HeadlessBackend::new(HeadlessConfig { width, height });
    run(&cli, &mut backend)?;
    info!("actions {}", backend.status_sexp());
    Ok(())
}

/// Frame loop: read feed lines, process, dispatch.  One frame is fully
/// handled before the next is read; the feed read is the only blocking point.
fn run(cli: &Cli, backend: &mut dyn InputBackend) -> anyhow::Result<()> {
    let reader: Box<dyn BufRead> = if cli.source == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&cli.source)
            .with_context(|| format!("could not open feed source: {}", cli.source))?;
        Box::new(BufReader::new(file))
    };

    let (width, height) = backend.screen_size();
    let mut session = MouseSession::new(
        PointerConfig::default(),
        ClassifierConfig::default(),
        width as f32,
        height as f32,
    );
    let dispatcher = Dispatcher::new(width, height);

    info!("virtual mouse started (source: {})", cli.source);

    let mut window_start: Option<f64> = None;
    let mut window_frames = 0u64;

    for line in reader.lines() {
        let line = line.context("failed to read from frame feed")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match feed::parse_message(line) {
            Some(FeedMessage::Quit) => {
                info!("quit message received");
                break;
            }
            Some(FeedMessage::Frame(frame)) => {
                let events = session.process(frame.hand.as_ref(), frame.t);
                dispatcher.dispatch(&events, backend);

                // Frame-rate bookkeeping from feed timestamps.
                window_frames += 1;
                match window_start {
                    None => window_start = Some(frame.t),
                    Some(start) if frame.t - start >= 5.0 => {
                        debug!(
                            "{:.1} fps over the last {:.1}s",
                            window_frames as f64 / (frame.t - start),
                            frame.t - start,
                        );
                        window_start = Some(frame.t);
                        window_frames = 0;
                    }
                    Some(_) => {}
                }
            }
            // Malformed line: already logged, keep going.
            None => {}
        }
    }

    info!(
        "feed ended after {} frames; session {}",
        session.frames_processed(),
        session.status_sexp(),
    );
    Ok(())
}
