//! Headless walk-demo binary.
//!
//! Usage:
//!   cargo run -p walker_app -- [--model models/avatar.glb] [--hz 60]
//!                              [--step 0.1] [--smoothing 0.1]
//!                              [--width 1280] [--height 720]
//!
//! Runs the frame loop against the no-op renderer and drives it from stdin.
//!
//! Console commands:
//!   hold <up|down|left|right>     - Press an arrow key
//!   release <up|down|left|right>  - Release an arrow key
//!   resize <width> <height>       - Resize the viewport
//!   fullscreen                    - Toggle fullscreen
//!   quit                          - Exit

use std::env;
use std::io::{BufRead, Write};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use walker_app::events::HostEvent;
use walker_app::loader::spawn_model_load;
use walker_app::scheduler::{FrameScheduler, RefreshClock};
use walker_shared::asset::FixedModelSource;
use walker_shared::config::WalkerConfig;
use walker_shared::render::{NullControls, NullRenderer, NullWindow};

fn parse_args() -> WalkerConfig {
    let mut cfg = WalkerConfig::default();
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--model" if i + 1 < args.len() => {
                cfg.model_path = args[i + 1].clone();
                i += 2;
            }
            "--hz" if i + 1 < args.len() => {
                cfg.frame_hz = args[i + 1].parse().unwrap_or(60);
                i += 2;
            }
            "--step" if i + 1 < args.len() => {
                cfg.step_size = args[i + 1].parse().unwrap_or(0.1);
                i += 2;
            }
            "--smoothing" if i + 1 < args.len() => {
                cfg.rotation_smoothing = args[i + 1].parse().unwrap_or(0.1);
                i += 2;
            }
            "--width" if i + 1 < args.len() => {
                cfg.width = args[i + 1].parse().unwrap_or(1280);
                i += 2;
            }
            "--height" if i + 1 < args.len() => {
                cfg.height = args[i + 1].parse().unwrap_or(720);
                i += 2;
            }
            _ => i += 1,
        }
    }
    cfg
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cfg = parse_args();
    info!(
        model = %cfg.model_path,
        frame_hz = cfg.frame_hz,
        step_size = cfg.step_size,
        "Starting walk demo"
    );

    // Host events arrive over a channel; the scheduler drains them at tick
    // boundaries.
    let (events_tx, events_rx) = mpsc::channel::<HostEvent>(64);
    let (mut scheduler, stop) = FrameScheduler::new(
        cfg.clone(),
        NullRenderer,
        NullControls,
        NullWindow::default(),
        events_rx,
    );

    // Kick off the asynchronous model load. A real build would plug a glTF
    // loader in here; the fixed source keeps the binary self-contained.
    let model_rx = spawn_model_load(
        Arc::new(FixedModelSource { height: 1.8 }),
        cfg.model_path.clone(),
    );
    scheduler.set_model_channel(model_rx);

    // Stdin reader thread feeding the console channel.
    let (console_tx, mut console_rx) = mpsc::channel::<String>(32);
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        loop {
            print!("] ");
            let _ = stdout.flush();
            let mut line = String::new();
            if stdin.lock().read_line(&mut line).is_err() {
                break;
            }
            let line = line.trim().to_string();
            if !line.is_empty() && console_tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    // Translate console lines into host events; `quit` stops the loop.
    tokio::spawn(async move {
        while let Some(line) = console_rx.recv().await {
            if line == "quit" || line == "exit" {
                stop.stop();
                break;
            }
            match HostEvent::parse_line(&line) {
                Some(event) => {
                    if events_tx.send(event).await.is_err() {
                        break;
                    }
                }
                None => println!("Unknown command: {line}"),
            }
        }
    });

    println!("Walk demo running. 'hold up' to walk, 'quit' to exit.");
    println!();

    let mut clock = RefreshClock::new(cfg.frame_hz);
    scheduler.run(&mut clock).await;

    Ok(())
}
