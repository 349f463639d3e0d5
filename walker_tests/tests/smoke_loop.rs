use std::sync::Arc;

use tokio::sync::mpsc;

use walker_app::loader::spawn_model_load;
use walker_app::scheduler::{FrameScheduler, RefreshClock};
use walker_shared::asset::FixedModelSource;
use walker_shared::config::WalkerConfig;
use walker_shared::render::{NullControls, NullRenderer, NullWindow};

/// Smoke test: the loop runs a few real-time ticks without panicking and
/// observes the background model load.
#[tokio::test]
async fn loop_runs_few_ticks() -> anyhow::Result<()> {
    let (_events_tx, events_rx) = mpsc::channel(8);
    let (mut scheduler, _stop) = FrameScheduler::new(
        WalkerConfig {
            frame_hz: 120,
            ..Default::default()
        },
        NullRenderer,
        NullControls,
        NullWindow::default(),
        events_rx,
    );

    let model_rx = spawn_model_load(
        Arc::new(FixedModelSource { height: 1.8 }),
        "models/avatar.glb".to_string(),
    );
    scheduler.set_model_channel(model_rx);

    let mut clock = RefreshClock::new(120);
    scheduler.run_for_ticks(5, &mut clock).await;

    assert_eq!(scheduler.tick_count(), 5);
    // The publish fires well within five 120 Hz frames.
    assert!(scheduler.avatar().is_some());
    Ok(())
}
