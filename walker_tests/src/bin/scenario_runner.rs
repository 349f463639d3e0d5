//! Scripted scenario runner.
//!
//! Walks the avatar through a fixed key script on a manual clock and checks
//! the resulting transforms, printing one line per check and a summary.
//! Exits nonzero if any check fails.

use std::f32::consts::{FRAC_PI_2, PI};

use tokio::sync::{mpsc, oneshot};

use walker_app::events::HostEvent;
use walker_app::scheduler::{FrameScheduler, ManualClock};
use walker_shared::asset::ModelNode;
use walker_shared::config::WalkerConfig;
use walker_shared::input::InputState;
use walker_shared::math::Vec3;
use walker_shared::motion::resolve;
use walker_shared::render::{NullControls, NullRenderer, NullWindow};

struct Outcome {
    name: &'static str,
    result: Result<(), String>,
}

fn check(name: &'static str, result: Result<(), String>) -> Outcome {
    Outcome { name, result }
}

fn approx(a: f32, b: f32) -> Result<(), String> {
    if (a - b).abs() < 1e-5 {
        Ok(())
    } else {
        Err(format!("expected {b}, got {a}"))
    }
}

fn resolver_checks(outcomes: &mut Vec<Outcome>) {
    let idle = InputState::default();
    let delta = resolve(&idle, 0.1);
    outcomes.push(check(
        "idle input resolves to zero delta",
        if delta.translation == Vec3::ZERO && delta.target_angle.is_none() {
            Ok(())
        } else {
            Err(format!("got {delta:?}"))
        },
    ));

    let mut both = InputState::default();
    both.apply_key("ArrowUp", true);
    both.apply_key("ArrowRight", true);
    let delta = resolve(&both, 0.1);
    outcomes.push(check(
        "up+right sums translation, right wins facing",
        if delta.translation == Vec3::new(0.1, 0.0, -0.1)
            && delta.target_angle == Some(FRAC_PI_2)
        {
            Ok(())
        } else {
            Err(format!("got {delta:?}"))
        },
    ));

    let mut ignored = InputState::default();
    ignored.apply_key("Escape", true);
    outcomes.push(check(
        "unrecognized key leaves input untouched",
        if ignored == InputState::default() {
            Ok(())
        } else {
            Err("Escape changed input state".to_string())
        },
    ));
}

async fn walk_script_checks(outcomes: &mut Vec<Outcome>) {
    let (events_tx, events_rx) = mpsc::channel(64);
    let (mut scheduler, _stop) = FrameScheduler::new(
        WalkerConfig::default(),
        NullRenderer,
        NullControls,
        NullWindow::default(),
        events_rx,
    );

    let (model_tx, model_rx) = oneshot::channel();
    model_tx
        .send(ModelNode {
            name: "avatar".to_string(),
            bbox_min: Vec3::ZERO,
            bbox_max: Vec3::new(0.5, 1.8, 0.5),
        })
        .ok();
    scheduler.set_model_channel(model_rx);

    // One empty tick spawns the avatar at rest.
    scheduler.run_for_ticks(1, &mut ManualClock).await;
    let spawn = scheduler.avatar().copied();
    outcomes.push(check(
        "avatar spawns at (0, h/2, 0) facing pi",
        match spawn {
            Some(a) => approx(a.position.y, 0.9)
                .and_then(|_| approx(a.position.x, 0.0))
                .and_then(|_| approx(a.facing_angle, PI)),
            None => Err("avatar missing after spawn tick".to_string()),
        },
    ));

    // Walk right for one tick.
    events_tx
        .send(HostEvent::KeyDown("ArrowRight".to_string()))
        .await
        .ok();
    scheduler.run_for_ticks(1, &mut ManualClock).await;
    let after = scheduler.avatar().copied().unwrap();
    outcomes.push(check(
        "one tick right moves x by step and turns 10% toward pi/2",
        approx(after.position.x, 0.1)
            .and_then(|_| approx(after.facing_angle, PI + (FRAC_PI_2 - PI) * 0.1)),
    ));

    // Hold for many ticks: facing approaches but never reaches the target.
    scheduler.run_for_ticks(200, &mut ManualClock).await;
    let settled = scheduler.avatar().copied().unwrap();
    outcomes.push(check(
        "long hold converges toward pi/2 without reaching it",
        if (settled.facing_angle - FRAC_PI_2).abs() < 1e-3
            && settled.facing_angle != FRAC_PI_2
        {
            Ok(())
        } else {
            Err(format!("facing {}", settled.facing_angle))
        },
    ));
}

#[tokio::main]
async fn main() {
    let mut outcomes = Vec::new();

    println!("Walk-demo scenario runner");
    println!("=========================\n");

    resolver_checks(&mut outcomes);
    walk_script_checks(&mut outcomes).await;

    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => println!("  ok   {}", outcome.name),
            Err(e) => {
                failed += 1;
                println!("  FAIL {} ({e})", outcome.name);
            }
        }
    }

    println!("\n{} checks, {} failed", outcomes.len(), failed);
    if failed > 0 {
        std::process::exit(1);
    }
}
