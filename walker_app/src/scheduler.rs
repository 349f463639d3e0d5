//! Frame scheduler.
//!
//! Drives the per-frame tick: drain host events, poll the one-shot model
//! publish, resolve motion from the held keys, advance the avatar, update
//! camera controls, render, then wait for the next refresh signal. Exactly
//! one tick executes at a time; everything the tick reads is owned by the
//! scheduler, so no locks are involved.
//!
//! The loop carries an explicit stop handle and the refresh signal hides
//! behind [`FrameClock`], so tests can drive ticks synchronously instead of
//! waiting on a real display.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use walker_shared::{
    asset::ModelNode,
    avatar::{apply_delta, AvatarState},
    config::WalkerConfig,
    input::InputState,
    motion::resolve,
    render::{CameraControls, Renderer, WindowHost},
    scene::{Camera, Scene, Viewport},
};

use crate::events::HostEvent;

/// Refresh signal the loop synchronizes to.
#[async_trait]
pub trait FrameClock: Send {
    async fn wait(&mut self);
}

/// Paces ticks to a fixed rate, the headless stand-in for a display's
/// refresh signal.
pub struct RefreshClock {
    period: Duration,
    next: Option<Instant>,
}

impl RefreshClock {
    pub fn new(frame_hz: u32) -> Self {
        Self {
            period: Duration::from_secs_f32(1.0 / frame_hz.max(1) as f32),
            next: None,
        }
    }
}

#[async_trait]
impl FrameClock for RefreshClock {
    async fn wait(&mut self) {
        let next = self.next.unwrap_or_else(Instant::now) + self.period;
        self.next = Some(next);
        tokio::time::sleep_until(next).await;
    }
}

/// Fires immediately; lets tests run ticks without waiting on real time.
#[derive(Default)]
pub struct ManualClock;

#[async_trait]
impl FrameClock for ManualClock {
    async fn wait(&mut self) {
        tokio::task::yield_now().await;
    }
}

/// Cancels the running loop from outside.
pub struct StopHandle {
    tx: watch::Sender<bool>,
}

impl StopHandle {
    pub fn stop(&self) {
        let _ = self.tx.send(true);
    }
}

/// Owns all per-frame state and runs the tick loop.
pub struct FrameScheduler<R, C, W> {
    cfg: WalkerConfig,
    input: InputState,
    scene: Scene,
    camera: Camera,
    viewport: Viewport,

    renderer: R,
    controls: C,
    window: W,

    events_rx: mpsc::Receiver<HostEvent>,
    /// One-shot model publish; taken on first receipt or failure.
    model_rx: Option<oneshot::Receiver<ModelNode>>,

    tick: u64,
    stop_rx: watch::Receiver<bool>,
}

impl<R, C, W> FrameScheduler<R, C, W>
where
    R: Renderer,
    C: CameraControls,
    W: WindowHost,
{
    pub fn new(
        cfg: WalkerConfig,
        renderer: R,
        controls: C,
        window: W,
        events_rx: mpsc::Receiver<HostEvent>,
    ) -> (Self, StopHandle) {
        let viewport = Viewport::new(cfg.width, cfg.height, 1.0);
        let camera = Camera::new(viewport.aspect());
        let (stop_tx, stop_rx) = watch::channel(false);

        let scheduler = Self {
            cfg,
            input: InputState::default(),
            scene: Scene::default(),
            camera,
            viewport,
            renderer,
            controls,
            window,
            events_rx,
            model_rx: None,
            tick: 0,
            stop_rx,
        };
        (scheduler, StopHandle { tx: stop_tx })
    }

    /// Attaches the pending model load. The very next tick observes the
    /// publish once it fires.
    pub fn set_model_channel(&mut self, rx: oneshot::Receiver<ModelNode>) {
        self.model_rx = Some(rx);
    }

    pub fn avatar(&self) -> Option<&AvatarState> {
        self.scene.avatar.as_ref()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    /// Executes one tick.
    pub fn step(&mut self) {
        self.drain_events();
        self.poll_model();

        let delta = resolve(&self.input, self.cfg.step_size);
        apply_delta(&mut self.scene.avatar, &delta, self.cfg.rotation_smoothing);

        self.controls.update();
        self.renderer.render(&self.scene, &self.camera);

        self.tick += 1;
        if self.tick % 300 == 0 {
            debug!(tick = self.tick, avatar = ?self.scene.avatar, "Frame");
        }
    }

    /// Runs ticks until the stop handle fires.
    pub async fn run<K: FrameClock>(&mut self, clock: &mut K) {
        info!(frame_hz = self.cfg.frame_hz, "Frame loop started");
        while !*self.stop_rx.borrow() {
            self.step();
            clock.wait().await;
        }
        info!(tick = self.tick, "Frame loop stopped");
    }

    /// Runs a bounded number of ticks; the stop handle still applies.
    pub async fn run_for_ticks<K: FrameClock>(&mut self, ticks: u64, clock: &mut K) {
        for _ in 0..ticks {
            if *self.stop_rx.borrow() {
                break;
            }
            self.step();
            clock.wait().await;
        }
    }

    /// Drains host events queued since the last tick. Key handlers and the
    /// tick never interleave; the tick always reads a consistent snapshot.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                HostEvent::KeyDown(key) => self.input.apply_key(&key, true),
                HostEvent::KeyUp(key) => self.input.apply_key(&key, false),
                HostEvent::Resized {
                    width,
                    height,
                    device_pixel_ratio,
                } => {
                    self.viewport = Viewport::new(width, height, device_pixel_ratio);
                    self.camera.set_aspect(self.viewport.aspect());
                    self.renderer.resize(self.viewport);
                    debug!(width, height, "Viewport resized");
                }
                HostEvent::DoubleClick => {
                    let fullscreen = !self.window.is_fullscreen();
                    self.window.set_fullscreen(fullscreen);
                    debug!(fullscreen, "Fullscreen toggled");
                }
            }
        }
    }

    /// Checks the one-time model publish. On receipt the avatar spawns
    /// resting on the floor at half the model height; a closed channel means
    /// the load failed and the loop keeps running without an avatar.
    fn poll_model(&mut self) {
        let Some(rx) = self.model_rx.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(node) => {
                let height = node.height();
                self.scene.avatar = Some(AvatarState::resting(height));
                info!(model = %node.name, height, "Avatar model loaded");
                self.model_rx = None;
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                warn!("Model never arrived; avatar stays unloaded");
                self.model_rx = None;
            }
        }
    }
}
