// Scene task: the single owner of the animation state.

use super::animation::{AnimationLoop, RESTART_QUERY, RestartOutcome, RestartTicket};
use super::router::CommandRouter;
use super::types::{FrameSnapshot, SceneEvent};
use crate::domain::{AnimationState, Clock, Renderer, TextQuery, Tint};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, mpsc, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Settings for spawning a scene.
#[derive(Debug, Clone)]
pub struct SceneSettings {
    /// Capacity for inbound scene events.
    pub event_channel_capacity: usize,
    /// Interval between frames, standing in for the display refresh signal.
    pub frame_interval: Duration,
    /// Color the sprite starts with and returns to on restart.
    pub default_tint: Tint,
    /// Window over which the frame rate is measured and logged.
    pub stats_interval: Duration,
}

/// Channels into and out of a running scene task.
#[derive(Clone)]
pub struct SceneHandle {
    /// Sender for host commands and local taps.
    pub events_tx: mpsc::Sender<SceneEvent>,
    /// Latest published frame.
    pub frame_rx: watch::Receiver<FrameSnapshot>,
    shutdown: Arc<Notify>,
}

impl SceneHandle {
    /// Stops the scene task after the current event or frame.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }
}

/// Creates the scene channels and spawns its task.
///
/// The event receiver exists before the task starts, so nothing sent through the
/// returned handle can be lost, even ahead of the first frame.
pub fn spawn_scene<R, C>(
    renderer: R,
    clock: C,
    text_query: Arc<dyn TextQuery>,
    settings: SceneSettings,
) -> SceneHandle
where
    R: Renderer + 'static,
    C: Clock + 'static,
{
    let (events_tx, events_rx) = mpsc::channel::<SceneEvent>(settings.event_channel_capacity);
    let initial = FrameSnapshot::capture(0, &AnimationState::new(settings.default_tint));
    let (frame_tx, frame_rx) = watch::channel::<FrameSnapshot>(initial);
    let shutdown = Arc::new(Notify::new());

    tokio::spawn(scene_task(
        events_rx,
        events_tx.downgrade(),
        frame_tx,
        renderer,
        clock,
        text_query,
        settings,
        shutdown.clone(),
    ));

    SceneHandle {
        events_tx,
        frame_rx,
        shutdown,
    }
}

/// Runs until shutdown is signalled or every strong event sender is gone.
#[allow(clippy::too_many_arguments)]
pub async fn scene_task<R, C>(
    mut events_rx: mpsc::Receiver<SceneEvent>,
    events_tx: mpsc::WeakSender<SceneEvent>,
    frame_tx: watch::Sender<FrameSnapshot>,
    mut renderer: R,
    clock: C,
    text_query: Arc<dyn TextQuery>,
    settings: SceneSettings,
    shutdown: Arc<Notify>,
) where
    R: Renderer,
    C: Clock,
{
    let router = CommandRouter::new(settings.default_tint);
    let mut animation = AnimationLoop::new(AnimationState::new(settings.default_tint), clock.now());
    let mut stats = FrameStats::new(clock.now());
    let mut frame: u64 = 0;

    let mut interval = tokio::time::interval(settings.frame_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(
        frame_interval_ms = settings.frame_interval.as_millis(),
        default_tint = %settings.default_tint,
        "scene started"
    );

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                info!(frame, "scene stopped");
                break;
            }
            event = events_rx.recv() => {
                let Some(event) = event else {
                    info!(frame, "scene handles dropped; stopping");
                    break;
                };
                // Applied immediately; the next tick reads the mutated state.
                handle_event(event, &router, &mut animation, &events_tx, &text_query);
            }
            _ = interval.tick() => {
                let now = clock.now();
                animation.tick(now);
                animation.draw(&mut renderer);
                frame += 1;

                if let Some(fps) = stats.record(now, settings.stats_interval) {
                    debug!(frame, fps, "frame rate");
                }
                let _ = frame_tx.send(FrameSnapshot::capture(frame, animation.state()));
            }
        }
    }
}

fn handle_event(
    event: SceneEvent,
    router: &CommandRouter,
    animation: &mut AnimationLoop,
    events_tx: &mpsc::WeakSender<SceneEvent>,
    text_query: &Arc<dyn TextQuery>,
) {
    match event {
        SceneEvent::Update(batch) => router.on_update(animation.state_mut(), &batch),
        SceneEvent::TapSprite => {
            animation.toggle_spin();
            debug!(spinning = animation.state().spinning, "sprite tapped");
        }
        SceneEvent::TapRestart => {
            let Some(ticket) = animation.begin_restart() else {
                return;
            };
            match events_tx.upgrade() {
                Some(events_tx) => spawn_restart_query(ticket, text_query.clone(), events_tx),
                None => debug!(request_id = %ticket.request_id, "scene closing; restart query skipped"),
            }
        }
        SceneEvent::RestartReply {
            request_id,
            outcome,
        } => {
            animation.on_restart_reply(request_id, &outcome);
        }
    }
}

// Frames keep ticking while the host answers; the reply re-enters through the event channel.
fn spawn_restart_query(
    ticket: RestartTicket,
    text_query: Arc<dyn TextQuery>,
    events_tx: mpsc::Sender<SceneEvent>,
) {
    tokio::spawn(async move {
        let reply = text_query.send_text_query(RESTART_QUERY).await;
        let event = SceneEvent::RestartReply {
            request_id: ticket.request_id,
            outcome: RestartOutcome::from_reply(reply),
        };
        if events_tx.send(event).await.is_err() {
            debug!(request_id = %ticket.request_id, "scene closed before restart reply");
        }
    });
}

// Rolling frame counter for rate logging.
struct FrameStats {
    window_start: Duration,
    frames: u32,
}

impl FrameStats {
    fn new(now: Duration) -> Self {
        Self {
            window_start: now,
            frames: 0,
        }
    }

    fn record(&mut self, now: Duration, window: Duration) -> Option<f64> {
        self.frames += 1;
        let elapsed = now.saturating_sub(self.window_start);
        if elapsed < window || elapsed.is_zero() {
            return None;
        }

        let fps = f64::from(self.frames) / elapsed.as_secs_f64();
        self.window_start = now;
        self.frames = 0;
        Some(fps)
    }
}
