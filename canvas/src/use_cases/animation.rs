// Per-frame animation state machine and local input handling.

use crate::domain::{AnimationState, ButtonTexture, Renderer, TextQueryError};
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Text the host is asked to resolve when the restart button is tapped.
pub const RESTART_QUERY: &str = "Restart game";
/// Host reply that marks a restart query as accepted.
pub const RESTART_SUCCESS: &str = "SUCCESS";

/// Issued when a restart request may be sent to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartTicket {
    pub request_id: Uuid,
}

/// Classified reply to an outbound restart query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestartOutcome {
    Success,
    Rejected(String),
    Failed(TextQueryError),
}

impl RestartOutcome {
    pub fn from_reply(reply: Result<String, TextQueryError>) -> Self {
        match reply {
            Ok(text) if text.trim().eq_ignore_ascii_case(RESTART_SUCCESS) => RestartOutcome::Success,
            Ok(text) => RestartOutcome::Rejected(text),
            Err(err) => RestartOutcome::Failed(err),
        }
    }
}

pub struct AnimationLoop {
    state: AnimationState,
    // Timestamp of the previous tick.
    last_tick: Duration,
    pending_restart: Option<Uuid>,
}

impl AnimationLoop {
    pub fn new(state: AnimationState, started_at: Duration) -> Self {
        Self {
            state,
            last_tick: started_at,
            pending_restart: None,
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AnimationState {
        &mut self.state
    }

    /// Advances rotation by the time elapsed since the previous tick.
    ///
    /// A timestamp earlier than the previous one counts as zero elapsed time.
    pub fn tick(&mut self, now: Duration) {
        let delta = now.saturating_sub(self.last_tick);
        if self.state.spinning {
            self.state.rotation_radians += delta.as_secs_f64();
        }
        self.last_tick = now;
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.set_tint(self.state.tint);
        renderer.set_rotation(self.state.rotation_radians);
        renderer.set_button(self.state.button);
        renderer.render();
    }

    /// Sprite tap.
    pub fn toggle_spin(&mut self) {
        self.state.spinning = !self.state.spinning;
    }

    /// Restart button tap. Returns `None` while a previous request is still outstanding.
    pub fn begin_restart(&mut self) -> Option<RestartTicket> {
        if self.state.restart_in_flight {
            debug!("restart already in flight; ignoring tap");
            return None;
        }

        self.state.restart_in_flight = true;
        self.state.button = ButtonTexture::Disabled;
        self.state.spinning = false;

        let request_id = Uuid::new_v4();
        self.pending_restart = Some(request_id);
        info!(%request_id, "restart request in flight");
        Some(RestartTicket { request_id })
    }

    /// Observes the host's reply to a restart request.
    ///
    /// The button stays disabled whatever the outcome; only a RESTART_GAME command
    /// re-enables it. Returns false when the reply does not belong to the pending request.
    pub fn on_restart_reply(&mut self, request_id: Uuid, outcome: &RestartOutcome) -> bool {
        let current = self.state.restart_in_flight && self.pending_restart == Some(request_id);
        if !current {
            debug!(%request_id, "stale restart reply");
            return false;
        }
        self.pending_restart = None;

        match outcome {
            RestartOutcome::Success => info!(%request_id, "restart accepted by host"),
            RestartOutcome::Rejected(reply) => {
                warn!(%request_id, reply = %reply, "restart not accepted by host")
            }
            RestartOutcome::Failed(error) => warn!(%request_id, %error, "restart request failed"),
        }
        true
    }
}
