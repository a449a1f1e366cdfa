// Routes inbound command batches from the host onto the animation state.

use crate::domain::{AnimationState, Command, CommandError, Tint};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

/// Errors returned by a dispatch attempt. The state is untouched whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    EmptyBatch,
    Command(CommandError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::EmptyBatch => write!(f, "empty command batch"),
            DispatchError::Command(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DispatchError {}

impl From<CommandError> for DispatchError {
    fn from(err: CommandError) -> Self {
        DispatchError::Command(err)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CommandRouter {
    // Color RESTART_GAME falls back to.
    default_tint: Tint,
}

impl CommandRouter {
    pub fn new(default_tint: Tint) -> Self {
        Self { default_tint }
    }

    pub fn default_tint(&self) -> Tint {
        self.default_tint
    }

    /// Applies the first message of `batch`; any further messages are ignored.
    ///
    /// The message is parsed completely before `state` is touched, so a rejected
    /// batch never leaves a partial mutation behind.
    pub fn dispatch(
        &self,
        state: &mut AnimationState,
        batch: &[Value],
    ) -> Result<Command, DispatchError> {
        let first = batch.first().ok_or(DispatchError::EmptyBatch)?;
        let command = Command::parse(first)?;

        if batch.len() > 1 {
            debug!(ignored = batch.len() - 1, "ignoring trailing commands in batch");
        }

        command.apply(state, self.default_tint);
        Ok(command)
    }

    /// Inbound channel callback. Never fails: rejected batches are logged and dropped.
    pub fn on_update(&self, state: &mut AnimationState, batch: &[Value]) {
        match self.dispatch(state, batch) {
            Ok(command) => debug!(command = command.name(), "command applied"),
            Err(DispatchError::EmptyBatch) => debug!("empty command batch"),
            Err(error) => warn!(%error, "command rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ButtonTexture;
    use serde_json::json;

    const RED: u32 = 0xFF0000;

    fn setup() -> (CommandRouter, AnimationState) {
        (
            CommandRouter::new(Tint::GREEN),
            AnimationState::new(Tint::GREEN),
        )
    }

    #[test]
    fn when_tint_is_dispatched_in_lowercase_then_tint_changes() {
        let (router, mut state) = setup();

        let result = router.dispatch(&mut state, &[json!({ "command": "tint", "tint": RED })]);

        assert_eq!(
            result,
            Ok(Command::Tint {
                tint: Tint::new(RED).unwrap()
            })
        );
        assert_eq!(state.tint.rgb(), RED);
    }

    #[test]
    fn when_recognized_commands_use_mixed_casing_then_each_applies() {
        let (router, mut state) = setup();

        router
            .dispatch(&mut state, &[json!({ "command": "Spin", "spin": false })])
            .unwrap();
        assert!(!state.spinning);

        router
            .dispatch(&mut state, &[json!({ "command": "tInT", "tint": 0x0000FF })])
            .unwrap();
        assert_eq!(state.tint.rgb(), 0x0000FF);

        router
            .dispatch(&mut state, &[json!({ "command": "Restart_Game" })])
            .unwrap();
        assert_eq!(state, AnimationState::new(Tint::GREEN));
    }

    #[test]
    fn when_batch_is_empty_then_state_is_unchanged() {
        let (router, mut state) = setup();
        let before = state.clone();

        assert_eq!(
            router.dispatch(&mut state, &[]),
            Err(DispatchError::EmptyBatch)
        );
        router.on_update(&mut state, &[]);

        assert_eq!(state, before);
    }

    #[test]
    fn when_first_command_is_unknown_then_state_is_unchanged() {
        let (router, mut state) = setup();
        let before = state.clone();

        let batch = [
            json!({ "command": "DANCE" }),
            json!({ "command": "SPIN", "spin": false }),
        ];
        assert!(matches!(
            router.dispatch(&mut state, &batch),
            Err(DispatchError::Command(CommandError::UnknownCommand(_)))
        ));
        router.on_update(&mut state, &batch);

        assert_eq!(state, before);
    }

    #[test]
    fn when_payload_field_is_missing_then_state_is_unchanged() {
        let (router, mut state) = setup();
        let before = state.clone();

        for message in [
            json!({ "command": "TINT" }),
            json!({ "command": "SPIN" }),
            json!({ "command": "SPIN", "spin": "no" }),
            json!({ "tint": RED }),
            json!("TINT"),
        ] {
            assert!(router.dispatch(&mut state, &[message.clone()]).is_err());
            router.on_update(&mut state, &[message]);
        }

        assert_eq!(state, before);
    }

    #[test]
    fn when_batch_has_several_commands_then_only_first_applies() {
        let (router, mut state) = setup();

        router.on_update(
            &mut state,
            &[
                json!({ "command": "TINT", "tint": RED }),
                json!({ "command": "SPIN", "spin": false }),
            ],
        );

        assert_eq!(state.tint.rgb(), RED);
        assert!(state.spinning);
    }

    #[test]
    fn when_spin_false_is_dispatched_twice_then_state_matches_single_dispatch() {
        let (router, mut once) = setup();
        let mut twice = once.clone();
        let batch = [json!({ "command": "SPIN", "spin": false })];

        router.on_update(&mut once, &batch);
        router.on_update(&mut twice, &batch);
        router.on_update(&mut twice, &batch);

        assert_eq!(once, twice);
    }

    #[test]
    fn when_restart_game_arrives_after_stop_and_red_then_state_is_reset() {
        let (router, mut state) = setup();
        state.spinning = false;
        state.tint = Tint::new(RED).unwrap();
        state.rotation_radians = 3.0;
        state.restart_in_flight = true;
        state.button = ButtonTexture::Disabled;

        router.on_update(&mut state, &[json!({ "command": "RESTART_GAME" })]);

        assert!(state.spinning);
        assert_eq!(state.tint, Tint::GREEN);
        assert_eq!(state.rotation_radians, 0.0);
        assert!(!state.restart_in_flight);
        assert_eq!(state.button, ButtonTexture::Enabled);
    }

    #[test]
    fn restart_uses_the_configured_default_tint() {
        let router = CommandRouter::new(Tint::new(0x123456).unwrap());
        let mut state = AnimationState::new(Tint::GREEN);

        router.on_update(&mut state, &[json!({ "command": "RESTART_GAME" })]);

        assert_eq!(state.tint, router.default_tint());
    }
}
