use crate::use_cases::SceneHandle;

#[derive(Clone)]
pub struct AppState {
    // The session's scene task: inbound events and published frames.
    pub scene: SceneHandle,
}
