use std::sync::Arc;

// Application state shared by the webhook handlers.
#[derive(Clone)]
pub struct AppState {
    // Address of the canvas web app opened on welcome.
    pub canvas_url: Arc<str>,
}
