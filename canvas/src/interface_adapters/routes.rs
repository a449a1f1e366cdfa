use crate::interface_adapters::http::{
    frame_state_handler, tap_restart_handler, tap_sprite_handler, update_handler,
};
use crate::interface_adapters::net::ws_handler;
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .route("/update", post(update_handler))
        .route("/tap/sprite", post(tap_sprite_handler))
        .route("/tap/restart", post(tap_restart_handler))
        .route("/state", get(frame_state_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TextQuery, TextQueryError, Tint};
    use crate::interface_adapters::clock::MonotonicClock;
    use crate::interface_adapters::renderer::TracingRenderer;
    use crate::use_cases::{SceneHandle, SceneSettings, spawn_scene};
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::time::Duration;
    use tower::ServiceExt;

    struct AcceptingHost;

    #[async_trait]
    impl TextQuery for AcceptingHost {
        async fn send_text_query(&self, _query: &str) -> Result<String, TextQueryError> {
            Ok("SUCCESS".to_string())
        }
    }

    fn build_test_app() -> (Router, SceneHandle) {
        let scene = spawn_scene(
            TracingRenderer::default(),
            MonotonicClock::new(),
            Arc::new(AcceptingHost),
            SceneSettings {
                event_channel_capacity: 16,
                frame_interval: Duration::from_millis(5),
                default_tint: Tint::GREEN,
                stats_interval: Duration::from_secs(5),
            },
        );
        let state = Arc::new(AppState {
            scene: scene.clone(),
        });
        (app(state), scene)
    }

    fn post_json(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .expect("expected request to build")
    }

    async fn get_state(app: Router) -> Value {
        let request = Request::builder()
            .method("GET")
            .uri("/state")
            .body(Body::empty())
            .expect("expected request to build");
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body");
        serde_json::from_slice(&body).expect("expected json body")
    }

    async fn wait_until(app: &Router, predicate: impl Fn(&Value) -> bool) -> Value {
        for _ in 0..200 {
            let state = get_state(app.clone()).await;
            if predicate(&state) {
                return state;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("state never matched");
    }

    #[tokio::test]
    async fn when_update_batch_is_posted_then_returns_202_and_tint_changes() {
        let (app, scene) = build_test_app();

        let response = app
            .clone()
            .oneshot(post_json(
                "/update",
                r#"[{"command":"tint","tint":16711680}]"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        wait_until(&app, |state| state["tint"] == "#FF0000").await;
        scene.shutdown();
    }

    #[tokio::test]
    async fn when_update_command_is_unknown_then_still_returns_202_and_state_is_unchanged() {
        let (app, scene) = build_test_app();

        let response = app
            .clone()
            .oneshot(post_json("/update", r#"[{"command":"explode"}]"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let state = wait_until(&app, |state| state["frame"].as_u64() > Some(2)).await;
        assert_eq!(state["tint"], "#00FF00");
        assert_eq!(state["spinning"], true);
        scene.shutdown();
    }

    #[tokio::test]
    async fn when_update_body_is_not_an_array_then_returns_422() {
        let (app, scene) = build_test_app();

        let response = app
            .oneshot(post_json("/update", r#"{"command":"SPIN","spin":false}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        scene.shutdown();
    }

    #[tokio::test]
    async fn when_sprite_is_tapped_then_spinning_stops() {
        let (app, scene) = build_test_app();

        let response = app
            .clone()
            .oneshot(post_json("/tap/sprite", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        wait_until(&app, |state| state["spinning"] == false).await;
        scene.shutdown();
    }

    #[tokio::test]
    async fn when_restart_is_tapped_then_button_is_disabled() {
        let (app, scene) = build_test_app();

        let response = app
            .clone()
            .oneshot(post_json("/tap/restart", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let state = wait_until(&app, |state| state["restart_in_flight"] == true).await;
        assert_eq!(state["button"], "disabled");
        assert_eq!(state["spinning"], false);
        scene.shutdown();
    }

    #[tokio::test]
    async fn when_scene_is_stopped_then_returns_503() {
        let (app, scene) = build_test_app();
        scene.shutdown();
        // Wait for the task to drop its receiver.
        scene.events_tx.closed().await;

        let response = app.oneshot(post_json("/tap/sprite", "")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn when_update_route_is_called_with_get_then_returns_405() {
        let (app, scene) = build_test_app();

        let request = Request::builder()
            .method("GET")
            .uri("/update")
            .body(Body::empty())
            .expect("expected request to build");
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        scene.shutdown();
    }
}
