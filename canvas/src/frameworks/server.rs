// Framework bootstrap for the canvas runtime.

use crate::frameworks::config;
use crate::interface_adapters::clients::host::HostClient;
use crate::interface_adapters::clock::MonotonicClock;
use crate::interface_adapters::renderer::TracingRenderer;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use crate::use_cases::{SceneSettings, spawn_scene};

use std::net::SocketAddr;
use std::{io::Result, sync::Arc};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

fn build_state() -> Result<Arc<AppState>> {
    let host_url = config::host_url();
    let text_query_timeout = config::text_query_timeout();
    let host_client = HostClient::new(host_url.clone(), text_query_timeout)
        .map_err(|e| std::io::Error::other(format!("failed to initialize host client: {e}")))?;
    tracing::debug!(
        host_url = %host_url,
        text_query_timeout_ms = text_query_timeout.as_millis(),
        "host client configured"
    );

    // The scene task owns the session's animation state from here on.
    let scene = spawn_scene(
        TracingRenderer::default(),
        MonotonicClock::new(),
        Arc::new(host_client),
        SceneSettings {
            event_channel_capacity: config::EVENT_CHANNEL_CAPACITY,
            frame_interval: config::frame_interval(),
            default_tint: config::DEFAULT_TINT,
            stats_interval: config::STATS_INTERVAL,
        },
    );

    Ok(Arc::new(AppState { scene }))
}
