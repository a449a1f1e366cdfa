// WebSocket command channel: the host streams one batch per text frame.

use crate::interface_adapters::protocol::parse_batch;
use crate::interface_adapters::state::AppState;
use crate::use_cases::SceneEvent;

use axum::{
    extract::{
        State,
        ws::{CloseFrame, Message, WebSocket, WebSocketUpgrade, close_code},
    },
    response::IntoResponse,
};
use futures::StreamExt;
use std::{
    sync::Arc,
    sync::atomic::{AtomicU64, Ordering},
    time::{Duration, Instant},
};
use tokio::sync::mpsc;
use tracing::{Instrument, debug, info, info_span, warn};

const LOG_THROTTLE: Duration = Duration::from_secs(2);
const MAX_INVALID_JSON: u32 = 10;

static NEXT_CONN_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug)]
enum NetError {
    #[allow(dead_code)]
    Ws(axum::Error),
    SceneClosed,
    TooManyInvalidFrames,
}

impl From<axum::Error> for NetError {
    fn from(e: axum::Error) -> Self {
        NetError::Ws(e)
    }
}

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let events_tx = state.scene.events_tx.clone();
    ws.on_upgrade(move |socket| handle_socket(socket, events_tx))
}

async fn handle_socket(socket: WebSocket, events_tx: mpsc::Sender<SceneEvent>) {
    // Connection id for correlating logs of one host channel.
    let conn_id = NEXT_CONN_ID.fetch_add(1, Ordering::Relaxed);
    serve_channel(socket, events_tx)
        .instrument(info_span!("host_conn", conn_id))
        .await;
}

async fn serve_channel(mut socket: WebSocket, events_tx: mpsc::Sender<SceneEvent>) {
    info!("host channel connected");

    match run_channel_loop(&mut socket, &events_tx).await {
        Ok(stats) => info!(
            batches = stats.batches,
            invalid_json = stats.invalid_json,
            "host channel closed"
        ),
        Err(NetError::TooManyInvalidFrames) => {
            warn!("too many invalid frames; closing host channel");
            let _ = socket
                .send(Message::Close(Some(CloseFrame {
                    code: close_code::POLICY,
                    reason: "too many invalid frames".into(),
                })))
                .await;
        }
        Err(e) => warn!(error = ?e, "host channel exited with error"),
    }
}

#[derive(Debug, Default)]
struct ChannelStats {
    batches: u64,
    invalid_json: u32,
}

async fn run_channel_loop(
    socket: &mut WebSocket,
    events_tx: &mpsc::Sender<SceneEvent>,
) -> Result<ChannelStats, NetError> {
    let mut stats = ChannelStats::default();
    let mut last_invalid_log = Instant::now() - LOG_THROTTLE;

    while let Some(incoming) = socket.next().await {
        match incoming? {
            Message::Text(text) => match parse_batch(text.as_str()) {
                Ok(batch) => {
                    stats.batches += 1;
                    events_tx
                        .send(SceneEvent::Update(batch))
                        .await
                        .map_err(|_| NetError::SceneClosed)?;
                }
                Err(error) => {
                    stats.invalid_json += 1;
                    if should_log(&mut last_invalid_log) {
                        warn!(%error, invalid_json = stats.invalid_json, "invalid batch frame");
                    }
                    if stats.invalid_json >= MAX_INVALID_JSON {
                        return Err(NetError::TooManyInvalidFrames);
                    }
                }
            },
            Message::Binary(_) => debug!("ignoring binary frame"),
            Message::Close(_) => break,
            // Ping/pong is answered by the websocket layer.
            Message::Ping(_) | Message::Pong(_) => {}
        }
    }

    Ok(stats)
}

fn should_log(last: &mut Instant) -> bool {
    if last.elapsed() >= LOG_THROTTLE {
        *last = Instant::now();
        true
    } else {
        false
    }
}
