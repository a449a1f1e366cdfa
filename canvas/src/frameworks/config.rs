use crate::domain::Tint;
use std::{env, time::Duration};

// Runtime/server settings read from the environment, with local defaults.

pub fn http_port() -> u16 {
    env::var("CANVAS_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3100)
}

pub fn host_url() -> String {
    env::var("CANVAS_HOST_URL").unwrap_or_else(|_| "http://127.0.0.1:3101".to_string())
}

pub fn text_query_timeout() -> Duration {
    let millis = env::var("CANVAS_TEXT_QUERY_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(5000);
    Duration::from_millis(millis)
}

pub fn frame_interval() -> Duration {
    let millis = env::var("CANVAS_FRAME_INTERVAL_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|millis| *millis > 0)
        .unwrap_or(1000 / 60);
    Duration::from_millis(millis)
}

pub const EVENT_CHANNEL_CAPACITY: usize = 1024;
pub const STATS_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_TINT: Tint = Tint::GREEN;
