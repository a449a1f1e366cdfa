use std::env;

// Runtime/server settings read from the environment, with local defaults.

pub fn http_port() -> u16 {
    env::var("FULFILLMENT_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

pub fn canvas_url() -> String {
    env::var("CANVAS_URL").unwrap_or_else(|_| "http://127.0.0.1:3100".to_string())
}
