// Boots one fulfillment server per test binary and hands out its base URL.
use std::{sync::OnceLock, sync::mpsc, time::Duration};

static BASE_URL: OnceLock<String> = OnceLock::new();

pub fn ensure_server() -> &'static str {
    BASE_URL.get_or_init(|| {
        let (addr_tx, addr_rx) = mpsc::sync_channel(1);
        // Own thread and runtime, so the server outlives each `#[tokio::test]` runtime.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                // Bound before publishing: early connects queue in the backlog.
                addr_tx.send(addr).expect("publish test addr");
                fulfillment::run(listener).await.expect("server failed");
            });
        });
        let addr = addr_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("server did not bind in time");
        format!("http://{addr}")
    })
}
