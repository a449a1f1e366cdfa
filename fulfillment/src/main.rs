#[tokio::main]
async fn main() -> std::io::Result<()> {
    fulfillment::run_with_config().await
}
