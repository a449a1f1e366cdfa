#[tokio::main]
async fn main() -> std::io::Result<()> {
    canvas::run_with_config().await
}
