use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    gateway_panel::cli::run().await
}
