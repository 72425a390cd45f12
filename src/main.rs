use anyhow::Result;
use mockup_server::api;
use mockup_server::core::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::default();
    let host = config.host.clone();
    let port = config.port.clone();
    api::serve(host, port, config).await;
    Ok(())
}
