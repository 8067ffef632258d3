use anyhow::Result;
use scrub_config::Config;
use scrub_engine::Analyzer;
use scrub_server::ScrubServer;

pub async fn handle(config: &Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let analyzer = Analyzer::from_config(config)?;

    println!("Starting scrub server on {}:{}", host, port);
    ScrubServer::serve(analyzer, &host, port).await?;

    Ok(())
}
