//! Web command handler - starts the embedded Axum server.

use anyhow::Result;

use syscheck_axum::{ServerConfig, start_server};

/// Execute the web command.
pub async fn execute(port: u16, allow_origin: Vec<String>) -> Result<()> {
    let mut config = ServerConfig::with_defaults();
    config.port = port;
    if !allow_origin.is_empty() {
        config = config.with_allowed_origins(allow_origin);
    }

    println!();
    println!("  🚀 syscheck web server starting...");
    println!();
    println!("  🌐 Local:   http://localhost:{port}");
    println!("  🌐 Network: http://0.0.0.0:{port}");
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    start_server(config).await
}
