use bellman_sssp::web::server::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let defaults = ServerConfig::default();
    let port = match args.get(1) {
        Some(arg) => arg.parse()?,
        None => defaults.port,
    };

    let config = ServerConfig { port, ..defaults };
    println!("Starting shortest path server on port {} (CORS: {})", config.port, config.enable_cors);

    start_server_with_config(config).await
}
