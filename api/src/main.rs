use std::sync::Arc;

use clap::Parser;
use foodscan_api::{
    application::{
        cli::analyze::run_analyze,
        http::server::http_server::{router, state},
        logging::init_logger,
    },
    args::{Args, Command},
};
use foodscan_core::domain::common::FoodScanConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_logger(&args.log);

    let config = FoodScanConfig::from(args.clone());

    match args.command {
        Command::Serve(server_args) => {
            let server_args = Arc::new(server_args);
            let app_state = state(server_args.clone(), &config)?;
            let router = router(app_state)?;

            let addr = format!("{}:{}", server_args.host, server_args.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("listening on {}", listener.local_addr()?);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        Command::Analyze(analyze_args) => {
            run_analyze(&config, &analyze_args).await?;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
    info!("shutting down");
}
