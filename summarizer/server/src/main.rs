use {
	anyhow::{Context, Result},
	clap::Parser,
	server::{AppState, Config, logging, router},
	tokio::net::TcpListener,
	tracing::{debug, info},
};

#[tokio::main]
async fn main() -> Result<()> {
	if let Err(e) = dotenvy::dotenv()
		&& !e.not_found()
	{
		return Err(e).context("Failed to read .env file");
	}
	logging::init();

	let config = Config::parse();
	let state = AppState::from_config(&config).context("Failed to build backend client")?;
	debug!("Backend endpoint: {}", state.backend.endpoint());
	debug!("Model: {}", state.backend.model());
	debug!("Backend timeout: {:?}", config.timeout());
	debug!("Allowed origin: {:?}", state.allowed_origin);
	let listener = TcpListener::bind(config.bind).await.with_context(|| format!("Failed to bind {}", config.bind))?;
	info!("Summarizer API listening on {}", listener.local_addr()?);

	axum::serve(listener, router(state)).with_graceful_shutdown(shutdown_signal()).await.context("Server error")?;
	info!("Summarizer API stopped");
	Ok(())
}

async fn shutdown_signal() {
	if tokio::signal::ctrl_c().await.is_ok() {
		info!("Shutdown requested");
	}
}
