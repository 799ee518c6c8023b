use {
	crate::backend::{DEFAULT_ENDPOINT, DEFAULT_MODEL},
	axum::http::HeaderValue,
	clap::Parser,
	common::DEFAULT_PAGE_ORIGIN,
	std::{net::SocketAddr, time::Duration},
	url::Url,
};

/// Runtime configuration. Every flag falls back to an environment variable,
/// which may come from a `.env` file.
#[derive(Parser, Debug, Clone)]
#[command(name = "summarizer-server", author = "Summit Sailors", version, about = "Text summarization API relaying to a local Ollama server", long_about = None)]
pub struct Config {
	/// Address the API listens on
	#[arg(long, env = "SUMMARIZER_BIND", default_value = "127.0.0.1:8000")]
	pub bind: SocketAddr,

	/// Ollama generation endpoint
	#[arg(long, env = "SUMMARIZER_BACKEND_URL", default_value = DEFAULT_ENDPOINT)]
	pub backend_url: Url,

	/// Model passed to the backend
	#[arg(long, env = "SUMMARIZER_MODEL", default_value = DEFAULT_MODEL)]
	pub model: String,

	/// Seconds to wait for the backend before giving up
	#[arg(long, env = "SUMMARIZER_TIMEOUT_SECS", default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
	pub timeout_secs: u64,

	/// The single origin allowed to call the API from a browser
	#[arg(long, env = "SUMMARIZER_ALLOWED_ORIGIN", default_value = DEFAULT_PAGE_ORIGIN)]
	pub allowed_origin: HeaderValue,
}

impl Config {
	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}
}
