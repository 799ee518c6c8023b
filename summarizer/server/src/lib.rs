//! # summarizer server
//!
//! HTTP API that turns text into a short summary by relaying it, wrapped in a
//! fixed instruction prompt, to a local Ollama server.
//!
//! ## Endpoints
//!
//! - `GET /health`: `{"status": "ok", "message": "Summarizer API is live"}`
//! - `POST /summarize/`: `{"text": "..."}` to `{"summary": "..."}`, or
//!   `{"detail": "..."}` with status 400, 500, 502, 503 or 504.
//!
//! ## Configuration
//!
//! See [`Config`]. Flags fall back to `SUMMARIZER_*` environment variables,
//! and a `.env` file in the working directory is loaded first.

pub mod backend;
pub mod config;
pub mod cors;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod routes;

use {
	axum::{
		Router,
		http::HeaderValue,
		middleware,
		routing::{get, post},
	},
	backend::{BackendError, OllamaClient},
};

pub use {config::Config, error::ApiError};

#[derive(Clone, Debug)]
pub struct AppState {
	pub backend: OllamaClient,
	pub allowed_origin: HeaderValue,
}

impl AppState {
	pub fn from_config(config: &Config) -> Result<Self, BackendError> {
		let backend = OllamaClient::builder().endpoint(config.backend_url.clone()).model(config.model.clone()).timeout(config.timeout()).build()?;
		Ok(Self { backend, allowed_origin: config.allowed_origin.clone() })
	}
}

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health))
		.route("/summarize/", post(routes::summarize))
		.route("/summarize", post(routes::summarize))
		.fallback(routes::not_found)
		.method_not_allowed_fallback(routes::method_not_allowed)
		.layer(middleware::from_fn_with_state(state.clone(), cors::cors_middleware))
		.with_state(state)
}
