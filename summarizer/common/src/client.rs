use {
	crate::{AppError, ErrorResponse, SummarizeRequest, SummarizeResponse},
	reqwest::Client,
};

/// How long the page waits for the API service. Slightly above the service's
/// own backend timeout so that its 504 reaches us first.
#[cfg(not(target_arch = "wasm32"))]
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(65);

/// HTTP client for the summarizer API service.
#[derive(Clone, Debug)]
pub struct SummarizerClient {
	http: Client,
	base_url: String,
}

impl SummarizerClient {
	pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
		let builder = Client::builder();
		#[cfg(not(target_arch = "wasm32"))]
		let builder = builder.timeout(REQUEST_TIMEOUT);
		let http = builder.build().map_err(|e| AppError::Unexpected(format!("failed to build http client: {e}")))?;
		let base_url = base_url.into().trim_end_matches('/').to_owned();
		Ok(Self { http, base_url })
	}

	/// Sends `text` to the API service and returns the trimmed summary.
	pub async fn summarize(&self, text: &str) -> Result<String, AppError> {
		let res = self
			.http
			.post(format!("{}/summarize/", self.base_url))
			.json(&SummarizeRequest { text: text.to_owned() })
			.send()
			.await
			.map_err(|e| self.transport_error(&e))?;

		if !res.status().is_success() {
			let status = res.status();
			let body = res.text().await.map_err(|e| self.transport_error(&e))?;
			tracing::warn!("summarizer API answered {status}: {body}");
			let detail = match serde_json::from_str::<ErrorResponse>(&body) {
				Ok(err) => err.detail,
				Err(_) if body.trim().is_empty() => format!("HTTP {status}"),
				Err(_) => body,
			};
			return Err(AppError::Server(detail));
		}

		let summary_res = res.json::<SummarizeResponse>().await.map_err(|e| AppError::Unexpected(format!("failed to parse summary: {e}")))?;
		let summary = summary_res.summary.trim();
		if summary.is_empty() {
			return Err(AppError::EmptySummary);
		}
		Ok(summary.to_owned())
	}

	fn transport_error(&self, e: &reqwest::Error) -> AppError {
		if e.is_timeout() {
			AppError::Timeout
		} else if is_unreachable(e) {
			AppError::Network(self.base_url.clone())
		} else {
			AppError::Unexpected(e.to_string())
		}
	}
}

#[cfg(not(target_arch = "wasm32"))]
fn is_unreachable(e: &reqwest::Error) -> bool {
	e.is_connect()
}

// fetch() does not distinguish a refused connection from other network failures
#[cfg(target_arch = "wasm32")]
fn is_unreachable(e: &reqwest::Error) -> bool {
	e.is_request()
}
