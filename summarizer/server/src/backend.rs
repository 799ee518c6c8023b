use {
	bon::bon,
	reqwest::{Client, StatusCode},
	serde::{Deserialize, Serialize},
	std::time::Duration,
	thiserror::Error,
	tracing::{debug, error, warn},
	url::Url,
};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "llama3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum BackendError {
	#[error("backend answered {status}: {body}")]
	Status { status: StatusCode, body: String },
	#[error("backend is unreachable: {0}")]
	Unreachable(#[source] reqwest::Error),
	#[error("backend did not answer within {0:?}")]
	Timeout(Duration),
	#[error("backend generated an empty response")]
	EmptyResponse,
	#[error("unexpected backend failure: {0}")]
	Unexpected(#[from] reqwest::Error),
}

#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
	model: &'a str,
	prompt: &'a str,
	stream: bool,
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
	#[serde(default)]
	response: String,
}

/// Non-streaming client for an Ollama-compatible `/api/generate` endpoint.
#[derive(Clone, Debug)]
pub struct OllamaClient {
	http: Client,
	endpoint: Url,
	model: String,
	timeout: Duration,
}

#[bon]
impl OllamaClient {
	#[builder]
	pub fn new(endpoint: Url, #[builder(into)] model: String, #[builder(default = DEFAULT_TIMEOUT)] timeout: Duration) -> Result<Self, BackendError> {
		let http = Client::builder().timeout(timeout).build()?;
		Ok(Self { http, endpoint, model, timeout })
	}
}

impl OllamaClient {
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	pub fn model(&self) -> &str {
		&self.model
	}

	/// Runs one generation and returns the trimmed text. Never retries.
	pub async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
		debug!(endpoint = %self.endpoint, model = %self.model, "calling backend");
		let res = self
			.http
			.post(self.endpoint.clone())
			.json(&GenerateRequest { model: &self.model, prompt, stream: false })
			.send()
			.await
			.map_err(|e| self.classify(e))?;

		let status = res.status();
		if status != StatusCode::OK {
			let body = match res.text().await {
				Ok(body) => body,
				Err(e) => {
					warn!(%status, "Failed to read Ollama error body: {e}");
					String::new()
				},
			};
			error!(%status, "Ollama returned error: {body}");
			return Err(BackendError::Status { status, body });
		}

		let data = res.json::<GenerateResponse>().await.map_err(|e| self.classify(e))?;
		let text = data.response.trim();
		if text.is_empty() {
			warn!("Ollama returned empty response");
			return Err(BackendError::EmptyResponse);
		}
		Ok(text.to_owned())
	}

	fn classify(&self, e: reqwest::Error) -> BackendError {
		if e.is_timeout() {
			error!("Request to Ollama timed out after {:?}", self.timeout);
			BackendError::Timeout(self.timeout)
		} else if e.is_connect() {
			error!("Could not connect to Ollama at {}. Is 'ollama serve' running?", self.endpoint);
			BackendError::Unreachable(e)
		} else {
			error!("Unexpected error while calling Ollama: {e}");
			BackendError::Unexpected(e)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_body_is_non_streaming() {
		let body = serde_json::to_value(GenerateRequest { model: "llama3", prompt: "hi", stream: false }).unwrap();
		assert_eq!(body, serde_json::json!({ "model": "llama3", "prompt": "hi", "stream": false }));
	}

	#[test]
	fn missing_response_field_reads_as_empty() {
		let res: GenerateResponse = serde_json::from_str(r#"{"done": true}"#).unwrap();
		assert!(res.response.is_empty());
	}

	#[test]
	fn builder_defaults_to_sixty_seconds() {
		let client = OllamaClient::builder().endpoint(Url::parse(DEFAULT_ENDPOINT).unwrap()).model(DEFAULT_MODEL).build().unwrap();
		assert_eq!(client.timeout, Duration::from_secs(60));
		assert_eq!(client.model(), "llama3");
		assert_eq!(client.endpoint().as_str(), DEFAULT_ENDPOINT);
	}
}
