pub mod state;

use {
	common::{AppError, SummarizerClient, TextStats},
	dioxus::{
		logger::tracing::{error, info},
		prelude::*,
	},
	state::{Page, PageState},
};

const SERVER_URL: &str = env!("SERVER_URL");

pub fn launch() {
	dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("dioxus logger");
	dioxus::launch(App);
}

#[component]
fn App() -> Element {
	let mut page = use_signal(Page::default);
	let client = use_hook(|| SummarizerClient::new(SERVER_URL));

	let on_summarize = move |_| {
		let client = client.clone();
		async move {
			let Some(text) = page.write().begin_submit() else {
				return;
			};
			info!("Requesting summary of {} characters", text.chars().count());
			let result = match &client {
				Ok(client) => client.summarize(&text).await,
				Err(e) => Err(e.clone()),
			};
			if let Err(e) = &result {
				error!("Summarization failed: {e}");
			}
			page.write().finish(result);
		}
	};

	let view = page();
	let is_loading = view.is_pending();
	let input = view.input().to_owned();
	let input_stats = view.input_stats();
	let error = view.error().cloned();
	let summary = view.summary().map(str::to_owned).zip(view.summary_stats());
	let can_reset = view.can_reset();

	rsx! {
		div { class: "max-w-2xl mx-auto mt-10 p-6 bg-white rounded-lg shadow-md",
			h1 { class: "text-2xl font-bold text-gray-800 mb-2", "LLaMA Text Summarizer" }
			p { class: "text-sm text-gray-600 mb-4",
				"Paste any article, document, or message below and click Summarize. "
				"Summarization can take 10 to 60 seconds depending on the length of your text. "
				"The model runs locally, so your text never leaves your machine."
			}
			label { class: "block text-sm font-medium text-gray-700 mb-1", r#for: "input_text", "Enter the text you want summarized:" }
			textarea {
				class: "w-full h-48 px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
				id: "input_text",
				placeholder: "Paste an article, email, report, or any long text here...",
				disabled: is_loading,
				value: "{input}",
				oninput: move |evt| page.write().edit(evt.value()),
			}
			p { class: "text-right text-xs text-gray-500 mt-1", "{input_stats}" }
			button {
				class: "w-full mt-2 px-4 py-2 text-white font-semibold rounded-md shadow-sm transition-colors duration-200 ease-in-out bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 disabled:cursor-not-allowed",
				disabled: is_loading,
				onclick: on_summarize,
				if is_loading {
					"Summarizing..."
				} else {
					"Summarize"
				}
			}
			div { class: "relative mt-4 min-h-[60px] text-gray-700 text-sm leading-relaxed",
				match view.state() {
						PageState::Empty | PageState::Typed if is_loading => rsx! {
							div { class: "flex items-center justify-center py-4",
								div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600" }
							}
						},
						PageState::Empty | PageState::Typed => rsx! {
							p { class: "text-gray-500", "Your summary will appear here." }
						},
						PageState::Summarized => rsx! {},
						PageState::Error => rsx! {
							if let Some(error) = error.clone() {
								ErrorView { error }
							}
						},
				}
				if let Some((summary, stats)) = summary {
					SummaryView { summary, stats }
				}
			}
			if can_reset {
				button {
					class: "w-full mt-4 px-4 py-2 font-semibold rounded-md border border-gray-300 text-gray-700 bg-white hover:bg-gray-100",
					onclick: move |_| page.write().reset(),
					"Clear Summary + Input"
				}
			}
			hr { class: "my-6" }
			p { class: "text-xs text-center text-gray-500", "Your data stays local. No text is sent to external servers." }
		}
	}
}

#[component]
fn ErrorView(error: AppError) -> Element {
	let unreachable = matches!(error, AppError::Network(_));
	rsx! {
		p { class: "text-red-600 font-medium", "{error}" }
		if unreachable {
			p { class: "mt-1 text-sm text-gray-600", "Start it with `summarizer-server` and make sure Ollama is running." }
		}
	}
}

#[component]
fn SummaryView(summary: String, stats: TextStats) -> Element {
	rsx! {
		h2 { class: "mt-4 text-lg font-semibold text-gray-800", "Summary" }
		p { class: "mt-2 p-3 bg-gray-50 border border-gray-200 rounded-md", "{summary}" }
		p { class: "text-right text-xs text-gray-500 mt-1", "Summary: {stats}" }
	}
}
