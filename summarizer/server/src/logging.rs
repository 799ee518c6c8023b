use tracing_subscriber::{
	EnvFilter,
	fmt::{format::Writer, time::FormatTime},
};

const DEFAULT_FILTER: &str = "info";

struct LocalTime;

impl FormatTime for LocalTime {
	fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
		write!(w, "{}", chrono::Local::now().format("%m-%d %H:%M:%S"))
	}
}

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
	tracing_subscriber::fmt().with_env_filter(filter).with_timer(LocalTime).init();
}
