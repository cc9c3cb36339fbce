use anyhow::Context;
use gloo_storage::{LocalStorage, Storage};
use log::LevelFilter;
use url::Url;

/// Local storage key which, when set, overrides the compiled-in API location.
pub static API_URL_STORAGE_KEY: &str = "devconnect.api_base_url";
const FALLBACK_API_URL: &str = "http://localhost:7777";
static DEFAULT_API_URL: &str = match option_env!("DEVCONNECT_API_URL") {
	Some(url) => url,
	None => FALLBACK_API_URL,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	pub api_base_url: Url,
	pub log_level: LevelFilter,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			api_base_url: Url::parse(DEFAULT_API_URL)
				.or_else(|_| Url::parse(FALLBACK_API_URL))
				.expect("fallback url is valid"),
			log_level: default_log_level(),
		}
	}
}

impl Config {
	/// Reads the browser-side override and falls back to the compiled default.
	pub fn load() -> anyhow::Result<Self> {
		let stored = LocalStorage::get::<String>(API_URL_STORAGE_KEY).ok();
		Self::parse(stored.as_deref())
	}

	pub fn parse(api_url_override: Option<&str>) -> anyhow::Result<Self> {
		let raw = api_url_override
			.map(str::trim)
			.filter(|url| !url.is_empty())
			.unwrap_or(DEFAULT_API_URL);
		let api_base_url = Url::parse(raw).with_context(|| format!("invalid api base url {raw:?}"))?;
		if !matches!(api_base_url.scheme(), "http" | "https") {
			anyhow::bail!("api base url {raw:?} must use http or https");
		}
		Ok(Self {
			api_base_url,
			log_level: default_log_level(),
		})
	}
}

fn default_log_level() -> LevelFilter {
	match cfg!(debug_assertions) {
		true => LevelFilter::Debug,
		false => LevelFilter::Info,
	}
}
