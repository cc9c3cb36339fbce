//! Routes the `log` facade to the browser console.
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy)]
pub struct Config {
	level: LevelFilter,
	prefer_target: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			level: LevelFilter::Debug,
			prefer_target: false,
		}
	}
}

impl Config {
	pub fn with_level(mut self, level: LevelFilter) -> Self {
		self.level = level;
		self
	}

	/// Prefix lines with the record's target instead of its module path.
	pub fn prefer_target(mut self) -> Self {
		self.prefer_target = true;
		self
	}
}

struct ConsoleLogger {
	config: Config,
}

impl ConsoleLogger {
	fn prefix<'a>(&self, record: &'a Record<'_>) -> &'a str {
		match (self.config.prefer_target, record.module_path()) {
			(false, Some(module)) => module,
			_ => record.target(),
		}
	}
}

impl Log for ConsoleLogger {
	fn enabled(&self, metadata: &Metadata<'_>) -> bool {
		metadata.level() <= self.config.level
	}

	fn log(&self, record: &Record<'_>) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let line = format!("[{}] {}: {}", record.level(), self.prefix(record), record.args());
		let line = JsValue::from_str(&line);
		match record.level() {
			Level::Error => web_sys::console::error_1(&line),
			Level::Warn => web_sys::console::warn_1(&line),
			Level::Info => web_sys::console::info_1(&line),
			Level::Debug => web_sys::console::debug_1(&line),
			Level::Trace => web_sys::console::log_1(&line),
		}
	}

	fn flush(&self) {}
}

pub fn init(config: Config) {
	let level = config.level;
	if log::set_boxed_logger(Box::new(ConsoleLogger { config })).is_ok() {
		log::set_max_level(level);
	}
}
