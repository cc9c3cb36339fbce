use crate::api::Error;
use log::Level;

pub mod web_ext;

/// Runs a backend call on the browser's event loop for its side effects.
/// Failures are only logged: an expired session as a warning, anything else
/// as an error.
pub fn spawn_local<F>(target: &'static str, future: F)
where
	F: futures_util::Future<Output = Result<(), Error>> + 'static,
{
	wasm_bindgen_futures::spawn_local(async move {
		if let Err(err) = future.await {
			log::log!(target: target, severity(&err), "{err}");
		}
	});
}

fn severity(err: &Error) -> Level {
	match err {
		Error::Unauthorized => Level::Warn,
		Error::Status { .. } | Error::Transport(_) | Error::InvalidJson(_) => Level::Error,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn expired_session_is_a_warning() {
		assert_eq!(severity(&Error::Unauthorized), Level::Warn);
		let failed = Error::Status {
			status: 503,
			message: Some("maintenance".into()),
		};
		assert_eq!(severity(&failed), Level::Error);
	}
}
