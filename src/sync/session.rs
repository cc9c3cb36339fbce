use crate::{
	api::{Backend, Error},
	page::Route,
	store::{Delta, StoreHandle},
};

#[derive(Debug)]
pub enum Bootstrap {
	/// A session user was already in the store.
	Cached,
	/// The server confirmed the cookie session and the user is now cached.
	Restored,
	/// The server rejected the session.
	SignedOut,
	Failed(Error),
}

/// Restores the session user from the cookie session, unless one is cached.
pub async fn bootstrap<B, S>(backend: &B, store: &S) -> Bootstrap
where
	B: Backend + ?Sized,
	S: StoreHandle + ?Sized,
{
	if store.snapshot().user.is_some() {
		return Bootstrap::Cached;
	}
	match backend.current_user().await {
		Ok(user) => {
			log::debug!(target: "session", "restored session for {}", user.id);
			store.apply(Delta::SetUser(user));
			Bootstrap::Restored
		}
		Err(Error::Unauthorized) => Bootstrap::SignedOut,
		Err(err) => Bootstrap::Failed(err),
	}
}

/// Where the shell sends the visitor once the session is known, if anywhere.
pub fn redirect(outcome: &Bootstrap, on_login: bool) -> Option<Route> {
	match outcome {
		Bootstrap::Cached if on_login => Some(Route::Feed),
		Bootstrap::SignedOut if !on_login => Some(Route::Login),
		Bootstrap::Cached | Bootstrap::Restored | Bootstrap::SignedOut | Bootstrap::Failed(_) => None,
	}
}

/// Ends the server session and forgets everything cached for it.
/// The store is only cleared once the server has confirmed.
pub async fn logout<B, S>(backend: &B, store: &S) -> Result<(), Error>
where
	B: Backend + ?Sized,
	S: StoreHandle + ?Sized,
{
	backend.logout().await?;
	store.apply(Delta::EndSession);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		store::AppState,
		testing::{user, FakeBackend, MemoryStore},
	};
	use futures::executor::block_on;

	#[test]
	fn restores_when_absent() {
		let backend = FakeBackend::default();
		*backend.user.borrow_mut() = Some(user("u1"));
		let store = MemoryStore::default();
		assert!(matches!(block_on(bootstrap(&backend, &store)), Bootstrap::Restored));
		assert_eq!(store.state().user, Some(user("u1")));
		assert_eq!(backend.calls(), vec!["GET /profile/view"]);
	}

	#[test]
	fn cached_user_skips_fetch() {
		let backend = FakeBackend::default();
		let store = MemoryStore::with(AppState {
			user: Some(user("u1")),
			..Default::default()
		});
		assert!(matches!(block_on(bootstrap(&backend, &store)), Bootstrap::Cached));
		assert!(backend.calls().is_empty());
	}

	#[test]
	fn unauthorized_signs_out() {
		let backend = FakeBackend::default();
		backend.unauthorized.set(true);
		let store = MemoryStore::default();
		assert!(matches!(block_on(bootstrap(&backend, &store)), Bootstrap::SignedOut));
		assert_eq!(store.state().user, None);
	}

	#[test]
	fn other_failures_are_reported() {
		let backend = FakeBackend::default();
		backend.fail("/profile/view");
		let store = MemoryStore::default();
		let outcome = block_on(bootstrap(&backend, &store));
		assert!(matches!(outcome, Bootstrap::Failed(Error::Status { status: 500, .. })));
		assert_eq!(store.state().user, None);
	}

	#[test]
	fn cached_user_leaves_login() {
		assert_eq!(redirect(&Bootstrap::Cached, true), Some(Route::Feed));
		assert_eq!(redirect(&Bootstrap::Cached, false), None);
	}

	#[test]
	fn signed_out_goes_to_login_once() {
		assert_eq!(redirect(&Bootstrap::SignedOut, false), Some(Route::Login));
		assert_eq!(redirect(&Bootstrap::SignedOut, true), None);
	}

	#[test]
	fn restored_session_stays_put() {
		assert_eq!(redirect(&Bootstrap::Restored, true), None);
		assert_eq!(redirect(&Bootstrap::Restored, false), None);
	}

	#[test]
	fn failed_bootstrap_stays_put() {
		let outcome = Bootstrap::Failed(Error::Status {
			status: 500,
			message: None,
		});
		assert_eq!(redirect(&outcome, false), None);
		assert_eq!(redirect(&outcome, true), None);
	}

	#[test]
	fn logout_clears_store() {
		let backend = FakeBackend::default();
		let store = MemoryStore::with(AppState {
			user: Some(user("u1")),
			feed: Some(vec![user("a")]),
			..Default::default()
		});
		block_on(logout(&backend, &store)).unwrap();
		assert_eq!(store.state(), AppState::default());
	}

	#[test]
	fn failed_logout_keeps_session() {
		let backend = FakeBackend::default();
		backend.fail("/logout");
		let store = MemoryStore::with(AppState {
			user: Some(user("u1")),
			..Default::default()
		});
		assert!(block_on(logout(&backend, &store)).is_err());
		assert_eq!(store.state().user, Some(user("u1")));
	}
}
