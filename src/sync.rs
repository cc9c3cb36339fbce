//! Fetch-and-cache routines shared by the views.
//!
//! Each routine talks to a [`Backend`](crate::api::Backend) and writes the
//! outcome into the store through a [`StoreHandle`]. Nothing here touches the
//! DOM, so the views stay thin and the routines run under plain unit tests.
use crate::{
	api::Error,
	store::{AppState, Delta, StoreHandle},
};
use std::future::Future;

pub mod auth;
pub mod connections;
pub mod feed;
pub mod profile;
pub mod requests;
pub mod session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
	/// The slice was already cached; no request was sent.
	Cached,
	/// The slice was (re)loaded and holds this many entries.
	Loaded(usize),
}

/// Whether a load should skip slices which are already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
	IfAbsent,
	Refresh,
}

/// Loads a list slice unless it is cached (or `Policy::Refresh` is asked for).
pub async fn load_list<S, T, F, Fut>(
	store: &S,
	policy: Policy,
	is_cached: fn(&AppState) -> bool,
	fetch: F,
	into_delta: fn(Vec<T>) -> Delta,
) -> Result<Fetch, Error>
where
	S: StoreHandle + ?Sized,
	F: FnOnce() -> Fut,
	Fut: Future<Output = Result<Vec<T>, Error>>,
{
	if policy == Policy::IfAbsent && is_cached(&store.snapshot()) {
		return Ok(Fetch::Cached);
	}
	let items = fetch().await?;
	let count = items.len();
	store.apply(into_delta(items));
	Ok(Fetch::Loaded(count))
}
