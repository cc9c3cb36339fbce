use super::{load_list, Fetch, Policy};
use crate::{
	api::{Backend, Error},
	data::{Interest, User, UserId},
	store::{AppState, Delta, StoreHandle},
};

/// What the feed view can show for a given store snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedView<'a> {
	Unknown,
	Empty,
	Candidate(&'a User),
}
impl<'a> From<&'a AppState> for FeedView<'a> {
	fn from(state: &'a AppState) -> Self {
		match &state.feed {
			None => Self::Unknown,
			Some(feed) => match feed.first() {
				None => Self::Empty,
				Some(head) => Self::Candidate(head),
			},
		}
	}
}

pub async fn load<B, S>(backend: &B, store: &S, policy: Policy) -> Result<Fetch, Error>
where
	B: Backend + ?Sized,
	S: StoreHandle + ?Sized,
{
	load_list(
		store,
		policy,
		|state| state.feed.is_some(),
		|| backend.feed(),
		Delta::SetFeed,
	)
	.await
}

/// Swipes on the head candidate.
///
/// The candidate leaves the local feed before the server is told, and stays
/// gone even if the notification fails. Returns the swiped candidate, or
/// `None` when the feed had nothing to show.
pub async fn swipe<B, S>(backend: &B, store: &S, interest: Interest) -> Result<Option<UserId>, Error>
where
	B: Backend + ?Sized,
	S: StoreHandle + ?Sized,
{
	let head = match store.snapshot().feed.as_ref().and_then(|feed| feed.first()) {
		Some(head) => head.id.clone(),
		None => return Ok(None),
	};
	store.apply(Delta::DropCandidate(head.clone()));
	backend.send_interest(interest, &head).await?;
	Ok(Some(head))
}
