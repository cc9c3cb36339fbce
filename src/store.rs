use crate::data::{ConnectionRequest, RequestId, User, UserId};
use std::rc::Rc;
use yewdux::{prelude::*, store::Reducer};

/// Client-side cache of everything fetched from the backend.
///
/// Each slice is `None` until it has been loaded once. After that it holds the
/// last server snapshot with any local deltas applied on top.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
	pub user: Option<User>,
	pub feed: Option<Vec<User>>,
	pub connections: Option<Vec<User>>,
	pub requests: Option<Vec<ConnectionRequest>>,
}

/// A single change to the store. All writes go through [`AppState::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum Delta {
	/// Replace the session user (session restore, profile save).
	SetUser(User),
	/// A fresh login or signup; slices cached for a previous session are dropped.
	BeginSession(User),
	EndSession,
	SetFeed(Vec<User>),
	/// Remove a swiped candidate from the feed.
	DropCandidate(UserId),
	SetConnections(Vec<User>),
	SetRequests(Vec<ConnectionRequest>),
	/// Remove a reviewed request.
	DropRequest(RequestId),
}

impl AppState {
	pub fn reduce(&mut self, delta: Delta) {
		match delta {
			Delta::SetUser(user) => {
				self.user = Some(user);
			}
			Delta::BeginSession(user) => {
				*self = Self {
					user: Some(user),
					..Default::default()
				};
			}
			Delta::EndSession => {
				*self = Self::default();
			}
			Delta::SetFeed(feed) => {
				self.feed = Some(feed);
			}
			Delta::DropCandidate(id) => {
				if let Some(feed) = &mut self.feed {
					if let Some(idx) = feed.iter().position(|user| user.id == id) {
						feed.remove(idx);
					}
				}
			}
			Delta::SetConnections(connections) => {
				self.connections = Some(connections);
			}
			Delta::SetRequests(requests) => {
				self.requests = Some(requests);
			}
			Delta::DropRequest(id) => {
				if let Some(requests) = &mut self.requests {
					requests.retain(|request| request.id != id);
				}
			}
		}
	}
}

impl Reducer<AppState> for Delta {
	fn apply(self, state: Rc<AppState>) -> Rc<AppState> {
		let mut next = (*state).clone();
		next.reduce(self);
		Rc::new(next)
	}
}

/// Read/write access to the store from async sync routines.
pub trait StoreHandle {
	fn snapshot(&self) -> Rc<AppState>;
	fn apply(&self, delta: Delta);
}

impl StoreHandle for Dispatch<AppState> {
	fn snapshot(&self) -> Rc<AppState> {
		self.get()
	}

	fn apply(&self, delta: Delta) {
		Dispatch::apply(self, delta);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{request, user};

	#[test]
	fn drop_candidate_keeps_order() {
		let mut store = AppState::default();
		store.reduce(Delta::SetFeed(vec![user("a"), user("b"), user("c"), user("d")]));
		store.reduce(Delta::DropCandidate("b".into()));
		let ids = store.feed.unwrap().into_iter().map(|u| u.id.0).collect::<Vec<_>>();
		assert_eq!(ids, vec!["a", "c", "d"]);
	}

	#[test]
	fn drop_candidate_on_unloaded_feed() {
		let mut store = AppState::default();
		store.reduce(Delta::DropCandidate("a".into()));
		assert_eq!(store.feed, None);
	}

	#[test]
	fn begin_session_clears_dependent_slices() {
		let mut store = AppState::default();
		store.reduce(Delta::SetUser(user("old")));
		store.reduce(Delta::SetFeed(vec![user("a")]));
		store.reduce(Delta::SetConnections(vec![user("b")]));
		store.reduce(Delta::SetRequests(vec![request("r1", "c")]));
		store.reduce(Delta::BeginSession(user("new")));
		assert_eq!(store.user, Some(user("new")));
		assert_eq!(store.feed, None);
		assert_eq!(store.connections, None);
		assert_eq!(store.requests, None);
	}

	#[test]
	fn drop_request() {
		let mut store = AppState::default();
		store.reduce(Delta::SetRequests(vec![request("r1", "a"), request("r2", "b")]));
		store.reduce(Delta::DropRequest("r1".into()));
		assert_eq!(store.requests, Some(vec![request("r2", "b")]));
	}

	#[test]
	fn reducer_leaves_previous_snapshot_alone() {
		let before = Rc::new(AppState {
			feed: Some(vec![user("a")]),
			..Default::default()
		});
		let after = Delta::DropCandidate("a".into()).apply(before.clone());
		assert_eq!(before.feed.as_ref().map(Vec::len), Some(1));
		assert_eq!(after.feed.as_ref().map(Vec::len), Some(0));
	}
}
