use super::{load_list, Fetch, Policy};
use crate::{
	api::{Backend, Error},
	data::{RequestId, Review},
	store::{Delta, StoreHandle},
};
use std::collections::HashMap;

pub static LOAD_FAILED: &str = "Failed to fetch requests.";

/// Progress of an accept/reject action on a single request card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionState {
	#[default]
	Idle,
	Loading,
	Succeeded,
	Failed,
}

/// Per-request action state, so each card's buttons work independently.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActionStates(HashMap<RequestId, ActionState>);
impl ActionStates {
	pub fn get(&self, id: &RequestId) -> ActionState {
		self.0.get(id).copied().unwrap_or_default()
	}

	pub fn with(&self, id: RequestId, state: ActionState) -> Self {
		let mut next = self.clone();
		next.0.insert(id, state);
		next
	}

	pub fn is_busy(&self, id: &RequestId) -> bool {
		self.get(id) == ActionState::Loading
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
		|state| state.requests.is_some(),
		|| backend.received_requests(),
		Delta::SetRequests,
	)
	.await
}

/// Accepts or rejects a request; it leaves the local list only once the
/// server has agreed.
pub async fn review<B, S>(backend: &B, store: &S, verdict: Review, id: RequestId) -> Result<(), Error>
where
	B: Backend + ?Sized,
	S: StoreHandle + ?Sized,
{
	backend.review_request(verdict, &id).await?;
	store.apply(Delta::DropRequest(id));
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		store::AppState,
		testing::{request, FakeBackend, MemoryStore},
	};
	use futures::executor::block_on;

	fn two_requests() -> MemoryStore {
		MemoryStore::with(AppState {
			requests: Some(vec![request("r1", "a"), request("r2", "b")]),
			..Default::default()
		})
	}

	#[test]
	fn loads_once() {
		let backend = FakeBackend::default();
		*backend.requests.borrow_mut() = vec![request("r1", "a")];
		let store = MemoryStore::default();
		assert_eq!(block_on(load(&backend, &store, Policy::IfAbsent)).unwrap(), Fetch::Loaded(1));
		assert_eq!(block_on(load(&backend, &store, Policy::IfAbsent)).unwrap(), Fetch::Cached);
		assert_eq!(backend.calls(), vec!["GET /user/requests/received"]);
	}

	#[test]
	fn reject_one_leaves_other_operable() {
		let backend = FakeBackend::default();
		let store = two_requests();
		let r1 = RequestId::from("r1");
		let r2 = RequestId::from("r2");

		let states = ActionStates::default().with(r1.clone(), ActionState::Loading);
		assert!(states.is_busy(&r1));
		assert!(!states.is_busy(&r2));

		block_on(review(&backend, &store, Review::Rejected, r1.clone())).unwrap();
		let states = states.with(r1.clone(), ActionState::Succeeded);
		assert_eq!(states.get(&r2), ActionState::Idle);
		assert_eq!(store.state().requests, Some(vec![request("r2", "b")]));
		assert_eq!(backend.calls(), vec!["POST /request/review/rejected/r1"]);

		block_on(review(&backend, &store, Review::Accepted, r2)).unwrap();
		assert_eq!(store.state().requests, Some(vec![]));
	}

	#[test]
	fn failed_review_keeps_item() {
		let backend = FakeBackend::default();
		backend.fail("/request/review/accepted/r2");
		let store = two_requests();
		let err = block_on(review(&backend, &store, Review::Accepted, "r2".into())).unwrap_err();
		assert_eq!(err.message_or(Review::Accepted.failure_message()), "/request/review/accepted/r2 exploded");
		assert_eq!(store.state().requests.map(|list| list.len()), Some(2));
	}
}
