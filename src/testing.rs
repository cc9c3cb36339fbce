//! In-memory stand-ins for the backend and the store.
use crate::{
	api::{Backend, Credentials, Error, ProfilePatch, Registration},
	data::{ConnectionRequest, Interest, RequestId, Review, User, UserId},
	store::{AppState, Delta, StoreHandle},
};
use futures_util::future::LocalBoxFuture;
use std::{
	cell::{Cell, RefCell},
	collections::HashSet,
	rc::Rc,
};

pub fn user(id: &str) -> User {
	User {
		id: id.into(),
		first_name: format!("First {id}"),
		last_name: format!("Last {id}"),
		..Default::default()
	}
}

pub fn request(id: &str, from: &str) -> ConnectionRequest {
	ConnectionRequest {
		id: id.into(),
		from: user(from),
	}
}

#[derive(Default)]
pub struct MemoryStore(RefCell<AppState>);
impl MemoryStore {
	pub fn with(state: AppState) -> Self {
		Self(RefCell::new(state))
	}

	pub fn state(&self) -> AppState {
		self.0.borrow().clone()
	}
}
impl StoreHandle for MemoryStore {
	fn snapshot(&self) -> Rc<AppState> {
		Rc::new(self.0.borrow().clone())
	}

	fn apply(&self, delta: Delta) {
		self.0.borrow_mut().reduce(delta);
	}
}

/// Records every call as `"METHOD /path"` and answers with canned data.
#[derive(Default)]
pub struct FakeBackend {
	pub calls: RefCell<Vec<String>>,
	pub user: RefCell<Option<User>>,
	pub feed: RefCell<Vec<User>>,
	pub connections: RefCell<Vec<User>>,
	pub requests: RefCell<Vec<ConnectionRequest>>,
	/// Paths which answer 500.
	pub failing: RefCell<HashSet<String>>,
	pub unauthorized: Cell<bool>,
}

impl FakeBackend {
	pub fn fail(&self, path: &str) {
		self.failing.borrow_mut().insert(path.to_owned());
	}

	pub fn calls(&self) -> Vec<String> {
		self.calls.borrow().clone()
	}

	fn answer<T: 'static>(&self, method: &str, path: String, value: T) -> LocalBoxFuture<'static, Result<T, Error>> {
		self.calls.borrow_mut().push(format!("{method} {path}"));
		let result = if self.unauthorized.get() {
			Err(Error::Unauthorized)
		} else if self.failing.borrow().contains(&path) {
			Err(Error::Status {
				status: 500,
				message: Some(format!("{path} exploded")),
			})
		} else {
			Ok(value)
		};
		Box::pin(async move { result })
	}

	fn session_user(&self) -> User {
		self.user.borrow().clone().unwrap_or_else(|| user("me"))
	}
}

impl Backend for FakeBackend {
	fn current_user(&self) -> LocalBoxFuture<'static, Result<User, Error>> {
		self.answer("GET", "/profile/view".into(), self.session_user())
	}

	fn login(&self, credentials: Credentials) -> LocalBoxFuture<'static, Result<User, Error>> {
		let mut user = self.session_user();
		user.email = Some(credentials.email);
		self.answer("POST", "/login".into(), user)
	}

	fn signup(&self, registration: Registration) -> LocalBoxFuture<'static, Result<User, Error>> {
		let mut user = self.session_user();
		user.first_name = registration.first_name;
		user.last_name = registration.last_name;
		user.email = Some(registration.email);
		self.answer("POST", "/signup".into(), user)
	}

	fn logout(&self) -> LocalBoxFuture<'static, Result<(), Error>> {
		self.answer("POST", "/logout".into(), ())
	}

	fn edit_profile(&self, patch: ProfilePatch) -> LocalBoxFuture<'static, Result<User, Error>> {
		let mut user = self.session_user();
		user.first_name = patch.first_name;
		user.last_name = patch.last_name;
		user.age = Some(patch.age);
		user.gender = Some(patch.gender);
		user.bio = patch.bio;
		self.answer("PATCH", "/profile/edit".into(), user)
	}

	fn feed(&self) -> LocalBoxFuture<'static, Result<Vec<User>, Error>> {
		self.answer("GET", "/feed".into(), self.feed.borrow().clone())
	}

	fn send_interest(&self, interest: Interest, user: &UserId) -> LocalBoxFuture<'static, Result<(), Error>> {
		self.answer("POST", format!("/request/send/{}/{user}", interest.value()), ())
	}

	fn connections(&self) -> LocalBoxFuture<'static, Result<Vec<User>, Error>> {
		self.answer("GET", "/user/connections".into(), self.connections.borrow().clone())
	}

	fn received_requests(&self) -> LocalBoxFuture<'static, Result<Vec<ConnectionRequest>, Error>> {
		self.answer("GET", "/user/requests/received".into(), self.requests.borrow().clone())
	}

	fn review_request(&self, review: Review, request: &RequestId) -> LocalBoxFuture<'static, Result<(), Error>> {
		self.answer("POST", format!("/request/review/{}/{request}", review.value()), ())
	}
}
