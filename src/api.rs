use crate::{
	config::Config,
	data::{ConnectionRequest, Interest, RequestId, Review, User, UserId},
	response::{InvalidJson, Response},
};
use futures_util::future::LocalBoxFuture;
use reqwest::Method;
use std::rc::Rc;

mod body;
pub use body::*;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("session is not authenticated")]
	Unauthorized,
	#[error("server responded with {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
	Status { status: u16, message: Option<String> },
	#[error(transparent)]
	Transport(#[from] reqwest::Error),
	#[error(transparent)]
	InvalidJson(#[from] InvalidJson),
}
impl Error {
	/// The message the server attached to a failed response, if any.
	pub fn server_message(&self) -> Option<&str> {
		match self {
			Self::Status { message, .. } => message.as_deref(),
			_ => None,
		}
	}

	pub fn message_or(&self, fallback: &str) -> String {
		self.server_message().unwrap_or(fallback).to_owned()
	}
}

/// Everything the views need from the remote service.
///
/// Futures are `'static` so they can be handed straight to `spawn_local`.
pub trait Backend {
	fn current_user(&self) -> LocalBoxFuture<'static, Result<User, Error>>;
	fn login(&self, credentials: Credentials) -> LocalBoxFuture<'static, Result<User, Error>>;
	fn signup(&self, registration: Registration) -> LocalBoxFuture<'static, Result<User, Error>>;
	fn logout(&self) -> LocalBoxFuture<'static, Result<(), Error>>;
	fn edit_profile(&self, patch: ProfilePatch) -> LocalBoxFuture<'static, Result<User, Error>>;
	fn feed(&self) -> LocalBoxFuture<'static, Result<Vec<User>, Error>>;
	fn send_interest(&self, interest: Interest, user: &UserId) -> LocalBoxFuture<'static, Result<(), Error>>;
	fn connections(&self) -> LocalBoxFuture<'static, Result<Vec<User>, Error>>;
	fn received_requests(&self) -> LocalBoxFuture<'static, Result<Vec<ConnectionRequest>, Error>>;
	fn review_request(&self, review: Review, request: &RequestId) -> LocalBoxFuture<'static, Result<(), Error>>;
}

/// The REST client. Every request carries the browser's session cookie.
#[derive(Clone)]
pub struct Client {
	base_url: Rc<str>,
	http: reqwest::Client,
}
impl PartialEq for Client {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.base_url, &other.base_url)
	}
}
impl std::fmt::Debug for Client {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Client").field("base_url", &self.base_url).finish()
	}
}

impl Client {
	pub fn new(config: &Config) -> Self {
		Self {
			base_url: config.api_base_url.as_str().trim_end_matches('/').into(),
			http: reqwest::Client::new(),
		}
	}

	pub fn endpoint(&self, path: &str) -> String {
		format!("{}{path}", self.base_url)
	}

	fn request<T>(&self, method: Method, path: &str) -> Response<T> {
		let endpoint = self.endpoint(path);
		log::debug!(target: "api", "{method} {endpoint}");
		let builder = self.http.request(method, &endpoint);
		#[cfg(target_family = "wasm")]
		let builder = builder.fetch_credentials_include();
		Response::<T>::from(builder)
	}
}

impl Backend for Client {
	fn current_user(&self) -> LocalBoxFuture<'static, Result<User, Error>> {
		Box::pin(self.request::<User>(Method::GET, "/profile/view").send())
	}

	fn login(&self, credentials: Credentials) -> LocalBoxFuture<'static, Result<User, Error>> {
		let request = self.request::<User>(Method::POST, "/login").with_json(&credentials);
		Box::pin(request.send())
	}

	fn signup(&self, registration: Registration) -> LocalBoxFuture<'static, Result<User, Error>> {
		let request = self.request::<User>(Method::POST, "/signup").with_json(&registration);
		Box::pin(request.send())
	}

	fn logout(&self) -> LocalBoxFuture<'static, Result<(), Error>> {
		Box::pin(self.request::<()>(Method::POST, "/logout").send_discard())
	}

	fn edit_profile(&self, patch: ProfilePatch) -> LocalBoxFuture<'static, Result<User, Error>> {
		let request = self.request::<User>(Method::PATCH, "/profile/edit").with_json(&patch);
		Box::pin(request.send())
	}

	fn feed(&self) -> LocalBoxFuture<'static, Result<Vec<User>, Error>> {
		Box::pin(self.request::<Vec<User>>(Method::GET, "/feed").send())
	}

	fn send_interest(&self, interest: Interest, user: &UserId) -> LocalBoxFuture<'static, Result<(), Error>> {
		let path = format!("/request/send/{}/{user}", interest.value());
		let request = self.request::<()>(Method::POST, &path).with_json(&serde_json::json!({}));
		Box::pin(request.send_discard())
	}

	fn connections(&self) -> LocalBoxFuture<'static, Result<Vec<User>, Error>> {
		Box::pin(self.request::<Vec<User>>(Method::GET, "/user/connections").send())
	}

	fn received_requests(&self) -> LocalBoxFuture<'static, Result<Vec<ConnectionRequest>, Error>> {
		let request = self.request::<Vec<ConnectionRequest>>(Method::GET, "/user/requests/received");
		Box::pin(request.send())
	}

	fn review_request(&self, review: Review, request: &RequestId) -> LocalBoxFuture<'static, Result<(), Error>> {
		let path = format!("/request/review/{}/{request}", review.value());
		let request = self.request::<()>(Method::POST, &path).with_json(&serde_json::json!({}));
		Box::pin(request.send_discard())
	}
}
