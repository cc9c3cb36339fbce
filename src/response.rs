use crate::{api::Error, data::Payload};
use reqwest::{RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A pending request to the backend whose body decodes into `T`.
pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl<T> Response<T> {
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.json(json);
		self
	}

	async fn read(self) -> Result<String, Error> {
		let response: reqwest::Response = self.builder.send().await?;
		let status = response.status();
		let text = response.text().await?;
		if status == StatusCode::UNAUTHORIZED {
			return Err(Error::Unauthorized);
		}
		if !status.is_success() {
			return Err(Error::Status {
				status: status.as_u16(),
				message: server_message(&text),
			});
		}
		Ok(text)
	}

	/// Sends the request and only checks the status; the body is dropped.
	pub async fn send_discard(self) -> Result<(), Error> {
		self.read().await?;
		Ok(())
	}
}
impl<T> Response<T>
where
	T: DeserializeOwned,
{
	/// Sends the request and decodes the body, with or without a `data` envelope.
	pub async fn send(self) -> Result<T, Error> {
		let text = self.read().await?;
		let output = match serde_json::from_str::<Payload<T>>(&text) {
			Ok(payload) => payload.into_inner(),
			Err(err) => {
				return Err(InvalidJson(text, err))?;
			}
		};
		Ok(output)
	}
}

/// Pulls a human readable message out of an error body.
/// The backend answers either `{"message": "..."}` or plain text.
pub fn server_message(body: &str) -> Option<String> {
	#[derive(Deserialize)]
	struct Body {
		message: String,
	}
	if let Ok(Body { message }) = serde_json::from_str::<Body>(body) {
		return (!message.trim().is_empty()).then_some(message);
	}
	let trimmed = body.trim();
	if trimmed.is_empty() || trimmed.starts_with('{') || trimmed.starts_with('<') {
		return None;
	}
	Some(trimmed.to_owned())
}

#[derive(thiserror::Error, Debug)]
pub struct InvalidJson(pub String, pub serde_json::Error);
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {:?}", self.0, self.1)
	}
}
