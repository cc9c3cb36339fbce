use crate::{
	api::{Backend, Error},
	data::User,
	form::{AuthForm, AuthMode, AuthSubmission},
	store::{Delta, StoreHandle},
};

/// Logs in or signs up, then starts a fresh client-side session.
pub async fn authenticate<B, S>(backend: &B, store: &S, submission: AuthSubmission) -> Result<User, Error>
where
	B: Backend + ?Sized,
	S: StoreHandle + ?Sized,
{
	let user = match submission {
		AuthSubmission::Login(credentials) => backend.login(credentials).await?,
		AuthSubmission::Signup(registration) => backend.signup(registration).await?,
	};
	log::info!(target: "session", "signed in as {}", user.id);
	store.apply(Delta::BeginSession(user.clone()));
	Ok(user)
}

#[derive(Debug, PartialEq)]
pub enum SignIn {
	/// Validation failed with this message; nothing was sent.
	Invalid(&'static str),
	SignedIn(User),
}

/// Validates the login/signup form and, only if it passes, submits it.
pub async fn submit<B, S>(backend: &B, store: &S, mode: AuthMode, form: &AuthForm) -> Result<SignIn, Error>
where
	B: Backend + ?Sized,
	S: StoreHandle + ?Sized,
{
	let submission = match form.validate(mode) {
		Ok(submission) => submission,
		Err(message) => return Ok(SignIn::Invalid(message)),
	};
	Ok(SignIn::SignedIn(authenticate(backend, store, submission).await?))
}
