use crate::{
	api::{Backend, Error, ProfilePatch},
	data::User,
	form::{FieldErrors, ProfileForm},
	store::{Delta, StoreHandle},
};

pub static SAVE_FAILED: &str = "An unexpected error occurred.";

/// Sends a validated profile patch and caches the server's copy of the user.
pub async fn save<B, S>(backend: &B, store: &S, patch: ProfilePatch) -> Result<User, Error>
where
	B: Backend + ?Sized,
	S: StoreHandle + ?Sized,
{
	let user = backend.edit_profile(patch).await?;
	store.apply(Delta::SetUser(user.clone()));
	Ok(user)
}

#[derive(Debug, PartialEq)]
pub enum Submit {
	/// Validation failed; nothing was sent.
	Invalid(FieldErrors),
	Saved(User),
}

/// Validates the form and, only if it passes, saves it.
pub async fn submit<B, S>(backend: &B, store: &S, form: &ProfileForm) -> Result<Submit, Error>
where
	B: Backend + ?Sized,
	S: StoreHandle + ?Sized,
{
	let patch = match form.validate() {
		Ok(patch) => patch,
		Err(errors) => return Ok(Submit::Invalid(errors)),
	};
	Ok(Submit::Saved(save(backend, store, patch).await?))
}
