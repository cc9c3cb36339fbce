use super::{load_list, Fetch, Policy};
use crate::{
	api::{Backend, Error},
	store::{Delta, StoreHandle},
};

pub static LOAD_FAILED: &str = "Failed to fetch connections.";

pub async fn load<B, S>(backend: &B, store: &S, policy: Policy) -> Result<Fetch, Error>
where
	B: Backend + ?Sized,
	S: StoreHandle + ?Sized,
{
	load_list(
		store,
		policy,
		|state| state.connections.is_some(),
		|| backend.connections(),
		Delta::SetConnections,
	)
	.await
}
