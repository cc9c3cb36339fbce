use crate::{
	api::{Client, Error},
	config::Config,
};
use futures_util::future::LocalBoxFuture;
use std::rc::Rc;
use yew::prelude::*;
use yew_hooks::use_mount;

/// The API client provided at the application root.
#[hook]
pub fn use_client() -> Client {
	use_context::<Client>().unwrap_or_else(|| Client::new(&Config::default()))
}

/// Loading/error state of a load that writes its result into the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadState {
	pub loading: bool,
	pub error: Option<String>,
}

pub struct LoadHandle {
	state: UseStateHandle<LoadState>,
	run: Rc<dyn Fn()>,
}
impl LoadHandle {
	pub fn trigger(&self) -> Callback<MouseEvent> {
		let run = self.run.clone();
		Callback::from(move |_| (*run)())
	}
}
impl std::ops::Deref for LoadHandle {
	type Target = LoadState;

	fn deref(&self) -> &Self::Target {
		&self.state
	}
}

/// Runs `make_future` on mount (when `run_first_mount`) and whenever the
/// handle is triggered. A failure is logged under `target` and rendered as
/// the server's message, or `fallback` when the server gave none.
#[hook]
pub fn use_load<F, T>(target: &'static str, fallback: &'static str, run_first_mount: bool, make_future: F) -> LoadHandle
where
	F: Fn() -> LocalBoxFuture<'static, Result<T, Error>> + 'static,
	T: 'static,
{
	let state = use_state(LoadState::default);
	let make_future = Rc::new(make_future);
	let run = {
		let state = state.clone();
		Rc::new(move || {
			state.set(LoadState {
				loading: true,
				error: None,
			});
			let async_state = state.clone();
			let make_future = make_future.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let final_state = match make_future().await {
					Ok(_) => LoadState::default(),
					Err(err) => {
						log::error!(target: target, "{err}");
						LoadState {
							loading: false,
							error: Some(err.message_or(fallback)),
						}
					}
				};
				async_state.set(final_state);
			});
		})
	};
	let run_on_mount = run.clone();
	use_mount(move || {
		if run_first_mount {
			run_on_mount();
		}
	});
	LoadHandle { state, run }
}
