use crate::{
	api::Error,
	hooks::{use_client, use_load},
	store::AppState,
	sync::{
		connections::{self, LOAD_FAILED},
		Fetch, Policy,
	},
};
use futures_util::future::LocalBoxFuture;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[function_component]
pub fn Connections() -> Html {
	let (state, dispatch) = use_store::<AppState>();
	let client = use_client();
	let load = use_load("connections", LOAD_FAILED, true, move || -> LocalBoxFuture<'static, Result<Fetch, Error>> {
		let client = client.clone();
		let dispatch = dispatch.clone();
		Box::pin(async move { connections::load(&client, &dispatch, Policy::IfAbsent).await })
	});

	let content = match (&load.error, &state.connections) {
		_ if load.loading => html! {
			<div class="text-center text-info fs-5">{"Loading connections..."}</div>
		},
		(Some(error), _) => html! {
			<div class="text-center text-danger fs-5">{error}</div>
		},
		(None, Some(connections)) if !connections.is_empty() => html! {
			<div class="row row-cols-1 row-cols-sm-2 row-cols-lg-3 g-4">
				{connections.iter().map(|connection| html! {
					<div class="col" key={connection.id.0.clone()}>
						<div class="card h-100 text-center p-4">
							<img
								class="rounded-circle object-fit-cover border border-4 border-info mx-auto"
								width="96" height="96"
								src={connection.photo_url.clone().unwrap_or_default()}
								alt={format!("{}'s profile", connection.first_name)}
							/>
							<h3 class="mt-3 fs-5 text-info">{connection.full_name()}</h3>
							<p class="text-muted small mb-0">{&connection.bio}</p>
						</div>
					</div>
				}).collect::<Html>()}
			</div>
		},
		_ => html! {
			<div class="text-center text-muted fs-5">{"You don't have any connections yet."}</div>
		},
	};

	html! {
		<div class="d-flex flex-column align-items-center">
			<h2 class="mb-4">{"Your Connections"}</h2>
			<div class="w-100">{content}</div>
		</div>
	}
}
