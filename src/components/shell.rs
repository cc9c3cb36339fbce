use crate::{
	components::nav::{Footer, NavBar},
	hooks::use_client,
	page::Route,
	store::AppState,
	sync::session::{self, Bootstrap},
};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, use_route};
use yewdux::prelude::use_store;

/// Page chrome around the routed view. Restores the cookie session once, on
/// first mount.
#[function_component]
pub fn Shell() -> Html {
	let (_, dispatch) = use_store::<AppState>();
	let client = use_client();
	let navigator = use_navigator();
	let route = use_route::<Route>();

	use_effect_with((), move |_| {
		wasm_bindgen_futures::spawn_local(async move {
			let on_login = route == Some(Route::Login);
			let outcome = session::bootstrap(&client, &dispatch).await;
			match &outcome {
				Bootstrap::SignedOut => log::info!(target: "session", "no active session"),
				Bootstrap::Failed(err) => log::error!(target: "session", "failed to restore session: {err}"),
				Bootstrap::Cached | Bootstrap::Restored => {}
			}
			if let (Some(navigator), Some(target)) = (&navigator, session::redirect(&outcome, on_login)) {
				navigator.replace(&target);
			}
		});
	});

	html! {<>
		<NavBar />
		<main class="container py-4">
			{ <Route as crate::route::Route>::switch() }
		</main>
		<Footer />
	</>}
}
