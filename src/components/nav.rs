use crate::{
	components::AuthSwitch,
	hooks::use_client,
	page::Route,
	store::AppState,
	sync::session,
};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};
use yewdux::prelude::use_store;

#[allow(unused_parens)]
#[function_component]
pub fn NavBar() -> Html {
	let (state, dispatch) = use_store::<AppState>();
	let client = use_client();
	let navigator = use_navigator();
	let logout = Callback::from(move |_: MouseEvent| {
		let client = client.clone();
		let dispatch = dispatch.clone();
		let navigator = navigator.clone();
		crate::util::spawn_local("session", async move {
			session::logout(&client, &dispatch).await?;
			if let Some(navigator) = navigator {
				navigator.push(&Route::Login);
			}
			Ok::<(), crate::api::Error>(())
		});
	});
	let identity = state.user.as_ref().map(|user| {
		html! {
			<span class="navbar-text d-flex align-items-center gap-2 me-3">
				{format!("Welcome, {}", user.first_name)}
				{user.photo_url.clone().map(|src| html!(
					<img class="rounded-circle object-fit-cover" width="32" height="32" {src} alt="user photo" />
				))}
			</span>
		}
	});

	html! {
		<nav class="navbar navbar-expand navbar-dark bg-dark px-3">
			<Link<Route> classes={"navbar-brand"} to={Route::Feed}>{"DevConnect"}</Link<Route>>
			<AuthSwitch
				identified={(html! {
					<div class="d-flex align-items-center ms-auto">
						<ul class="navbar-nav me-3">
							<li class="nav-item"><Link<Route> classes={"nav-link"} to={Route::Feed}>{"Feed"}</Link<Route>></li>
							<li class="nav-item"><Link<Route> classes={"nav-link"} to={Route::Connections}>{"Connections"}</Link<Route>></li>
							<li class="nav-item"><Link<Route> classes={"nav-link"} to={Route::Requests}>{"Requests"}</Link<Route>></li>
							<li class="nav-item"><Link<Route> classes={"nav-link"} to={Route::Profile}>{"Profile"}</Link<Route>></li>
						</ul>
						{identity}
						<button class="btn btn-outline-light btn-sm" onclick={logout}>{"Logout"}</button>
					</div>
				})}
				anonymous={(html! {
					<div class="ms-auto">
						<Link<Route> classes={"btn btn-info btn-sm"} to={Route::Login}>{"Login"}</Link<Route>>
					</div>
				})}
			/>
		</nav>
	}
}

#[function_component]
pub fn Footer() -> Html {
	html! {
		<footer class="text-center text-muted small py-3">
			{"DevConnect"}
		</footer>
	}
}
