use yew::prelude::*;
use yew_router::Routable;

pub mod connections;
pub mod feed;
pub mod login;
pub mod profile;
pub mod requests;

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Feed,
	#[at("/login")]
	Login,
	#[at("/connections")]
	Connections,
	#[at("/requests")]
	Requests,
	#[at("/profile")]
	Profile,
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl crate::route::Route for Route {
	fn html(self) -> Html {
		match self {
			Self::Feed => html!(<feed::Feed />),
			Self::Login => html!(<login::Login />),
			Self::Connections => html!(<connections::Connections />),
			Self::Requests => html!(<requests::Requests />),
			Self::Profile => html!(<profile::ProfileEditor />),
			Self::NotFound => html! {
				<h1 class="text-center mt-5">{"404: Page not found"}</h1>
			},
		}
	}

	fn title(&self) -> &'static str {
		match self {
			Self::Feed => "Feed",
			Self::Login => "Login",
			Self::Connections => "Connections",
			Self::Requests => "Requests",
			Self::Profile => "Profile",
			Self::NotFound => "Not Found",
		}
	}
}
