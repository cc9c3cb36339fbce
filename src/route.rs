use yew::prelude::*;
use yew_router::Routable;

static APP_TITLE: &str = "DevConnect";

/// A routable view. Each route renders itself and names the browser tab.
pub trait Route: Routable + 'static {
	fn html(self) -> Html;

	fn title(&self) -> &'static str;

	fn switch() -> Html {
		html! { <RouteSwitch<Self> /> }
	}
}

pub fn document_title(title: &str) -> String {
	format!("{APP_TITLE} | {title}")
}

#[function_component]
fn RouteSwitch<T>() -> Html
where
	T: Route,
{
	let render = |route: T| {
		gloo_utils::document().set_title(&document_title(route.title()));
		route.html()
	};
	html! { <yew_router::Switch<T> {render} /> }
}
