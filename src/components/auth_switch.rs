use crate::store::AppState;
use yew::prelude::*;
use yewdux::prelude::use_store_value;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct AuthSwitchProps {
	#[prop_or_default]
	pub identified: Option<Html>,
	#[prop_or_default]
	pub anonymous: Option<Html>,
}

/// Renders `identified` while a session user is cached, `anonymous` otherwise.
#[function_component]
pub fn AuthSwitch(props: &AuthSwitchProps) -> Html {
	let state = use_store_value::<AppState>();
	let empty = || html! {};
	match &state.user {
		Some(_) => props.identified.clone().unwrap_or_else(empty),
		None => props.anonymous.clone().unwrap_or_else(empty),
	}
}
