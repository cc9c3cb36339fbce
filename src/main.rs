use yew::prelude::*;
use yew_router::BrowserRouter;

pub mod api;
pub mod components;
pub mod config;
pub mod data;
pub mod form;
pub mod hooks;
pub mod logging;
pub mod page;
pub mod response;
pub mod route;
pub mod store;
pub mod sync;
pub mod util;

#[cfg(test)]
mod testing;

#[cfg(target_family = "wasm")]
fn main() {
	let config = match config::Config::load() {
		Ok(config) => config,
		Err(err) => {
			let config = config::Config::default();
			logging::init(logging::Config::default().with_level(config.log_level).prefer_target());
			log::error!(target: "config", "{err:#}, falling back to {}", config.api_base_url);
			return render(config);
		}
	};
	logging::init(logging::Config::default().with_level(config.log_level).prefer_target());
	render(config);
}

#[cfg(not(target_family = "wasm"))]
fn main() {
	eprintln!("devconnect-rs runs in the browser; build it for wasm32-unknown-unknown.");
}

#[cfg(target_family = "wasm")]
fn render(config: config::Config) {
	log::info!(target: "config", "using api at {}", config.api_base_url);
	let client = api::Client::new(&config);
	yew::Renderer::<App>::with_props(AppProps { client }).render();
}

#[derive(Clone, PartialEq, Properties)]
pub struct AppProps {
	pub client: api::Client,
}

#[function_component]
fn App(AppProps { client }: &AppProps) -> Html {
	html! {
		<ContextProvider<api::Client> context={client.clone()}>
			<BrowserRouter>
				<components::shell::Shell />
			</BrowserRouter>
		</ContextProvider<api::Client>>
	}
}
