use crate::{
	api::Error,
	components::UserCard,
	data::Interest,
	hooks::{use_client, use_load},
	store::AppState,
	sync::{
		feed::{self, FeedView},
		Fetch, Policy,
	},
};
use futures_util::future::LocalBoxFuture;
use yew::prelude::*;
use yewdux::prelude::use_store;

static LOAD_FAILED: &str = "Failed to fetch feed.";

#[function_component]
pub fn Feed() -> Html {
	let (state, dispatch) = use_store::<AppState>();
	let client = use_client();

	let make_load = |policy: Policy| {
		let client = client.clone();
		let dispatch = dispatch.clone();
		move || -> LocalBoxFuture<'static, Result<Fetch, Error>> {
			let client = client.clone();
			let dispatch = dispatch.clone();
			Box::pin(async move { feed::load(&client, &dispatch, policy).await })
		}
	};
	let initial = use_load("feed", LOAD_FAILED, true, make_load(Policy::IfAbsent));
	let refresh = use_load("feed", LOAD_FAILED, false, make_load(Policy::Refresh));

	let swipe = {
		let client = client.clone();
		let dispatch = dispatch.clone();
		Callback::from(move |interest: Interest| {
			let client = client.clone();
			let dispatch = dispatch.clone();
			wasm_bindgen_futures::spawn_local(async move {
				if let Err(err) = feed::swipe(&client, &dispatch, interest).await {
					log::warn!(target: "feed", "{} notification was not delivered: {err}", interest.value());
				}
			});
		})
	};

	let view = FeedView::from(&*state);
	let loading = initial.loading || refresh.loading;
	let error = match loading {
		true => None,
		false => notice(&view, initial.error.as_deref(), refresh.error.as_deref()),
	};
	let body = match view {
		_ if loading => html! {
			<div class="text-center text-info">{"Loading feed..."}</div>
		},
		FeedView::Unknown => html! {},
		FeedView::Empty => html! {
			<div class="text-center text-muted">{"No new developers in your feed right now."}</div>
		},
		FeedView::Candidate(user) => html! {
			<UserCard
				user={user.clone()}
				on_accept={swipe.reform(|_: ()| Interest::Interested)}
				on_ignore={swipe.reform(|_: ()| Interest::Ignored)}
			/>
		},
	};

	html! {
		<div class="d-flex flex-column align-items-center gap-3 feed">
			if let Some(error) = error {
				<div class="text-center text-danger">{error}</div>
			}
			{body}
			<button class="btn btn-outline-secondary btn-sm" onclick={refresh.trigger()} disabled={refresh.loading}>
				{"Refresh"}
			</button>
		</div>
	}
}

/// The error line shown above the feed. A refresh failure is always shown; the
/// mount-time failure only while nothing has been loaded since.
fn notice<'a>(view: &FeedView, initial: Option<&'a str>, refresh: Option<&'a str>) -> Option<&'a str> {
	match view {
		FeedView::Unknown => refresh.or(initial),
		FeedView::Empty | FeedView::Candidate(_) => refresh,
	}
}
