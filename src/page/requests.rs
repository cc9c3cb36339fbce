use crate::{
	api::Error,
	data::{ConnectionRequest, RequestId, Review},
	hooks::{use_client, use_load},
	store::AppState,
	sync::{
		requests::{self, ActionState, ActionStates, LOAD_FAILED},
		Fetch, Policy,
	},
};
use futures_util::future::LocalBoxFuture;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[function_component]
pub fn Requests() -> Html {
	let (state, dispatch) = use_store::<AppState>();
	let client = use_client();
	let load = use_load("requests", LOAD_FAILED, true, {
		let client = client.clone();
		let dispatch = dispatch.clone();
		move || -> LocalBoxFuture<'static, Result<Fetch, Error>> {
			let client = client.clone();
			let dispatch = dispatch.clone();
			Box::pin(async move { requests::load(&client, &dispatch, Policy::IfAbsent).await })
		}
	});
	// Reviews can overlap; every completion writes through the shared map and
	// the state handle mirrors it for rendering.
	let shared_actions = use_mut_ref(ActionStates::default);
	let actions = use_state_eq(ActionStates::default);
	let action_error = use_state_eq(|| None::<String>);

	let review = Callback::from({
		let action_error = action_error.clone();
		let actions = actions.clone();
		move |(verdict, id): (Review, RequestId)| {
			let client = client.clone();
			let dispatch = dispatch.clone();
			let action_error = action_error.clone();
			let actions = actions.clone();
			let shared_actions = shared_actions.clone();
			let set_action = {
				let id = id.clone();
				move |state: ActionState| {
					let next = shared_actions.borrow().with(id.clone(), state);
					*shared_actions.borrow_mut() = next.clone();
					actions.set(next);
				}
			};
			set_action(ActionState::Loading);
			wasm_bindgen_futures::spawn_local(async move {
				match requests::review(&client, &dispatch, verdict, id.clone()).await {
					Ok(()) => set_action(ActionState::Succeeded),
					Err(err) => {
						log::error!(target: "requests", "failed to review {id}: {err}");
						action_error.set(Some(err.message_or(verdict.failure_message())));
						set_action(ActionState::Failed);
					}
				}
			});
		}
	});

	let error = load.error.as_ref().or((*action_error).as_ref());
	let content = match (error, &state.requests) {
		_ if load.loading => html! {
			<div class="text-center text-info fs-5">{"Loading requests..."}</div>
		},
		(Some(error), _) => html! {
			<div class="text-center text-danger fs-5">{error}</div>
		},
		(None, Some(list)) if !list.is_empty() => html! {
			<div class="row row-cols-1 row-cols-sm-2 row-cols-lg-3 g-4">
				{list.iter().map(|request| html! {
					<RequestCard
						key={request.id.0.clone()}
						request={request.clone()}
						state={actions.get(&request.id)}
						on_review={review.clone()}
					/>
				}).collect::<Html>()}
			</div>
		},
		_ => html! {
			<div class="text-center text-muted fs-5">{"No new connection requests."}</div>
		},
	};

	html! {
		<div class="d-flex flex-column align-items-center">
			<h2 class="mb-4">{"Connection Requests"}</h2>
			<div class="w-100">{content}</div>
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct RequestCardProps {
	request: ConnectionRequest,
	state: ActionState,
	on_review: Callback<(Review, RequestId)>,
}

#[function_component]
fn RequestCard(props: &RequestCardProps) -> Html {
	let sender = &props.request.from;
	let busy = props.state == ActionState::Loading;
	let on_review = |verdict: Review| {
		let id = props.request.id.clone();
		props.on_review.reform(move |_: MouseEvent| (verdict, id.clone()))
	};
	html! {
		<div class="col">
			<div class="card h-100 text-center p-4">
				{match &sender.photo_url {
					Some(src) => html!(<img
						class="rounded-circle object-fit-cover border border-4 border-info mx-auto"
						width="96" height="96"
						src={src.clone()}
						alt={format!("{}'s profile", sender.first_name)}
					/>),
					None => html!(<i class="bi bi-person-circle display-3 text-info" />),
				}}
				<h3 class="mt-3 fs-5 text-info">{sender.full_name()}</h3>
				{(!sender.bio.is_empty()).then(|| html!(<p class="text-muted small">{&sender.bio}</p>))}
				<div class="mt-3 d-flex justify-content-center gap-3">
					<button class="btn btn-info" onclick={on_review(Review::Accepted)} disabled={busy}>
						{if busy { "Accepting..." } else { "Accept" }}
					</button>
					<button class="btn btn-secondary" onclick={on_review(Review::Rejected)} disabled={busy}>
						{if busy { "Rejecting..." } else { "Reject" }}
					</button>
				</div>
			</div>
		</div>
	}
}
