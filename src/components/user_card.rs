use crate::data::User;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct UserCardProps {
	pub user: User,
	#[prop_or(true)]
	pub show_actions: bool,
	#[prop_or_default]
	pub on_accept: Callback<()>,
	#[prop_or_default]
	pub on_ignore: Callback<()>,
}

#[function_component]
pub fn UserCard(props: &UserCardProps) -> Html {
	let user = &props.user;
	let alt = format!("{}'s profile photo", user.first_name);
	html! {
		<div class="card user-card text-center">
			<figure class="d-flex justify-content-center pt-4 mb-3">
				<img
					class="rounded-circle object-fit-cover border border-4 border-info"
					width="160" height="160"
					src={user.photo_url.clone().unwrap_or_default()}
					{alt}
				/>
			</figure>
			<div class="card-body">
				<h2 class="card-title text-info">{user.full_name()}</h2>
				{user.byline().map(|byline| html!(<p class="text-muted small">{byline}</p>))}
				<p class="card-text">{&user.bio}</p>
				{props.show_actions.then(|| html! {
					<div class="d-flex justify-content-center gap-3">
						<button class="btn btn-outline-danger" onclick={props.on_ignore.reform(|_: MouseEvent| ())}>
							{"Ignore"}
						</button>
						<button class="btn btn-info" onclick={props.on_accept.reform(|_: MouseEvent| ())}>
							{"Interested"}
						</button>
					</div>
				})}
			</div>
		</div>
	}
}
