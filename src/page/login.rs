use crate::{
	form::{AuthForm, AuthMode},
	hooks::use_client,
	page::Route,
	store::AppState,
	sync::auth::{self, SignIn},
	util::web_ext::FormValue,
};
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_store;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Input {
	FirstName,
	LastName,
	Email,
	Password,
	ConfirmPassword,
}

#[function_component]
pub fn Login() -> Html {
	let (_, dispatch) = use_store::<AppState>();
	let client = use_client();
	let navigator = use_navigator();
	let mode = use_state_eq(AuthMode::default);
	let form = use_state_eq(AuthForm::default);
	let error = use_state_eq(|| None::<String>);
	let loading = use_state_eq(|| false);

	let set_input = {
		let form = form.clone();
		Callback::from(move |(input, value): (Input, String)| {
			let mut next = (*form).clone();
			match input {
				Input::FirstName => next.first_name = value,
				Input::LastName => next.last_name = value,
				Input::Email => next.email = value,
				Input::Password => next.password = value,
				Input::ConfirmPassword => next.confirm_password = value,
			}
			form.set(next);
		})
	};
	let on_input = |input: Input| {
		let set = set_input.filter_reform(move |evt: InputEvent| evt.input_value().map(|value| (input, value)));
		Callback::from(move |evt: InputEvent| {
			set.emit(evt);
		})
	};

	let toggle_mode = {
		let mode = mode.clone();
		let error = error.clone();
		Callback::from(move |_: MouseEvent| {
			mode.set(mode.toggled());
			error.set(None);
		})
	};

	let onsubmit = {
		let mode = mode.clone();
		let form = form.clone();
		let error = error.clone();
		let loading = loading.clone();
		Callback::from(move |evt: SubmitEvent| {
			evt.prevent_default();
			error.set(None);
			loading.set(true);
			let client = client.clone();
			let dispatch = dispatch.clone();
			let navigator = navigator.clone();
			let mode = *mode;
			let form = (*form).clone();
			let error = error.clone();
			let loading = loading.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match auth::submit(&client, &dispatch, mode, &form).await {
					Ok(SignIn::Invalid(message)) => error.set(Some(message.to_owned())),
					Ok(SignIn::SignedIn(_)) => {
						if let Some(navigator) = navigator {
							navigator.push(&Route::Feed);
						}
					}
					Err(err) => {
						log::error!(target: "session", "{} failed: {err}", mode.submit_label());
						error.set(Some(err.message_or(mode.failure_message())));
					}
				}
				loading.set(false);
			});
		})
	};

	let input = |id: &'static str, kind: &'static str, placeholder: &'static str, value: &String, field: Input| {
		html! {
			<div class="mb-3">
				<label for={id} class="visually-hidden">{placeholder}</label>
				<input
					{id} type={kind} class="form-control form-control-lg"
					{placeholder}
					value={value.clone()}
					oninput={on_input(field)}
				/>
			</div>
		}
	};
	let signup = *mode == AuthMode::Signup;

	html! {
		<div class="d-flex justify-content-center">
			<div class="card p-4 w-100" style="max-width: 420px;">
				<h2 class="text-center text-info mb-4">{mode.title()}</h2>
				<form {onsubmit}>
					{signup.then(|| html! {<>
						{input("firstName", "text", "First name", &form.first_name, Input::FirstName)}
						{input("lastName", "text", "Last name", &form.last_name, Input::LastName)}
					</>})}
					{input("email", "email", "Enter your email", &form.email, Input::Email)}
					{input("password", "password", "Enter your password", &form.password, Input::Password)}
					{signup.then(|| input("confirmPassword", "password", "Confirm your password", &form.confirm_password, Input::ConfirmPassword))}
					{(*error).clone().map(|error| html!(<p class="text-danger small text-center">{error}</p>))}
					<button type="submit" class="btn btn-info btn-lg w-100" disabled={*loading}>
						{match *loading {
							true => html!(<span class="spinner-border spinner-border-sm" role="status" />),
							false => html! { {mode.submit_label()} },
						}}
					</button>
				</form>
				<button class="btn btn-link mt-3" onclick={toggle_mode}>
					{match *mode {
						AuthMode::Login => "New here? Create an account",
						AuthMode::Signup => "Already registered? Log in",
					}}
				</button>
			</div>
		</div>
	}
}
