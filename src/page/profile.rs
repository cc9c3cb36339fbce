use crate::{
	components::UserCard,
	data::{Gender, User},
	form::{Field, FieldErrors, ProfileForm},
	hooks::use_client,
	store::AppState,
	sync::profile::{self, Submit, SAVE_FAILED},
	util::web_ext::FormValue,
};
use enumset::EnumSet;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[derive(Debug, Clone, PartialEq)]
enum Banner {
	Success(&'static str),
	Error(String),
}

#[function_component]
pub fn ProfileEditor() -> Html {
	let (state, dispatch) = use_store::<AppState>();
	let client = use_client();
	let form = use_state_eq(|| state.user.as_ref().map(ProfileForm::from).unwrap_or_default());
	let errors = use_state_eq(FieldErrors::new);
	let saving = use_state_eq(|| false);
	let banner = use_state_eq(|| None::<Banner>);

	use_effect_with(state.user.clone(), {
		let form = form.clone();
		move |user: &Option<User>| {
			form.set(user.as_ref().map(ProfileForm::from).unwrap_or_default());
		}
	});

	let Some(user) = state.user.clone() else {
		return html! {
			<div class="text-center mt-5">
				<p>{"User profile not found. Please log in to edit your profile."}</p>
			</div>
		};
	};

	let set_field = {
		let form = form.clone();
		let errors = errors.clone();
		Callback::from(move |(field, value): (Field, String)| {
			let mut next = (*form).clone();
			next.set(field, value);
			form.set(next);
			if errors.contains_key(&field) {
				let mut next = (*errors).clone();
				next.remove(&field);
				errors.set(next);
			}
		})
	};
	let on_input = |field: Field| {
		let set = set_field.filter_reform(move |evt: InputEvent| evt.input_value().map(|value| (field, value)));
		Callback::from(move |evt: InputEvent| {
			set.emit(evt);
		})
	};
	let on_select = {
		let set = set_field.filter_reform(|evt: Event| evt.select_value().map(|value| (Field::Gender, value)));
		Callback::from(move |evt: Event| {
			set.emit(evt);
		})
	};
	let on_bio = {
		let set = set_field.filter_reform(|evt: InputEvent| evt.textarea_value().map(|value| (Field::Bio, value)));
		Callback::from(move |evt: InputEvent| {
			set.emit(evt);
		})
	};

	let onsubmit = {
		let form = form.clone();
		let errors = errors.clone();
		let saving = saving.clone();
		let banner = banner.clone();
		Callback::from(move |evt: SubmitEvent| {
			evt.prevent_default();
			banner.set(None);
			errors.set(FieldErrors::new());
			if let Err(invalid) = form.validate() {
				errors.set(invalid);
				banner.set(Some(Banner::Error("Please correct the errors.".into())));
				return;
			}
			saving.set(true);
			let client = client.clone();
			let dispatch = dispatch.clone();
			let form = (*form).clone();
			let errors = errors.clone();
			let saving = saving.clone();
			let banner = banner.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match profile::submit(&client, &dispatch, &form).await {
					Ok(Submit::Saved(_)) => {
						saving.set(false);
						banner.set(Some(Banner::Success("Profile updated successfully!")));
					}
					Ok(Submit::Invalid(invalid)) => {
						saving.set(false);
						errors.set(invalid);
					}
					Err(err) => {
						log::error!(target: "profile", "failed to save profile: {err}");
						saving.set(false);
						banner.set(Some(Banner::Error(err.message_or(SAVE_FAILED))));
					}
				}
			});
		})
	};

	let loading = *saving;
	let field_class = |field: Field| match errors.contains_key(&field) {
		true => "form-control is-invalid",
		false => "form-control",
	};
	let field_error = |field: Field| {
		errors.get(&field).map(|message| html!(<div class="invalid-feedback d-block">{*message}</div>))
	};

	html! {
		<div class="row g-4 justify-content-center">
			<div class="col-lg-6">
				<div class="card p-4">
					<div class="d-flex flex-column align-items-center mb-4">
						<img
							class="rounded-circle object-fit-cover border border-4 border-info"
							width="96" height="96"
							src={user.photo_url.clone().unwrap_or_default()}
							alt="User profile"
						/>
						<h1 class="fs-3 text-info mt-3">{"Edit Profile"}</h1>
					</div>
					{loading.then(|| html!(<div class="alert alert-secondary text-center">{"Updating profile..."}</div>))}
					{(*banner).clone().map(|banner| match banner {
						Banner::Success(text) => html!(<div class="alert alert-success text-center">{text}</div>),
						Banner::Error(text) => html!(<div class="alert alert-danger text-center">{text}</div>),
					})}
					<form {onsubmit}>
						<div class="row g-3 mb-3">
							<div class="col-sm-6">
								<label for="firstName" class="form-label">{"First Name"}</label>
								<input
									type="text" id="firstName"
									class={field_class(Field::FirstName)}
									value={form.first_name.clone()}
									oninput={on_input(Field::FirstName)}
								/>
								{field_error(Field::FirstName)}
							</div>
							<div class="col-sm-6">
								<label for="lastName" class="form-label">{"Last Name"}</label>
								<input
									type="text" id="lastName"
									class={field_class(Field::LastName)}
									value={form.last_name.clone()}
									oninput={on_input(Field::LastName)}
								/>
								{field_error(Field::LastName)}
							</div>
						</div>
						<div class="row g-3 mb-3">
							<div class="col-sm-6">
								<label for="age" class="form-label">{"Age"}</label>
								<input
									type="number" id="age" min="1"
									class={field_class(Field::Age)}
									value={form.age.clone()}
									oninput={on_input(Field::Age)}
								/>
								{field_error(Field::Age)}
							</div>
							<div class="col-sm-6">
								<label for="gender" class="form-label">{"Gender"}</label>
								<select
									id="gender"
									class={match errors.contains_key(&Field::Gender) {
										true => "form-select is-invalid",
										false => "form-select",
									}}
									onchange={on_select}
								>
									<option value="" selected={form.gender.is_empty()}>{"Select..."}</option>
									{EnumSet::<Gender>::all().into_iter().map(|gender| html!(
										<option value={gender.value()} selected={form.gender == gender.value()}>
											{gender.display_name()}
										</option>
									)).collect::<Html>()}
								</select>
								{field_error(Field::Gender)}
							</div>
						</div>
						<div class="mb-4">
							<label for="bio" class="form-label">{"About"}</label>
							<textarea
								id="bio" rows="4" class="form-control"
								value={form.bio.clone()}
								oninput={on_bio}
							/>
						</div>
						<button type="submit" class="btn btn-info w-100" disabled={loading}>
							{if loading { "Saving..." } else { "Save Profile" }}
						</button>
					</form>
				</div>
			</div>
			<div class="col-lg-4">
				<UserCard {user} show_actions=false />
			</div>
		</div>
	}
}
