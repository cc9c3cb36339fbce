use crate::data::Gender;
use serde::Serialize;

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
	pub email: String,
	pub password: String,
}

/// Body of `POST /signup`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub password: String,
	pub confirm_password: String,
}

/// Body of `PATCH /profile/edit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
	pub first_name: String,
	pub last_name: String,
	pub age: u32,
	pub gender: Gender,
	pub bio: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn patch_uses_wire_names() {
		let patch = ProfilePatch {
			first_name: "Ada".into(),
			last_name: "Lovelace".into(),
			age: 36,
			gender: Gender::Female,
			bio: String::new(),
		};
		let value = serde_json::to_value(&patch).unwrap();
		assert_eq!(
			value,
			serde_json::json!({
				"firstName": "Ada",
				"lastName": "Lovelace",
				"age": 36,
				"gender": "female",
				"bio": ""
			})
		);
	}
}
