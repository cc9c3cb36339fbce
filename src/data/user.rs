use enumset::EnumSetType;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Server-assigned identifier of a user document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);
impl From<&str> for UserId {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl std::fmt::Display for UserId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A member profile. Used for the session user, feed candidates, connections
/// and the sender of a connection request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	#[serde(rename = "_id", alias = "id")]
	pub id: UserId,
	#[serde(default)]
	pub first_name: String,
	#[serde(default)]
	pub last_name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub age: Option<u32>,
	#[serde(default, deserialize_with = "lenient_gender", skip_serializing_if = "Option::is_none")]
	pub gender: Option<Gender>,
	#[serde(default, alias = "about", deserialize_with = "null_as_empty")]
	pub bio: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub photo_url: Option<String>,
	#[serde(default, alias = "emailId", skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
}

impl User {
	pub fn full_name(&self) -> String {
		match (self.first_name.is_empty(), self.last_name.is_empty()) {
			(_, true) => self.first_name.clone(),
			(true, false) => self.last_name.clone(),
			(false, false) => format!("{} {}", self.first_name, self.last_name),
		}
	}

	/// The "N years old • gender" byline, only when both parts are known.
	pub fn byline(&self) -> Option<String> {
		match (self.age, self.gender) {
			(Some(age), Some(gender)) => Some(format!("{age} years old • {}", gender.value())),
			_ => None,
		}
	}
}

/// Older accounts carry free-form genders; anything unrecognised reads as unknown.
fn lenient_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = Option::<String>::deserialize(deserializer)?;
	Ok(raw.and_then(|value| value.parse().ok()))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Hash, Serialize, Deserialize, EnumSetType)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
	Male,
	Female,
	Other,
}

impl Gender {
	pub fn value(self) -> &'static str {
		match self {
			Self::Male => "male",
			Self::Female => "female",
			Self::Other => "other",
		}
	}

	pub fn display_name(self) -> &'static str {
		match self {
			Self::Male => "Male",
			Self::Female => "Female",
			Self::Other => "Other",
		}
	}
}

impl FromStr for Gender {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"male" => Ok(Self::Male),
			"female" => Ok(Self::Female),
			"other" => Ok(Self::Other),
			_ => Err(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_server_document() {
		let json = r#"{
			"_id": "64f0",
			"firstName": "Ada",
			"lastName": "Lovelace",
			"age": 36,
			"gender": "female",
			"about": "Poetical science.",
			"photoUrl": "https://example.com/ada.png",
			"emailId": "ada@example.com",
			"skills": ["math"]
		}"#;
		let user: User = serde_json::from_str(json).unwrap();
		assert_eq!(user.id, UserId::from("64f0"));
		assert_eq!(user.full_name(), "Ada Lovelace");
		assert_eq!(user.gender, Some(Gender::Female));
		assert_eq!(user.bio, "Poetical science.");
		assert_eq!(user.email.as_deref(), Some("ada@example.com"));
		assert_eq!(user.byline().as_deref(), Some("36 years old • female"));
	}

	#[test]
	fn sparse_document_uses_defaults() {
		let user: User = serde_json::from_str(r#"{"_id": "g1", "firstName": "Grace"}"#).unwrap();
		assert_eq!(user.id, UserId::from("g1"));
		assert_eq!(user.full_name(), "Grace");
		assert_eq!(user.age, None);
		assert_eq!(user.byline(), None);
	}

	#[test]
	fn gender_from_str() {
		assert_eq!(Gender::from_str("Male"), Ok(Gender::Male));
		assert_eq!(Gender::from_str(" other "), Ok(Gender::Other));
		assert!(Gender::from_str("").is_err());
	}

	#[test]
	fn missing_id_is_rejected() {
		assert!(serde_json::from_str::<User>(r#"{"firstName": "Grace"}"#).is_err());
	}

	#[test]
	fn unknown_gender_reads_as_none() {
		let users: Vec<User> =
			serde_json::from_str(r#"[{"_id": "a", "gender": "Female"}, {"_id": "b", "gender": "others"}, {"_id": "c", "gender": null}]"#)
				.unwrap();
		assert_eq!(users[0].gender, Some(Gender::Female));
		assert_eq!(users[1].gender, None);
		assert_eq!(users[2].gender, None);
	}

	#[test]
	fn null_bio_is_empty() {
		let user: User = serde_json::from_str(r#"{"_id": "a", "bio": null, "photoUrl": null}"#).unwrap();
		assert_eq!(user.bio, "");
		assert_eq!(user.photo_url, None);
	}
}
