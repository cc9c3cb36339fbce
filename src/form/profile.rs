use crate::{
	api::ProfilePatch,
	data::{Gender, User},
};
use std::{collections::BTreeMap, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
	FirstName,
	LastName,
	Age,
	Gender,
	Bio,
}

pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Editable copy of the session user's profile, kept as raw text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileForm {
	pub first_name: String,
	pub last_name: String,
	pub age: String,
	pub gender: String,
	pub bio: String,
}

impl From<&User> for ProfileForm {
	fn from(user: &User) -> Self {
		Self {
			first_name: user.first_name.clone(),
			last_name: user.last_name.clone(),
			age: user.age.map(|age| age.to_string()).unwrap_or_default(),
			gender: user.gender.map(|gender| gender.value().to_owned()).unwrap_or_default(),
			bio: user.bio.clone(),
		}
	}
}

impl ProfileForm {
	pub fn set(&mut self, field: Field, value: String) {
		match field {
			Field::FirstName => self.first_name = value,
			Field::LastName => self.last_name = value,
			Field::Age => self.age = value,
			Field::Gender => self.gender = value,
			Field::Bio => self.bio = value,
		}
	}

	pub fn validate(&self) -> Result<ProfilePatch, FieldErrors> {
		let mut errors = FieldErrors::new();
		if self.first_name.trim().is_empty() {
			errors.insert(Field::FirstName, "First Name is required.");
		}
		if self.last_name.trim().is_empty() {
			errors.insert(Field::LastName, "Last Name is required.");
		}
		let age = self.age.trim().parse::<u32>().ok().filter(|age| *age > 0);
		if age.is_none() {
			errors.insert(Field::Age, "Age must be a positive integer.");
		}
		let gender = Gender::from_str(&self.gender).ok();
		if gender.is_none() {
			errors.insert(Field::Gender, "Gender is required.");
		}
		match (age, gender) {
			(Some(age), Some(gender)) if errors.is_empty() => Ok(ProfilePatch {
				first_name: self.first_name.trim().to_owned(),
				last_name: self.last_name.trim().to_owned(),
				age,
				gender,
				bio: self.bio.clone(),
			}),
			_ => Err(errors),
		}
	}
}
