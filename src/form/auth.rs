use crate::api::{Credentials, Registration};
use lazy_static::lazy_static;
use regex::Regex;

pub static MIN_PASSWORD_LEN: usize = 8;

lazy_static! {
	static ref EMAIL_SHAPE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
	#[default]
	Login,
	Signup,
}
impl AuthMode {
	pub fn toggled(self) -> Self {
		match self {
			Self::Login => Self::Signup,
			Self::Signup => Self::Login,
		}
	}

	pub fn title(self) -> &'static str {
		match self {
			Self::Login => "Login to DevConnect",
			Self::Signup => "Join DevConnect",
		}
	}

	pub fn submit_label(self) -> &'static str {
		match self {
			Self::Login => "Login",
			Self::Signup => "Sign Up",
		}
	}

	pub fn failure_message(self) -> &'static str {
		match self {
			Self::Login => "Login failed.",
			Self::Signup => "Signup failed.",
		}
	}
}

/// Raw text of the login/signup form. Name and confirmation fields are
/// ignored in login mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthForm {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub password: String,
	pub confirm_password: String,
}

/// A validated form, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthSubmission {
	Login(Credentials),
	Signup(Registration),
}

impl AuthForm {
	pub fn validate(&self, mode: AuthMode) -> Result<AuthSubmission, &'static str> {
		let email = self.email.trim();
		if email.is_empty() || self.password.is_empty() {
			return Err("Email and password are required.");
		}
		if mode == AuthMode::Signup && (self.first_name.trim().is_empty() || self.last_name.trim().is_empty()) {
			return Err("First and last name are required.");
		}
		if !EMAIL_SHAPE.is_match(email) {
			return Err("Please enter a valid email address.");
		}
		if self.password.chars().count() < MIN_PASSWORD_LEN {
			return Err("Password must be at least 8 characters.");
		}
		match mode {
			AuthMode::Login => Ok(AuthSubmission::Login(Credentials {
				email: email.to_owned(),
				password: self.password.clone(),
			})),
			AuthMode::Signup => {
				if self.password != self.confirm_password {
					return Err("Passwords do not match.");
				}
				Ok(AuthSubmission::Signup(Registration {
					first_name: self.first_name.trim().to_owned(),
					last_name: self.last_name.trim().to_owned(),
					email: email.to_owned(),
					password: self.password.clone(),
					confirm_password: self.confirm_password.clone(),
				}))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn signup_form() -> AuthForm {
		AuthForm {
			first_name: "Ada".into(),
			last_name: "Lovelace".into(),
			email: "ada@example.com".into(),
			password: "analytical".into(),
			confirm_password: "analytical".into(),
		}
	}

	#[test]
	fn login_requires_both_fields() {
		let form = AuthForm {
			email: "ada@example.com".into(),
			..Default::default()
		};
		assert_eq!(form.validate(AuthMode::Login), Err("Email and password are required."));
	}

	#[test]
	fn login_ignores_signup_fields() {
		let form = AuthForm {
			email: " ada@example.com ".into(),
			password: "analytical".into(),
			confirm_password: "something else".into(),
			..Default::default()
		};
		assert_eq!(
			form.validate(AuthMode::Login),
			Ok(AuthSubmission::Login(Credentials {
				email: "ada@example.com".into(),
				password: "analytical".into(),
			}))
		);
	}

	#[test]
	fn email_shape() {
		let form = AuthForm {
			email: "ada@example".into(),
			..signup_form()
		};
		assert_eq!(form.validate(AuthMode::Signup), Err("Please enter a valid email address."));
	}

	#[test]
	fn short_password() {
		let form = AuthForm {
			password: "short".into(),
			confirm_password: "short".into(),
			..signup_form()
		};
		assert_eq!(form.validate(AuthMode::Signup), Err("Password must be at least 8 characters."));
	}

	#[test]
	fn signup_needs_names() {
		let form = AuthForm {
			last_name: "  ".into(),
			..signup_form()
		};
		assert_eq!(form.validate(AuthMode::Signup), Err("First and last name are required."));
	}

	#[test]
	fn signup_mismatch() {
		let form = AuthForm {
			confirm_password: "analytica1".into(),
			..signup_form()
		};
		assert_eq!(form.validate(AuthMode::Signup), Err("Passwords do not match."));
	}

	#[test]
	fn signup_ok() {
		let Ok(AuthSubmission::Signup(registration)) = signup_form().validate(AuthMode::Signup) else {
			panic!("expected a signup submission");
		};
		assert_eq!(registration.first_name, "Ada");
		assert_eq!(registration.confirm_password, "analytical");
	}
}
