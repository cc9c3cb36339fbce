use super::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub String);
impl From<&str> for RequestId {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl std::fmt::Display for RequestId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A pending connection request addressed to the session user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRequest {
	#[serde(rename = "_id", alias = "id")]
	pub id: RequestId,
	#[serde(rename = "fromUserId")]
	pub from: User,
}

/// The swipe sent for a feed candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interest {
	Interested,
	Ignored,
}
impl Interest {
	pub fn value(self) -> &'static str {
		match self {
			Self::Interested => "interested",
			Self::Ignored => "ignored",
		}
	}
}

/// The recipient's verdict on a connection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Review {
	Accepted,
	Rejected,
}
impl Review {
	pub fn value(self) -> &'static str {
		match self {
			Self::Accepted => "accepted",
			Self::Rejected => "rejected",
		}
	}

	pub fn failure_message(self) -> &'static str {
		match self {
			Self::Accepted => "Failed to accept request.",
			Self::Rejected => "Failed to reject request.",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_populated_sender() {
		let json = r#"{
			"_id": "r1",
			"status": "interested",
			"fromUserId": { "_id": "u7", "firstName": "Linus", "photoUrl": "https://example.com/l.png" }
		}"#;
		let request: ConnectionRequest = serde_json::from_str(json).unwrap();
		assert_eq!(request.id, RequestId::from("r1"));
		assert_eq!(request.from.first_name, "Linus");
		assert_eq!(request.from.bio, "");
	}
}
