use serde::{de::DeserializeOwned, de::Error as _, Deserialize, Deserializer};

/// A response body that is either wrapped in a `data` envelope or bare.
///
/// The backend is inconsistent here: `/login` and `/profile/view` answer with
/// the document itself while `/signup`, `/feed` and the list endpoints wrap it.
/// Both shapes collapse into the inner value.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload<T>(pub T);

impl<T> Payload<T> {
	pub fn into_inner(self) -> T {
		self.0
	}
}

impl<'de, T> Deserialize<'de> for Payload<T>
where
	T: DeserializeOwned,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		// A `data` key always means an envelope; its contents are decoded strictly.
		let mut document = serde_json::Value::deserialize(deserializer)?;
		let data = document.as_object_mut().and_then(|object| object.remove("data"));
		let inner = data.unwrap_or(document);
		T::deserialize(inner).map(Self).map_err(D::Error::custom)
	}
}
