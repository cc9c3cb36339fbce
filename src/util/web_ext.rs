use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::TargetCast;

/// Reads the current value of the form control an event fired on.
pub trait FormValue {
	fn input_value(&self) -> Option<String>;
	fn select_value(&self) -> Option<String>;
	fn textarea_value(&self) -> Option<String>;
}

impl FormValue for web_sys::Event {
	fn input_value(&self) -> Option<String> {
		self.target_dyn_into::<HtmlInputElement>().map(|input| input.value())
	}

	fn select_value(&self) -> Option<String> {
		self.target_dyn_into::<HtmlSelectElement>().map(|select| select.value())
	}

	fn textarea_value(&self) -> Option<String> {
		self.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value())
	}
}
