use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// A graph DELETE that did not complete successfully.
///
/// The display form is exactly what the user is alerted with.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeleteError {
	/// Carries the transport's error description.
	#[error("failed: {0}")]
	RequestFailed(String),
}

impl DeleteError {
	/// Failure for a response outside the 2xx range. Uses the status text,
	/// or the bare code when the server sent none.
	pub fn from_status(status: u16, status_text: &str) -> Self {
		if status_text.is_empty() {
			Self::RequestFailed(status.to_string())
		} else {
			Self::RequestFailed(status_text.to_string())
		}
	}

	pub(crate) fn from_js(value: JsValue) -> Self {
		Self::RequestFailed(describe_js(&value))
	}

	/// Text reported by the transport.
	pub fn description(&self) -> &str {
		match self {
			Self::RequestFailed(description) => description,
		}
	}
}

/// Faults while wiring the controls into the page.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SetupError {
	/// Nothing matched the selector.
	#[error("missing element: {0}")]
	MissingElement(String),
	/// A DOM call threw.
	#[error("DOM error: {0}")]
	Dom(String),
}

impl From<JsValue> for SetupError {
	fn from(value: JsValue) -> Self {
		Self::Dom(describe_js(&value))
	}
}

fn describe_js(value: &JsValue) -> String {
	if let Some(err) = value.dyn_ref::<js_sys::Error>() {
		return err.message().into();
	}
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
