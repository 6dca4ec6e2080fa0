use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::DeleteError;

/// Removes graphs from the remote store.
#[allow(async_fn_in_trait)]
pub trait GraphStore: Clone + 'static {
	/// Sends `DELETE url`. Only a 2xx response counts as success.
	async fn delete_graph(&self, url: &str) -> Result<(), DeleteError>;
}

/// [`GraphStore`] backed by the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchGraphStore;

impl GraphStore for FetchGraphStore {
	async fn delete_graph(&self, url: &str) -> Result<(), DeleteError> {
		let init = RequestInit::new();
		init.set_method("DELETE");
		let request = Request::new_with_str_and_init(url, &init).map_err(DeleteError::from_js)?;

		let window = web_sys::window()
			.ok_or_else(|| DeleteError::RequestFailed("no window".into()))?;
		let response = JsFuture::from(window.fetch_with_request(&request))
			.await
			.map_err(DeleteError::from_js)?;
		let response: Response = response.dyn_into().map_err(DeleteError::from_js)?;

		if response.ok() {
			Ok(())
		} else {
			Err(DeleteError::from_status(
				response.status(),
				&response.status_text(),
			))
		}
	}
}

/// Blocking, user-facing notice for a failed delete.
pub trait Notifier: Clone + 'static {
	/// Shows `message` to the user.
	fn alert(&self, message: &str);
}

/// [`Notifier`] using `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowAlert;

impl Notifier for WindowAlert {
	fn alert(&self, message: &str) {
		if let Some(window) = web_sys::window() {
			let _ = window.alert_with_message(message);
		}
	}
}
