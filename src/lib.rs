//! Delete controls for the graph listing of a SPARQL store admin page.
//!
//! The listing is server-rendered. When the page flags that the current user
//! may update the store, each graph row gets a button that DELETEs the graph
//! and drops the row.

use log::{Level, debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Document;

#[cfg(all(test, target_arch = "wasm32"))]
use wasm_bindgen_test as _;

// Modules
mod components;
mod config;
mod error;

pub use crate::components::graph_table::{
	DeleteButton, DeleteState, FetchGraphStore, GraphRow, GraphStore, Notifier, WindowAlert,
	enhance_graph_table, read_store_update_flag, store_update_enabled,
};
pub use crate::config::{DEFAULT_FADE, StoreUpdateConfig};
pub use crate::error::{DeleteError, SetupError};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Module entry point. Enhances the listing once the document is parsed.
#[wasm_bindgen(start)]
pub fn start() {
	init_logging();
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		warn!("No document, skipping graph table");
		return;
	};

	if document.ready_state() == "loading" {
		let ready = Closure::once_into_js(move || {
			if let Some(document) = web_sys::window().and_then(|w| w.document()) {
				enhance_page(&document);
			}
		});
		let _ = document.add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref());
	} else {
		enhance_page(&document);
	}
}

fn enhance_page(document: &Document) {
	match enhance_graph_table(
		document,
		&StoreUpdateConfig::default(),
		FetchGraphStore,
		WindowAlert,
	) {
		Ok(added) => debug!("Graph table ready ({added} delete buttons)"),
		Err(err) => warn!("Graph table not enhanced: {err}"),
	}
}
