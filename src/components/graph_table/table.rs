use leptos::mount::mount_to;
use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::component::DeleteButton;
use super::store::{GraphStore, Notifier};
use super::types::GraphRow;
use crate::config::StoreUpdateConfig;
use crate::error::SetupError;

/// Whether a capability flag's `content` allows updates. Anything but the
/// exact string `"true"` counts as off.
pub fn store_update_enabled(content: Option<&str>) -> bool {
	content == Some("true")
}

/// Reads the capability flag from the page's `<meta>` element.
pub fn read_store_update_flag(document: &Document, config: &StoreUpdateConfig) -> bool {
	let content = document
		.query_selector(&config.meta_selector())
		.ok()
		.flatten()
		.and_then(|meta| meta.get_attribute("content"));
	store_update_enabled(content.as_deref())
}

/// Adds the delete column to the graph table when the page allows updates.
///
/// Every header row gets a header cell.
/// Returns the number of delete buttons added, which is zero when the flag is
/// off. Rows are read once; rows inserted later are left alone.
pub fn enhance_graph_table<S, N>(
	document: &Document,
	config: &StoreUpdateConfig,
	store: S,
	notifier: N,
) -> Result<usize, SetupError>
where
	S: GraphStore,
	N: Notifier,
{
	if !read_store_update_flag(document, config) {
		debug!("Store updates disabled, leaving #{} untouched", config.table_id);
		return Ok(0);
	}

	let header_selector = config.header_row_selector();
	let headers = document.query_selector_all(&header_selector)?;
	if headers.length() == 0 {
		return Err(SetupError::MissingElement(header_selector));
	}
	for header in (0..headers.length()).filter_map(|i| headers.item(i)) {
		let th = document.create_element("th")?;
		th.set_text_content(Some(&config.column_label));
		header.append_child(&th)?;
	}

	let rows = graph_rows(document, config)?;
	for row in &rows {
		attach_delete_button(document, config, row.clone(), store.clone(), notifier.clone())?;
	}

	info!("Added delete buttons to {} graph(s)", rows.len());
	Ok(rows.len())
}

fn graph_rows(document: &Document, config: &StoreUpdateConfig) -> Result<Vec<GraphRow>, SetupError> {
	let nodes = document.query_selector_all(&config.body_rows_selector())?;
	let rows = (0..nodes.length())
		.filter_map(|i| nodes.item(i))
		.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
		.map(|element| {
			// An absent attribute is not validated; the request goes to "".
			let url = element.get_attribute(&config.url_attribute).unwrap_or_default();
			GraphRow { element, url }
		})
		.collect();
	Ok(rows)
}

fn attach_delete_button<S, N>(
	document: &Document,
	config: &StoreUpdateConfig,
	row: GraphRow,
	store: S,
	notifier: N,
) -> Result<(), SetupError>
where
	S: GraphStore,
	N: Notifier,
{
	let cell: HtmlElement = document.create_element("td")?.unchecked_into();
	row.element.append_child(&cell)?;

	let (label, deleting_label, fade) = (
		config.column_label.clone(),
		config.deleting_label.clone(),
		config.fade,
	);
	let GraphRow { element, url } = row;
	mount_to(cell, move || {
		view! {
			<DeleteButton
				row=element
				url=url
				store=store
				notifier=notifier
				label=label
				deleting_label=deleting_label
				fade=fade
			/>
		}
	})
	.forget();
	Ok(())
}
