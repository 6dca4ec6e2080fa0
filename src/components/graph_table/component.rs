use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};
use web_sys::{HtmlElement, MouseEvent};

use super::state::DeleteState;
use super::store::{GraphStore, Notifier};
use crate::config::DEFAULT_FADE;

/// Delete control for a single graph row.
///
/// On click the button is swapped for `deleting_label` before the request is
/// sent, so it can only fire once. A successful DELETE fades `row` out and
/// detaches it; a failed one alerts through `notifier` and leaves the row
/// where it is.
#[component]
pub fn DeleteButton<S, N>(
	row: HtmlElement,
	#[prop(into)] url: String,
	store: S,
	notifier: N,
	#[prop(into, default = "Delete".into())] label: String,
	#[prop(into, default = "Deleting\u{2026}".into())] deleting_label: String,
	#[prop(default = DEFAULT_FADE)] fade: Duration,
) -> impl IntoView
where
	S: GraphStore,
	N: Notifier,
{
	let button_ref = NodeRef::<leptos::html::Input>::new();
	let state = Rc::new(RefCell::new(DeleteState::Idle));

	let on_click = move |_: MouseEvent| {
		if !state.borrow_mut().begin() {
			return;
		}
		if let Some(button) = button_ref.get_untracked() {
			let _ = button.replace_with_with_str_1(&deleting_label);
		}

		info!("Deleting graph {url}");
		let (state, store, notifier, row, url) = (
			state.clone(),
			store.clone(),
			notifier.clone(),
			row.clone(),
			url.clone(),
		);
		spawn_local(async move {
			let result = store.delete_graph(&url).await;
			state.borrow_mut().finish(&result);
			match result {
				Ok(()) => {
					info!("Deleted graph {url}");
					fade_out_and_remove(&row, fade);
				}
				Err(err) => {
					warn!("Could not delete graph {url}: {err}");
					notifier.alert(&err.to_string());
				}
			}
		});
	};

	view! { <input node_ref=button_ref type="button" value=label on:click=on_click /> }
}

fn fade_out_and_remove(row: &HtmlElement, fade: Duration) {
	let style = row.style();
	let _ = style.set_property("transition", &format!("opacity {}ms", fade.as_millis()));
	let _ = style.set_property("opacity", "0");
	let row = row.clone();
	set_timeout(move || row.remove(), fade);
}
