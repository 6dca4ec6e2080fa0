//! Page contract for the graph listing: where the flag lives, which table to
//! enhance and how the added controls read.

use std::time::Duration;

/// jQuery's `"slow"` fade, which the listing has always used.
pub const DEFAULT_FADE: Duration = Duration::from_millis(600);

/// Selectors, labels and timings used when enhancing the graph table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreUpdateConfig {
	/// `name` of the `<meta>` element carrying the capability flag.
	pub meta_name: String,
	/// `id` of the graph table.
	pub table_id: String,
	/// Row attribute holding the URL the DELETE is sent to.
	pub url_attribute: String,
	/// Header cell text and button label.
	pub column_label: String,
	/// Text the button is replaced with once clicked.
	pub deleting_label: String,
	/// Length of the fade-out before a deleted row is detached.
	pub fade: Duration,
}

impl Default for StoreUpdateConfig {
	fn default() -> Self {
		Self {
			meta_name: "humfrey-store-update".into(),
			table_id: "graphs".into(),
			url_attribute: "data-graph-url".into(),
			column_label: "Delete".into(),
			deleting_label: "Deleting\u{2026}".into(),
			fade: DEFAULT_FADE,
		}
	}
}

impl StoreUpdateConfig {
	/// Selector for the capability flag element.
	pub fn meta_selector(&self) -> String {
		format!("meta[name='{}']", self.meta_name)
	}

	/// Selector for the table's header row(s).
	pub fn header_row_selector(&self) -> String {
		format!("#{} thead tr", self.table_id)
	}

	/// Selector for the graph rows.
	pub fn body_rows_selector(&self) -> String {
		format!("#{} tbody tr", self.table_id)
	}
}
