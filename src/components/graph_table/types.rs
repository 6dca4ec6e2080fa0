use web_sys::HtmlElement;

/// One `<tr>` of the listing and the graph it names.
#[derive(Clone, Debug)]
pub struct GraphRow {
	/// The `<tr>` itself.
	pub element: HtmlElement,
	/// Value of the row's URL attribute, empty when absent.
	pub url: String,
}
