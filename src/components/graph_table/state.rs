use crate::error::DeleteError;

/// Lifecycle of one row's delete control.
///
/// `Idle -> Deleting -> Removed | Failed`. Both end states are final for the
/// lifetime of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteState {
	/// Button shown, nothing sent yet.
	#[default]
	Idle,
	/// Request in flight.
	Deleting,
	/// Graph deleted, row fading out.
	Removed,
	/// Request failed; the row stays in its deleting state.
	Failed,
}

impl DeleteState {
	/// Leaves `Idle`. Returns whether a request should be issued; only the
	/// first call does.
	pub fn begin(&mut self) -> bool {
		if *self != Self::Idle {
			return false;
		}
		*self = Self::Deleting;
		true
	}

	/// Records the outcome of the request started by [`begin`](Self::begin).
	pub fn finish(&mut self, result: &Result<(), DeleteError>) {
		if *self != Self::Deleting {
			return;
		}
		*self = if result.is_ok() {
			Self::Removed
		} else {
			Self::Failed
		};
	}
}
