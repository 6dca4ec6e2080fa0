mod component;
mod state;
mod store;
mod table;
mod types;

pub use component::DeleteButton;
pub use state::DeleteState;
pub use store::{FetchGraphStore, GraphStore, Notifier, WindowAlert};
pub use table::{enhance_graph_table, read_store_update_flag, store_update_enabled};
pub use types::GraphRow;
