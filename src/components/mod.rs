pub mod graph_table;
