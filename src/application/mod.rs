pub mod adapters;
pub mod layout_store;
pub mod polling;
