pub mod dashboard_data;
pub mod errors;
pub mod fetch;
pub mod layout;
pub mod logging;
