pub mod geolocation;
pub mod http;
pub mod mock;
pub mod services;
