pub mod config;
pub mod http;
pub mod services;

pub use config::*;
pub use http::*;
