pub mod errors;
pub mod gallery;
pub mod logging;
