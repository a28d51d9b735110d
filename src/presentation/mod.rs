pub mod app;
pub mod formatting;

pub use app::App;
