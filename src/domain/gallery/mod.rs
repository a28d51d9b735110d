//! Chart gallery aggregate: selectors, per-date chart records and the
//! view-model builder.

pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use services::*;
pub use value_objects::*;
