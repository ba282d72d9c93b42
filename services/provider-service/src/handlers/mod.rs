pub mod catalog_handlers;

pub use catalog_handlers::*;
