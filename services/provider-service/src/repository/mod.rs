pub mod catalog_repository;
pub mod in_memory;
pub mod postgres;

pub use catalog_repository::*;
pub use in_memory::*;
pub use postgres::*;
