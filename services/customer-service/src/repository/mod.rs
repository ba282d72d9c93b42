pub mod customer_repository;
pub mod in_memory;
pub mod postgres;

pub use customer_repository::*;
pub use in_memory::*;
pub use postgres::*;
