pub mod config;
pub mod domain;
pub mod handlers;
pub mod repository;

pub use domain::*;
pub use handlers::*;
pub use repository::*;
