pub mod client;
pub mod config;
pub mod domain;
pub mod handlers;
pub mod service;
pub mod testing;

pub use client::*;
pub use domain::*;
pub use handlers::*;
pub use service::*;
