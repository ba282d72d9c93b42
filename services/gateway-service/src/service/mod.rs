pub mod travel_service;

pub use travel_service::*;
