pub mod travel_handlers;

pub use travel_handlers::*;
