pub mod error;
pub mod travel_client;

pub use error::*;
pub use travel_client::*;
