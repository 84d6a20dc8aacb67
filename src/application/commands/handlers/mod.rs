//! Command Handlers

mod pairing_handlers;
mod restaurant_handlers;

pub use pairing_handlers::*;
pub use restaurant_handlers::*;
