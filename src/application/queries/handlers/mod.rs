//! Query Handlers

mod pizza_handlers;
mod restaurant_handlers;

pub use pizza_handlers::*;
pub use restaurant_handlers::*;
