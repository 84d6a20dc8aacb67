//! HTTP Handlers

mod index;
mod pairing;
mod pizza;
mod restaurant;

pub use index::*;
pub use pairing::*;
pub use pizza::*;
pub use restaurant::*;
