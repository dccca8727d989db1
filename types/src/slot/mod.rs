mod arrangement;
mod config;
mod constants;
mod error;
mod round;
mod symbols;

pub use arrangement::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use round::*;
pub use symbols::*;
