pub mod config;
pub mod error;
pub mod session;
pub mod translate;

pub use error::{Error, Result};
