pub mod types;
pub mod error;
pub mod client;
pub mod utils;

pub use client::{Authenticated, Client, ClientConfig, Unauthenticated};
pub use error::{ApiError, BatchLimit, Result};

#[cfg(test)]
mod tests;
