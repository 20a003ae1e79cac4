pub mod error;
pub mod models;
pub mod validation;
pub mod breakdown;
pub mod catalog;

pub use error::{ErrorResponse, ValidationError, Result};
pub use models::*;
pub use validation::*;
pub use breakdown::{breakdown, percentage};

#[cfg(test)]
mod tests;
