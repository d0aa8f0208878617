pub mod registry;
pub mod report;
pub mod resolver;

pub use crate::utils::error::Result;
