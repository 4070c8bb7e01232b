//! Search logic: use cases and the query pipeline.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod pipeline;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
