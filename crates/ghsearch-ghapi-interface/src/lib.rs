//! GitHub API interface.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;
/// Types returned by the GitHub API.
pub mod types;

pub use errors::{ApiError, Result};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockApiService;
pub use interface::ApiService;
