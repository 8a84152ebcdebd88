//! Typed client for the employee REST API.
//!
//! [`api::HttpEmployeeApi`] talks HTTP, [`query::QueryClient`] de-duplicates
//! and caches reads, [`store::AppStore`] holds the normalized state and the
//! [`views`] drive all three.

pub mod api;
pub mod error;
pub mod query;
pub mod store;
pub mod views;

pub use api::{EmployeeApi, HttpEmployeeApi};
pub use error::{ClientError, ClientResult};
