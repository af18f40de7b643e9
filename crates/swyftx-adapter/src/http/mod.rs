/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and transformed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;
pub mod trade;
pub mod user;

pub use error::{Result, SwyftxError};

pub use client::{ClientConfig, Credentials, DEFAULT_BASE_URL, SwyftxClient};
