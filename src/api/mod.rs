//! Backend API access
//!
//! Requests go through a [`Transport`] and come back as the backend's
//! `{ success, data, error }` envelope, already normalized so callers never
//! see raw transport errors.

pub mod client;
pub mod endpoints;
pub mod response;
pub mod transport;

#[cfg(test)]
pub mod fake;

pub use client::ApiClient;
pub use response::ApiResponse;
pub use transport::{ApiRequest, HttpMethod, RawResponse, ReqwestTransport, Transport, TransportError};
