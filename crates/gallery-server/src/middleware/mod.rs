//! HTTP middleware for the API server.

pub mod request_id;
