//! HTTP middleware for the recommendation server.

pub mod request_id;
