//! Core components for the Product Advertising API client.
//!
//! This crate provides the foundational pieces shared by the paapi crates:
//!
//! - **Context**: a container holding the HTTP transport used to issue
//!   signed requests
//! - **[`HttpSend`]**: the trait a transport implements
//! - **Error**: a structured error type with [`ErrorKind`]
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC-SHA256 and base64 helpers used by request signing
//! - [`time`]: UTC timestamps in the format the service expects
//! - [`utils`]: credential redaction for debug output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
mod error;
pub use error::{Error, ErrorKind, Result};
mod http;
pub use http::HttpSend;
