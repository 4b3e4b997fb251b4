//! Client for the Amazon Product Advertising API.
//!
//! Builds authenticated, HMAC-SHA256 signed request URLs, issues them over a
//! pluggable transport, and turns the XML responses into either a traversable
//! [`Document`] tree or a flattened mapping/sequence value.
//!
//! ## Example
//!
//! ```no_run
//! use paapi::{Client, Context, Credential, Locale};
//! use paapi_http_send_reqwest::ReqwestHttpSend;
//!
//! # async fn example() -> paapi::Result<()> {
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//! let client = Client::new(
//!     ctx,
//!     Credential::new("access-key-id", "secret-key", "associate-tag"),
//!     Locale::Uk,
//! )?;
//!
//! match client.item_search("harry potter", Some("Books"), None, None).await {
//!     Some(result) => println!("{result:?}"),
//!     None => eprintln!("{:?}", client.errors()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Failures during a call are appended to the client's error log and the
//! call returns `None`; nothing is retried.

#![warn(missing_docs)]

mod client;
pub use client::{Client, Response};
mod constants;
mod credential;
pub use credential::Credential;
mod locale;
pub use locale::Locale;
mod search_index;
pub use search_index::VALID_SEARCH_INDEXES;
mod signer;
pub use signer::UrlSigner;
mod transform;
pub use transform::flatten;
pub mod xml;
pub use xml::Document;

pub use paapi_core::{Context, Error, ErrorKind, HttpSend, Result};
