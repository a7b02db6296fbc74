//! # one-api-sdk - typed client for The One API
//!
//! A small async client for `https://the-one-api.dev/v2`: books, movies,
//! chapters, characters and quotes from The Lord of the Rings.
//!
//! ## Features
//! - Async, tokio compatible (built on `reqwest`)
//! - Composable request options for pagination, sorting and filtering
//! - Persistent options applied to every call, overridable per call
//! - API error envelopes surfaced as typed errors tagged with the endpoint
//!
//! ## Architecture
//!
//! Each call goes through the same pipeline:
//!
//! 1. A resource client (`books()`, `movies()`, ...) turns the call into a path
//!    and a list of [`RequestOption`]s
//! 2. [`OneApiClient`] builds an [`http::ApiRequest`] from the API key, the
//!    persistent options and the per-call options, in that order
//! 3. The request is sent and the whole body buffered
//! 4. The body is checked for an API error envelope, then decoded
//!
//! ## Example
//! ```no_run
//! use one_api_sdk::client::Resource;
//! use one_api_sdk::{OneApiClient, RequestOption};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OneApiClient::new("your-api-key")?;
//!
//!     let books = client.books().list(&[RequestOption::sort("name", "asc")]).await?;
//!     for book in &books {
//!         println!("{}: {}", book.id, book.name);
//!     }
//!
//!     let hobbits = client
//!         .characters()
//!         .list(&[
//!             RequestOption::filter_match("race", "Hobbit"),
//!             RequestOption::limit(5),
//!         ])
//!         .await?;
//!     println!("{:?}", hobbits);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod model;
pub mod options;
pub mod resources;

// Re-exports for convenience
pub use client::{OneApiClient, Resource};
pub use config::{ClientConfig, ClientConfigBuilder, SecretString, DEFAULT_BASE_URL};
pub use error::{ApiError, Error, Result};
pub use model::{Book, Chapter, Character, Movie, Paginated, Quote};
pub use options::{Pagination, RequestOption};
