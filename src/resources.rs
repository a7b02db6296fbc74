//! Per-resource clients.
//!
//! Each client borrows the [`OneApiClient`](crate::OneApiClient) it came from
//! and implements [`Resource`](crate::client::Resource) for `list`,
//! `list_paginated` and `get`.

pub mod books;
pub mod chapters;
pub mod characters;
pub mod movies;
pub mod quotes;

// Re-export for convenience
pub use books::BooksClient;
pub use chapters::ChaptersClient;
pub use characters::CharactersClient;
pub use movies::MoviesClient;
pub use quotes::QuotesClient;

use crate::client::OneApiClient;
use crate::error::{Error, Result};
use crate::http::record_path;
use crate::model::{Paginated, Quote};
use crate::options::RequestOption;

/// Fetch `/{resource}/{id}/quote`, treating zero results as [`Error::NoQuotes`].
async fn quotes_for(
    client: &OneApiClient,
    resource: &str,
    id: &str,
    options: &[RequestOption],
) -> Result<Vec<Quote>> {
    let path = record_path(resource, id, Some("quote"))?;
    let page: Paginated<Quote> = client.fetch(&path, options).await?;
    if page.docs.is_empty() {
        return Err(Error::NoQuotes { endpoint: path });
    }
    Ok(page.docs)
}
