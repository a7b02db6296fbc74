//! Public resources, no API key required.
//!
//! Run with:
//! ```bash
//! RUST_LOG=one_api_sdk=debug cargo run --example basic
//! ```

use one_api_sdk::{OneApiClient, RequestOption, Resource};
use tracing_subscriber::EnvFilter;

const TWO_TOWERS_ID: &str = "5cf58077b53e011a64671583";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = OneApiClient::read_only()?;

    let books = client.books().list(&[]).await?;
    println!("LOTR Books:");
    for book in &books {
        println!("Title: {}, ID: {}", book.name, book.id);
    }

    let chapters = client
        .books()
        .chapters(TWO_TOWERS_ID, &[RequestOption::limit(3)])
        .await?;
    println!("\nTwo Towers Chapters (limited to 3):");
    for chapter in &chapters {
        println!("Title: {}, ID: {}", chapter.name, chapter.id);
    }

    let books = client
        .books()
        .list(&[RequestOption::sort("name", "asc")])
        .await?;
    println!("\nLOTR Books, sorted:");
    for book in &books {
        println!("Title: {}, ID: {}", book.name, book.id);
    }

    Ok(())
}
