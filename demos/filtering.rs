//! Persistent options and filters on an authenticated client.
//!
//! Run with:
//! ```bash
//! export ONE_API_KEY="your-api-key"
//! cargo run --example filtering
//! ```

use one_api_sdk::{ClientConfig, Error, OneApiClient, RequestOption, Resource};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Every call asks for up to 1000 records unless it says otherwise.
    let mut config = ClientConfig::from_env();
    config.persistent_options = vec![RequestOption::limit(1000)];
    let client = OneApiClient::with_config(config)?;

    let humans = client
        .characters()
        .list(&[
            RequestOption::filter_include("race", ["Human"]),
            RequestOption::sort("realm", "asc"),
        ])
        .await?;
    println!("Human Characters:");
    for human in &humans {
        println!("Name: {}, Realm: {}, Race: {}", human.name, human.realm, human.race);
    }

    let long_movies = client
        .movies()
        .list(&[RequestOption::comparison("runtimeInMinutes", ">=", 180)])
        .await?;
    println!("\nMovies of three hours or more:");
    for movie in &long_movies {
        println!("{} ({} min)", movie.name, movie.runtime_minutes);

        match client.movies().quotes(&movie.id, &[RequestOption::limit(1)]).await {
            Ok(quotes) => println!("  \"{}\"", quotes[0].dialog),
            Err(Error::NoQuotes { .. }) => println!("  no quotes available"),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
