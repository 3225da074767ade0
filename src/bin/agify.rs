//! agify: line-oriented front end for the Agify.io client.
//!
//! Reads one name per line from stdin, looks each one up, and prints
//! `name: age` per line. Failed lookups are logged and counted; the process
//! exits non-zero if any lookup failed.
//!
//! Usage:
//!   printf 'Abraham\nEufrassio\n' | agify
//!
//! Environment:
//!   AGIFY_API_KEY    API key for authenticated requests
//!   RUST_LOG         Log filter (default: warn)

use std::io::BufRead;

use agify_client::AgifyClient;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut builder = AgifyClient::builder();
    if let Ok(key) = std::env::var("AGIFY_API_KEY") {
        builder = builder.api_key(key);
    }
    let client = match builder.build() {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to construct client");
            std::process::exit(2);
        }
    };

    let mut exit_code = 0;
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, "failed to read input line");
                exit_code = 1;
                break;
            }
        };
        let name = line.trim();
        if name.is_empty() {
            continue;
        }

        match client.fetch_one(name, None).await {
            Ok(record) => match record.age {
                Some(age) => println!("{}: {}", record.name, age),
                None => println!("{}: null", record.name),
            },
            Err(e) => {
                exit_code = 1;
                error!(name, error = %e, "failed to get age");
            }
        }
    }

    std::process::exit(exit_code);
}
