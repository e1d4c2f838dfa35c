//! Fetch the member list and print the first page.
//!
//! Run with: cargo run --example fetch_members
//!
//! Set ROSTER_URL (or put it in a .env file) to read from another endpoint.

use std::env;
use std::sync::Arc;

use roster_lib::LoadOutcome;
use roster_lib::PendingLoad;
use roster_lib::RosterClient;
use roster_lib::view::TableSnapshot;
use roster_lib::view::TableState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let mut builder = RosterClient::builder();
    if let Ok(url) = env::var("ROSTER_URL") {
        builder = builder.url(url);
    }
    let client = builder.build()?;

    println!("Fetching {}...\n", client.url());

    let mut state = TableState::default();
    match PendingLoad::spawn(Arc::new(client)).finish(&mut state).await {
        LoadOutcome::Loaded(n) => println!("Loaded {} members\n", n),
        LoadOutcome::Failed => println!("Load failed, table is empty\n"),
        LoadOutcome::Discarded => return Ok(()),
    }

    println!("{}", TableSnapshot::capture(&state));
    Ok(())
}
