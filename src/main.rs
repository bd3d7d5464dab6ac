use anyhow::Context;
use memeloader::client::ImgflipClient;
use memeloader::config::Config;
use memeloader::domain::MemeSource;
use memeloader::errors::FetchError;
use memeloader::models::MemeRecord;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (logging)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "memeloader=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load configuration")?;
    tracing::info!(base_url = %config.base_url, timeout = ?config.request_timeout, "Starting meme loader");

    let source: Arc<dyn MemeSource> = Arc::new(ImgflipClient::new(&config));

    // Initial load, like the screen fetching once at startup.
    show_meme(source.as_ref()).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("Press Enter for another meme, or q to quit.");
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "q" {
            break;
        }
        show_meme(source.as_ref()).await;
        println!("Press Enter for another meme, or q to quit.");
    }

    Ok(())
}

async fn show_meme(source: &dyn MemeSource) {
    match source.fetch_random_meme().await {
        Ok(meme) => render_meme(&meme),
        Err(err) => render_error(&err),
    }
}

fn render_meme(meme: &MemeRecord) {
    println!();
    println!("{}", meme.name);
    println!("  {}", meme.image_url);
    println!(
        "  {}x{} px, {} text box(es)",
        meme.width, meme.height, meme.box_count
    );
    println!();
}

/// Every failure kind gets an explicit message so the user can tell
/// "try again" apart from "nothing to show".
fn render_error(err: &FetchError) {
    tracing::warn!(error = %err, "Meme fetch failed");
    println!();
    match err {
        FetchError::Network(_) => {
            println!("Could not reach the meme service. Check your connection and try again.");
        }
        FetchError::InvalidResponse(_) => {
            println!("The meme service sent back something unreadable. Try again later.");
        }
        FetchError::NoMemesAvailable => {
            println!("No memes available right now.");
        }
    }
    println!();
}
