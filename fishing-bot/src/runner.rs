//! Interactive terminal chat loop: banner, message rendering, stdin REPL.

use std::sync::Arc;

use chat_core::{Message, Role};
use gemini_client::GeminiClient;
use geolocate::IpApiLocator;
use spot_finder::GeminiSpotFinder;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use crate::config::BotConfig;
use crate::session::{ChatSession, SubmitOutcome};

/// Runs the chat REPL until EOF or `/quit`.
pub async fn run_chat(config: BotConfig) -> anyhow::Result<()> {
    let transport: Arc<dyn gemini_client::ModelTransport> = match &config.api_base_url {
        Some(base) => Arc::new(GeminiClient::with_api_base(
            config.api_key.clone(),
            base.clone(),
        )),
        None => Arc::new(GeminiClient::new(config.api_key.clone())),
    };
    let finder = GeminiSpotFinder::new(transport).with_model(config.model.clone());

    // Kick off the single location attempt before printing the banner so the
    // lookup overlaps with startup output.
    let locator = build_locator(&config);
    let location_task = tokio::spawn(async move { geolocate::acquire_once(&locator).await });

    print_banner();

    let location = location_task.await.unwrap_or(None);
    info!(located = location.is_some(), model = %config.model, "Chat session starting");

    let mut session = ChatSession::new(Arc::new(finder), location);
    for message in session.conversation().messages() {
        print_message(message);
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim().to_string();
        if line == "/quit" || line == "/exit" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        println!("  [scanning social feeds: 30mi radius, 5 posts/species...]");

        let rendered_before = session.conversation().messages().len();
        let outcome = session.submit(&line).await;
        if outcome == SubmitOutcome::Rejected {
            continue;
        }
        for message in &session.conversation().messages()[rendered_before..] {
            print_message(message);
        }
    }

    println!("Session closed. Tight lines.");
    Ok(())
}

/// Resolves the location once and prints the result; the `probe-location` subcommand.
pub async fn run_probe_location(endpoint: Option<String>) -> anyhow::Result<()> {
    let locator = match endpoint {
        Some(url) => IpApiLocator::new().with_endpoint(url),
        None => IpApiLocator::new(),
    };
    match geolocate::acquire_once(&locator).await {
        Some(coords) => println!(
            "Location resolved: lat {}, lng {}",
            coords.latitude, coords.longitude
        ),
        None => println!("Location unavailable; chat will ask for an area instead."),
    }
    Ok(())
}

fn build_locator(config: &BotConfig) -> IpApiLocator {
    match &config.geolocate_url {
        Some(url) => IpApiLocator::new().with_endpoint(url.clone()),
        None => IpApiLocator::new(),
    }
}

fn print_banner() {
    println!("==============================================");
    println!(" FISHING SPOT CHAT BOT — metadata extraction");
    println!(" 30-MILE RADIUS | 5-POST LIMIT | SOCIAL SCAN");
    println!(" Scanning IG, X, FB | Verified wild locations");
    println!("==============================================");
    println!("Type a species or question; /quit to exit.");
    println!();
}

fn print_message(message: &Message) {
    let tag = match message.role {
        Role::User => "you",
        Role::Bot => "bot",
    };
    println!(
        "[{} {}] {}",
        tag,
        message.created_at.format("%H:%M"),
        message.content
    );
    for link in &message.grounding_links {
        println!("    ↳ {} — {}", link.title, link.uri);
    }
}
