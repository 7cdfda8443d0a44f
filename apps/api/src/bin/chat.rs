//! Terminal client for the chat relay.
//!
//! Streams the assistant's reply token-by-token, the same way the web UI
//! renders it. Pass a resume category as the first argument; anything else
//! (or nothing) gets the generic interview.
//!
//! Usage: chat [product_mnc|service_it|startup|overseas_ats]

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use resumeai::chat::categories::Category;
use resumeai::chat::client::{ChatClient, ClientError};
use resumeai::chat::conversation::Conversation;

#[tokio::main]
async fn main() -> Result<()> {
    let base_url =
        std::env::var("CHAT_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let category = std::env::args().nth(1);

    match category.as_deref().map(Category::parse) {
        Some(Some(c)) => println!("Resume category: {}", c.as_str()),
        Some(None) => println!("Unknown category; using the generic interview."),
        None => {
            let tags: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
            println!("No category given (available: {}).", tags.join(", "));
        }
    }
    println!("Connecting to {base_url} — type your answers, Ctrl-D to quit.\n");

    let client = ChatClient::new(base_url);
    let mut conversation = Conversation::new();

    // Opening turn: empty history, the assistant asks its first question.
    run_turn(&client, &mut conversation, category.as_deref()).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        conversation.push_user(input);
        run_turn(&client, &mut conversation, category.as_deref()).await;
    }

    Ok(())
}

async fn run_turn(client: &ChatClient, conversation: &mut Conversation, category: Option<&str>) {
    let history = conversation.messages().to_vec();
    conversation.begin_assistant_turn();

    let result = client
        .send(&history, category, |delta| {
            print!("{delta}");
            let _ = std::io::stdout().flush();
            conversation.apply_delta(delta);
        })
        .await;

    conversation.complete_turn();
    println!("\n");

    if let Err(err) = result {
        match err {
            ClientError::RateLimited(msg) | ClientError::QuotaExhausted(msg) => {
                eprintln!("! {msg}");
            }
            other => eprintln!("! {other}"),
        }
    }
}
