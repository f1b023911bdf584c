//! One-shot query command.

use anyhow::Result;
use console::style;

use aetheribot_types::chat::ChatRequest;

use crate::state::AppState;

/// Run the query pipeline once and print the reply.
///
/// Fails (exit code 1) on a missing credential or any upstream error.
pub async fn ask(state: &AppState, words: &[String], json: bool) -> Result<()> {
    let request = ChatRequest::from_utterance(words.join(" "));
    let utterance = request.utterance();
    let queries = state.queries()?;

    let text = queries.reply(utterance).await?;

    if json {
        let reply = serde_json::json!({ "text": text });
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("🤖").bold(), style(utterance).cyan());
    println!();
    for line in text.lines() {
        println!("  {line}");
    }
    println!();

    Ok(())
}
