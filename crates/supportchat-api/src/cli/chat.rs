//! `send` and `history` commands.

use console::style;

use supportchat_core::chat::repository::ConversationRepository;
use supportchat_core::chat::service::load_history;
use supportchat_infra::sqlite::conversation::SqliteConversationRepository;
use supportchat_types::chat::{ConversationId, Sender};

use crate::state::AppState;

/// Run one chat turn and print the reply.
pub async fn send_message(
    state: &AppState,
    message: &str,
    session: Option<String>,
    json: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let turn = state
        .chat_service
        .handle_turn(message, session.map(ConversationId::from))
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&turn)?);
        return Ok(());
    }

    if quiet {
        println!("{}", turn.reply);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("Agent:").cyan().bold(), turn.reply);
    println!();
    println!(
        "  {} {}",
        style("Session:").dim(),
        style(turn.session_id.as_str()).yellow()
    );
    println!(
        "  {}",
        style(format!(
            "Continue with: supportchat send \"...\" --session {}",
            turn.session_id
        ))
        .dim()
    );
    println!();

    Ok(())
}

/// Print a conversation's history, oldest-first.
pub async fn show_history(
    repo: &SqliteConversationRepository,
    session_id: &str,
    json: bool,
) -> anyhow::Result<()> {
    let id = ConversationId::from(session_id);
    let conversation = repo.get_conversation(&id).await?;
    let history = load_history(repo, &id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    let Some(conversation) = conversation else {
        println!();
        println!(
            "  {} No conversation with id '{}'.",
            style("i").blue().bold(),
            style(session_id).yellow()
        );
        println!();
        return Ok(());
    };

    println!();
    println!(
        "  {} {}",
        style("Conversation").bold(),
        style(conversation.id.as_str()).yellow()
    );
    println!(
        "  {}",
        style(format!(
            "Started {}",
            conversation.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ))
        .dim()
    );

    println!();
    for entry in &history {
        println!("  {} {}", sender_label(entry.sender), entry.text);
    }
    println!();
    println!("  {}", style(format!("{} message(s)", history.len())).dim());
    println!();

    Ok(())
}

fn sender_label(sender: Sender) -> String {
    match sender {
        Sender::User => format!("{}", style("You:  ").green().bold()),
        Sender::Ai => format!("{}", style("Agent:").cyan().bold()),
    }
}
