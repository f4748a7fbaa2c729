use crate::models::{Message, Role};
use colored::*;

/// Render one message as a labelled chat line with a dimmed timestamp, and
/// the remote rationale (when present) as a dimmed block underneath.
pub fn display_message(message: &Message) {
    let time = message.timestamp.format("%H:%M");
    match message.role {
        Role::User => {
            println!("{} {}", format!("Bạn [{}]:", time).cyan().bold(), message.content);
        }
        Role::Assistant => {
            println!(
                "{} {}",
                format!("Trợ lý [{}]:", time).green().bold(),
                message.content
            );
            if let Some(reasoning) = &message.reasoning {
                println!("{}", "Phân tích:".dimmed().bold());
                println!("{}", reasoning.dimmed().italic());
            }
        }
    }
}

pub fn display_history(messages: &[Message]) {
    for message in messages {
        display_message(message);
        println!();
    }
}
