//! Plain-text transcript export.
//!
//! Renders the active conversation into the downloadable text document
//! described by the export surface: one line per message with a localized
//! timestamp, author label and optional feedback suffix, an optional comment
//! line, and a blank separator line.

use super::message::{Feedback, Message, MessageRole};
use chrono::NaiveDate;

/// Author display labels, fixed mapping from role.
fn author_label(role: MessageRole) -> &'static str {
    match role {
        MessageRole::User => "Пользователь",
        MessageRole::Bot => "Бот",
    }
}

fn feedback_label(feedback: Feedback) -> &'static str {
    match feedback {
        Feedback::Helpful => "Помогло",
        Feedback::Unhelpful => "Не помогло",
    }
}

/// Renders a deterministic plain-text transcript of the given messages.
///
/// Pure: reads the slice, mutates nothing, and yields identical output for
/// identical input state.
pub fn render_transcript(messages: &[Message]) -> String {
    let mut content = String::new();
    for msg in messages {
        let time = msg.timestamp.format("%d.%m.%Y, %H:%M:%S");
        let feedback = match msg.feedback {
            Some(f) => format!(" ({})", feedback_label(f)),
            None => String::new(),
        };

        content.push_str(&format!(
            "[{}] {}: {}{}\n",
            time,
            author_label(msg.role),
            msg.content,
            feedback
        ));

        if let Some(comment) = &msg.comment {
            content.push_str(&format!("Комментарий: {comment}\n"));
        }
        content.push('\n');
    }
    content
}

/// File name for a transcript exported on the given date,
/// `chat-export-YYYY-MM-DD.txt`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("chat-export-{}.txt", date.format("%Y-%m-%d"))
}
