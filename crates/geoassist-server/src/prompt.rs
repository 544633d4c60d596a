//! Grounding context assembly

use geoassist_core::{ChatTurn, Document};

/// Number of documents supplied as grounding context.
pub const TOP_K: usize = 8;

/// Only the trailing turns of the conversation are forwarded upstream.
pub const MAX_HISTORY_TURNS: usize = 6;

/// The assistant's behavioral contract.
pub const SYSTEM_PROMPT: &str = "You are the GeoGebra Calculator Suite Assistant. You help students and teachers learn how to use GeoGebra tools and commands.

CRITICAL RULES:
1. Answer ONLY based on the manual excerpts provided below. Never use outside knowledge about GeoGebra.
2. If the answer is not in the provided excerpts, say: \"I don't have information about that in the GeoGebra manual. Try rephrasing your question or ask about a specific tool or command.\"
3. Always mention the specific tool or command name you are referring to.
4. Keep answers clear and beginner-friendly.
5. When describing how to use a tool, give step-by-step instructions.
6. If a command has syntax like Circle(Point, Radius), show it clearly.
7. When relevant, mention related tools or commands the user might also find useful.
8. Answer in the same language the user writes in. The manual excerpts are in English but translate your explanation to match the user's language.";

/// Concatenate the behavioral contract with the retrieved documents, each
/// rendered as a labeled manual section.
pub fn build_system_prompt(documents: &[&Document]) -> String {
    let context = documents
        .iter()
        .enumerate()
        .map(|(i, doc)| {
            format!(
                "--- Manual Section {}: {} ({}) ---\n{}",
                i + 1,
                doc.title,
                doc.category.as_str(),
                doc.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "{}\n\n=== GEOGEBRA MANUAL EXCERPTS ===\n{}\n=== END OF EXCERPTS ===",
        SYSTEM_PROMPT, context
    )
}

/// Build the conversational turns: up to the last `MAX_HISTORY_TURNS` history
/// entries in original order, with the new user message appended last.
pub fn build_turns(history: Option<&[ChatTurn]>, message: &str) -> Vec<ChatTurn> {
    let mut turns = Vec::new();
    if let Some(history) = history {
        let skip = history.len().saturating_sub(MAX_HISTORY_TURNS);
        turns.extend(history[skip..].iter().cloned());
    }
    turns.push(ChatTurn::user(message));
    turns
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoassist_core::{Category, Role};

    fn doc(title: &str, category: Category, content: &str) -> Document {
        Document {
            title: title.to_string(),
            category,
            path: String::new(),
            content: content.to_string(),
        }
    }

    #[test]
    fn system_prompt_labels_each_section() {
        let circle = doc("Circle Command", Category::Command, "Creates a circle.");
        let intro = doc("Introduction", Category::General, "Welcome.");
        let prompt = build_system_prompt(&[&circle, &intro]);

        assert!(prompt.starts_with(SYSTEM_PROMPT));
        assert!(prompt.contains("--- Manual Section 1: Circle Command (command) ---\nCreates a circle."));
        assert!(prompt.contains("--- Manual Section 2: Introduction (general) ---\nWelcome."));
        assert!(prompt.ends_with("=== END OF EXCERPTS ==="));
    }

    #[test]
    fn history_is_truncated_to_last_six_turns() {
        let history: Vec<ChatTurn> = (0..10)
            .map(|i| {
                if i % 2 == 0 {
                    ChatTurn::user(format!("question {i}"))
                } else {
                    ChatTurn::assistant(format!("answer {i}"))
                }
            })
            .collect();

        let turns = build_turns(Some(&history), "latest question");
        assert_eq!(turns.len(), 7);
        assert_eq!(turns[0].content, "question 4");
        assert_eq!(turns[5].content, "answer 9");

        let last = turns.last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.content, "latest question");
    }

    #[test]
    fn missing_history_yields_single_turn() {
        let turns = build_turns(None, "how do I rotate a point?");
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].content, "how do I rotate a point?");
    }
}
