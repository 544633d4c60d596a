//! Lexical scoring engine
//!
//! Scores every document in the corpus against a tokenized query and returns
//! the top-K ranked subset. Deterministic: identical input always produces
//! the identical ranking, in time linear in corpus size x query tokens.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use geoassist_core::{Category, Document};

use crate::Corpus;

/// Common English function words excluded from matching.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "it", "in", "on", "to", "of", "for", "and", "or", "do", "how", "can",
    "i", "my", "me", "what", "with", "this", "that", "from", "be", "are", "was", "were", "has",
    "have", "had", "not", "but", "if", "so", "at", "by", "up", "about", "into", "through", "just",
    "also", "than", "then",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("valid tokenizer pattern"));

/// Per-token content score cap, bounding any single token's influence.
const CONTENT_MATCH_CAP: usize = 5;

/// Normalize text into match tokens.
///
/// Lowercases, replaces every character outside `[a-z0-9]` and whitespace
/// with a space, splits on whitespace runs, and drops single-character
/// tokens and stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_ALNUM
        .replace_all(&lowered, " ")
        .split_whitespace()
        .filter(|w| w.len() > 1 && !STOP_WORD_SET.contains(w))
        .map(str::to_string)
        .collect()
}

/// Strip an optional trailing " command" or " tool" suffix from a
/// lowercased title, for direct lookups like "circle command".
fn strip_title_suffix(title_lower: &str) -> &str {
    title_lower
        .strip_suffix(" command")
        .or_else(|| title_lower.strip_suffix(" tool"))
        .unwrap_or(title_lower)
}

fn score_document(doc: &Document, query_tokens: &[String], query_lower: &str) -> i64 {
    let title_lower = doc.title.to_lowercase();
    let content_lower = doc.content.to_lowercase();

    let mut score: i64 = 0;
    for token in query_tokens {
        // Title substring match (high weight)
        if title_lower.contains(token.as_str()) {
            score += 10;
        }
        // Title starts with the token (even higher for direct lookups)
        if title_lower.starts_with(token.as_str()) {
            score += 5;
        }
        // Content occurrences, counted as non-overlapping literal substring
        // matches and capped per token
        let occurrences = content_lower.matches(token.as_str()).count();
        score += occurrences.min(CONTENT_MATCH_CAP) as i64;
    }

    // Exact-title bonus, suffix stripped: "circle" hits "Circle Command"
    if strip_title_suffix(&title_lower) == query_lower {
        score += 50;
    }

    // Mild preference for command/tool reference pages over prose pages.
    // Applied unconditionally, so a non-general document keeps a floor of 1
    // even with zero token matches and survives the score filter.
    if doc.category != Category::General {
        score += 1;
    }

    score
}

/// Return the `top_k` most relevant documents for `query`.
///
/// If the query tokenizes to nothing (only punctuation or stop words), falls
/// back to the first `top_k` documents in corpus order, unscored. Documents
/// scoring 0 are excluded; ties keep original corpus order.
pub fn search<'a>(corpus: &'a Corpus, query: &str, top_k: usize) -> Vec<&'a Document> {
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return corpus.documents().iter().take(top_k).collect();
    }

    let query_lower = query.to_lowercase().trim().to_string();

    let mut scored: Vec<(i64, &Document)> = corpus
        .documents()
        .iter()
        .map(|doc| (score_document(doc, &query_tokens, &query_lower), doc))
        .filter(|(score, _)| *score > 0)
        .collect();

    // Stable sort: equal scores preserve corpus order
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored.into_iter().take(top_k).map(|(_, doc)| doc).collect()
}
