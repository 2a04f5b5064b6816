//! Text normalization and tokenization shared by the embedding and lexical
//! scoring paths.

/// Stopwords excluded from both the hashing fallback and the lexical scorer.
///
/// A small fixed set is enough here: candidate narratives are business prose,
/// and the goal is only to keep filler words from dominating term weights.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from",
    "had", "has", "have", "in", "into", "is", "it", "its", "of", "on", "or",
    "our", "that", "the", "their", "there", "these", "this", "to", "was",
    "we", "were", "which", "will", "with",
];

/// Collapse all whitespace runs to single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate at a char boundary, keeping at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Lowercase alphanumeric tokens of at least `min_len` chars, stopwords
/// removed. Everything non-alphanumeric is a separator.
pub fn tokenize(text: &str, min_len: usize) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() >= min_len)
        .filter(|word| !STOPWORDS.contains(word))
        .map(str::to_string)
        .collect()
}
