use std::sync::OnceLock;

use regex::Regex;

/// word characters, keeping in-word apostrophes ("let's", "it’s")
fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\w+(?:['’]\w+)*").expect("valid word regex"))
}

/// sentence terminators followed by whitespace
fn sentence_end_regex() -> &'static Regex {
    static SENTENCE_END: OnceLock<Regex> = OnceLock::new();
    SENTENCE_END.get_or_init(|| Regex::new(r"[.!?]+\s+").expect("valid sentence regex"))
}

/// Split text into word tokens, case preserved.
/// Punctuation and whitespace are dropped.
///
/// # Examples
/// ```
/// use tf_idf_similarity::text::tokenize_words;
/// assert_eq!(tokenize_words("Let's explore it!"), vec!["Let's", "explore", "it"]);
/// ```
pub fn tokenize_words(text: &str) -> Vec<String> {
    word_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split text into sentences at `.`, `!` or `?` followed by whitespace.
/// The terminator stays with its sentence; blank pieces are dropped.
pub fn tokenize_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in sentence_end_regex().find_iter(text) {
        let end = m.start() + m.as_str().trim_end().len();
        push_trimmed(&mut sentences, &text[start..end]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}
