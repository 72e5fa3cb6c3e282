//! Keyword-overlap question answering placeholder.

/// Answer returned when no sentence shares a word with the question.
pub const NO_ANSWER: &str = "No answer found";

/// Return the first sentence of `context` containing any question word.
///
/// Sentences are the `.`-separated segments of the context, scanned in order;
/// for each, the question's whitespace-separated words are tried in order and
/// matched as case-insensitive substrings. The matching sentence is returned
/// trimmed. A match whose trimmed sentence is empty does not count.
pub fn answer_question(context: &str, question: &str) -> String {
    let words: Vec<String> = question.split_whitespace().map(str::to_lowercase).collect();

    for sentence in context.split('.') {
        let lowered = sentence.to_lowercase();
        if words.iter().any(|w| lowered.contains(w.as_str())) {
            let trimmed = sentence.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    NO_ANSWER.to_string()
}
