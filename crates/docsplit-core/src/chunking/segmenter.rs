//! Sentence segmentation
//!
//! Splits text at `.`, `!`, or `?` followed by whitespace. Terminators stay
//! attached to their sentence; a trailing fragment without a terminator is
//! kept as its own sentence.

/// Splits text into sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    pub fn new() -> Self {
        Self
    }

    pub fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            current.push(c);
            if matches!(c, '.' | '!' | '?') {
                let at_boundary = match chars.peek() {
                    Some(next) => next.is_whitespace(),
                    None => true,
                };
                if at_boundary {
                    push_sentence(&mut sentences, &mut current);
                }
            }
        }
        push_sentence(&mut sentences, &mut current);

        sentences
    }
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}
