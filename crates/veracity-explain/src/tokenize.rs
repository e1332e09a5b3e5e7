//! Word tokenization shared by the sampler and the vocabulary builder

use regex::Regex;
use veracity_core::Result;

/// Word tokens are runs of two or more word characters; shorter runs and
/// punctuation are dropped.
const WORD_PATTERN: &str = r"\b\w\w+\b";

/// Case-normalizing word tokenizer.
///
/// One tokenization rule is used everywhere in a request: the sampler
/// perturbs exactly the tokens the vocabulary later counts.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    word: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        let word = Regex::new(WORD_PATTERN).map_err(|e| {
            veracity_core::Error::internal(format!("Failed to compile word pattern: {e}"))
        })?;
        Ok(Self { word })
    }

    /// Lowercase `text` and extract its word tokens in order.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.word
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_orders() {
        let tokenizer = Tokenizer::new().unwrap();
        assert_eq!(
            tokenizer.tokenize("Breaking: Scientists CONFIRM the moon"),
            vec!["breaking", "scientists", "confirm", "the", "moon"]
        );
    }

    #[test]
    fn test_tokenize_drops_short_tokens_and_punctuation() {
        let tokenizer = Tokenizer::new().unwrap();
        assert_eq!(tokenizer.tokenize("a b, c! word"), vec!["word"]);
        assert!(tokenizer.tokenize("!?.,;").is_empty());
        assert!(tokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_digits_and_underscores() {
        let tokenizer = Tokenizer::new().unwrap();
        assert_eq!(
            tokenizer.tokenize("covid-19 has_underscores 2024"),
            vec!["covid", "19", "has_underscores", "2024"]
        );
    }
}
