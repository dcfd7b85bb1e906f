use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

///  TokenFrequency
/// Counts how often each token occurs in one token stream.
/// Tokens keep first-seen order, which is the order the vocabulary
/// builder assigns indices in.
///
/// # Examples
/// ```
/// use tf_idf_similarity::TokenFrequency;
/// let mut token_freq = TokenFrequency::new();
/// token_freq.add_tokens(&["cat", "sat", "cat"]);
///
/// assert_eq!(token_freq.token_count("cat"), 2);
/// assert_eq!(token_freq.token_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TokenFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

/// Adding tokens
impl TokenFrequency {
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// Count a whole token stream
    pub fn from_tokens<T>(tokens: &[T]) -> Self
    where T: AsRef<str>
    {
        let mut freq = Self::new();
        freq.add_tokens(tokens);
        freq
    }

    /// Add one occurrence of a token
    ///
    /// # Arguments
    /// * `token` - token to add
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        // avoid allocating for tokens we have already seen
        if let Some(count) = self.token_count.get_mut(token) {
            *count += 1;
        } else {
            self.token_count.insert(token.to_string(), 1);
        }
        self.total_token_count += 1;
        self
    }

    /// Add every token of a slice
    ///
    /// # Arguments
    /// * `tokens` - tokens to add
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where T: AsRef<str>
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }
}

/// Inspecting counts
impl TokenFrequency {
    /// Occurrences of `token`, 0 when absent
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    /// Total number of tokens counted (with repetition)
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// Number of distinct tokens
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.token_count.is_empty()
    }

    /// Distinct tokens in first-seen order
    #[inline]
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(|s| s.as_str()).collect()
    }

    /// (token, count) pairs in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.token_count.iter().map(|(token, &count)| (token.as_str(), count))
    }
}

impl<T> FromIterator<T> for TokenFrequency
where T: AsRef<str>
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut freq = TokenFrequency::new();
        for token in iter {
            freq.add_token(token.as_ref());
        }
        freq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_tokens() {
        let freq = TokenFrequency::from_tokens(&["a", "b", "a", "a"]);
        assert_eq!(freq.token_count("a"), 3);
        assert_eq!(freq.token_count("b"), 1);
        assert_eq!(freq.token_count("c"), 0);
        assert_eq!(freq.token_sum(), 4);
        assert_eq!(freq.token_num(), 2);
    }

    #[test]
    fn keeps_first_seen_order() {
        let freq: TokenFrequency = ["dog", "cat", "dog", "ant"].into_iter().collect();
        assert_eq!(freq.token_set_ref_str(), vec!["dog", "cat", "ant"]);
    }

    #[test]
    fn empty_stream() {
        let freq = TokenFrequency::from_tokens::<&str>(&[]);
        assert!(freq.is_empty());
        assert_eq!(freq.token_sum(), 0);
        assert_eq!(freq.iter().count(), 0);
    }
}
