/// Tuning knobs for the suggestion queries of a [`Trie`](crate::Trie).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Upper bound on the number of words `auto_suggest` returns.
    /// `None` returns every match.
    pub max_suggestions: Option<usize>,
    /// Shortest prefix (in characters) that `spelling_suggestions` may offer.
    pub min_spelling_prefix: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_suggestions: None,
            min_spelling_prefix: 1,
        }
    }
}
