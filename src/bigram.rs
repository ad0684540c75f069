use itertools::Itertools;

/// Joins every adjacent pair of tokens with a single space.
///
/// `["a", "b", "c"]` becomes `["a b", "b c"]`; fewer than two tokens give an empty list.
pub fn bigrams<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| t.as_ref())
        .tuple_windows()
        .map(|(first, second)| format!("{} {}", first, second))
        .collect_vec()
}
