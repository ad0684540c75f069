use crate::lexicon::WordSet;
use crate::scorer::PartialFeatureMap;

/// Number of token occurrences found in `words`. Repeats are counted every time.
pub fn presence_count<S: AsRef<str>>(
    field: &'static str,
    tokens: &[S],
    words: &WordSet,
) -> PartialFeatureMap {
    let count = tokens
        .iter()
        .map(|token| token.as_ref())
        .filter(|token| words.contains(token))
        .count();

    let mut features = PartialFeatureMap::with_capacity(1);
    features.insert(field, count as f32);
    features
}
