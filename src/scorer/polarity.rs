use crate::lexicon::ScalarTable;
use crate::scorer::PartialFeatureMap;

/// Splits matched scores by sign.
///
/// `fields` is `[positive score, negative score, positive count, negative count]`.
/// A score of exactly zero counts as positive. Counts are emitted as floats.
pub fn polarity_split<S: AsRef<str>>(
    fields: &[&'static str; 4],
    items: &[S],
    table: &ScalarTable,
) -> PartialFeatureMap {
    let (mut positive_score, mut negative_score) = (0.0f32, 0.0f32);
    let (mut positive_words, mut negative_words) = (0u32, 0u32);

    for item in items {
        let Some(score) = table.get(item.as_ref()) else {
            continue;
        };
        if score >= 0.0 {
            positive_score += score;
            positive_words += 1;
        } else {
            negative_score += score;
            negative_words += 1;
        }
    }

    let [positive_score_s, negative_score_s, positive_words_s, negative_words_s] = *fields;
    let mut features = PartialFeatureMap::with_capacity(4);
    features.insert(positive_score_s, positive_score);
    features.insert(negative_score_s, negative_score);
    features.insert(positive_words_s, positive_words as f32);
    features.insert(negative_words_s, negative_words as f32);
    features
}
