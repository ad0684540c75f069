use crate::lexicon::LabelTable;
use crate::scorer::PartialFeatureMap;

pub const POSITIVE_LABEL: &str = "positive";

/// Counts tokens labelled `"positive"` against every other label.
///
/// Any label that is not exactly `"positive"` is counted as negative, including
/// values such as `"neutral"`.
pub fn label_count<S: AsRef<str>>(
    fields: &[&'static str; 2],
    tokens: &[S],
    table: &LabelTable,
) -> PartialFeatureMap {
    let (mut positive_count, mut negative_count) = (0u32, 0u32);
    for label in tokens.iter().filter_map(|token| table.get(token.as_ref())) {
        if label == POSITIVE_LABEL {
            positive_count += 1;
        } else {
            negative_count += 1;
        }
    }

    let mut features = PartialFeatureMap::with_capacity(2);
    features.insert(fields[0], positive_count as f32);
    features.insert(fields[1], negative_count as f32);
    features
}
