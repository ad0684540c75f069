use crate::lexicon::VectorTable;
use crate::scorer::PartialFeatureMap;
use crate::types::NUM_EMOTIONS;

/// Sums the emotion vectors of every token found in `table`.
///
/// `fields` names the ten dimensions in table column order.
pub fn vector_sum<S: AsRef<str>>(
    fields: &[&'static str; NUM_EMOTIONS],
    tokens: &[S],
    table: &VectorTable,
) -> PartialFeatureMap {
    let mut sum_vec = [0.0f32; NUM_EMOTIONS];
    for token in tokens {
        if let Some(vector) = table.get(token.as_ref()) {
            for (acc, v) in sum_vec.iter_mut().zip(vector) {
                *acc += v;
            }
        }
    }

    let mut features = PartialFeatureMap::with_capacity(NUM_EMOTIONS);
    for (name, value) in fields.iter().copied().zip(sum_vec) {
        features.insert(name, value);
    }
    features
}
