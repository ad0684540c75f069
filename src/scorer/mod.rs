//! Per-lexicon scoring rules.
//!
//! Each scorer takes a token (or bigram) sequence and one lookup table and returns a
//! [`PartialFeatureMap`] whose field order is fixed by the caller-supplied name list.
//! Tokens missing from a table contribute nothing; no scorer can fail.

pub mod emotion;
pub mod label;
pub mod negation;
pub mod polarity;

pub use emotion::vector_sum;
pub use label::label_count;
pub use negation::presence_count;
pub use polarity::polarity_split;

/// Ordered `(feature name, value)` pairs produced by one scorer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialFeatureMap {
    fields: Vec<(&'static str, f32)>,
}

impl PartialFeatureMap {
    pub fn with_capacity(capacity: usize) -> PartialFeatureMap {
        PartialFeatureMap {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Appends a field. Position in the output follows insertion order.
    pub fn insert(&mut self, name: &'static str, value: f32) {
        self.fields.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.fields.iter().map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        self.fields.iter().copied()
    }
}
