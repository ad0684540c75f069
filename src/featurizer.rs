//! Assembles the ten lexicon scorers into one fixed-length feature vector.
//!
//! The layout is stable: [`FEATURE_COUNT`] values, grouped by [`Lexicon::ALL`] order,
//! and within each group by the names in [`Lexicon::field_names`]. Downstream models
//! may bind by position.

use itertools::Itertools;
use tracing::debug;

use crate::bigram::bigrams;
use crate::lexicon::{Lexicon, LexiconStore};
use crate::scorer::{label_count, polarity_split, presence_count, vector_sum, PartialFeatureMap};
use crate::types::{FeatureVector, NamedFeatures, NUM_EMOTIONS};
use crate::util::multi_thread_process_list;

pub const NRC_HASHTAG_EMOTION_FIELDS: [&str; NUM_EMOTIONS] = [
    "nrc_hashtag_emotion_anger",
    "nrc_hashtag_emotion_anticipation",
    "nrc_hashtag_emotion_disgust",
    "nrc_hashtag_emotion_fear",
    "nrc_hashtag_emotion_joy",
    "nrc_hashtag_emotion_negative",
    "nrc_hashtag_emotion_positive",
    "nrc_hashtag_emotion_sadness",
    "nrc_hashtag_emotion_surprise",
    "nrc_hashtag_emotion_trust",
];

pub const NRC_AFFECT_INTENSITY_FIELDS: [&str; NUM_EMOTIONS] = [
    "nrc_affect_intensity_anger",
    "nrc_affect_intensity_anticipation",
    "nrc_affect_intensity_disgust",
    "nrc_affect_intensity_fear",
    "nrc_affect_intensity_joy",
    "nrc_affect_intensity_negative",
    "nrc_affect_intensity_positive",
    "nrc_affect_intensity_sadness",
    "nrc_affect_intensity_surprise",
    "nrc_affect_intensity_trust",
];

pub const NRC_HASHTAG_SENTIMENT_UNIGRAM_FIELDS: [&str; 4] = [
    "nrc_hashtag_sentiment_positive_unigram_score",
    "nrc_hashtag_sentiment_negative_unigram_score",
    "nrc_hashtag_sentiment_positive_unigram_words",
    "nrc_hashtag_sentiment_negative_unigram_words",
];

pub const NRC_HASHTAG_SENTIMENT_BIGRAM_FIELDS: [&str; 4] = [
    "nrc_hashtag_sentiment_positive_bigram_score",
    "nrc_hashtag_sentiment_negative_bigram_score",
    "nrc_hashtag_sentiment_positive_bigram_words",
    "nrc_hashtag_sentiment_negative_bigram_words",
];

pub const SENTIMENT140_UNIGRAM_FIELDS: [&str; 4] = [
    "sentiment140_positive_unigram_score",
    "sentiment140_negative_unigram_score",
    "sentiment140_positive_unigram_words",
    "sentiment140_negative_unigram_words",
];

pub const SENTIMENT140_BIGRAM_FIELDS: [&str; 4] = [
    "sentiment140_positive_bigram_score",
    "sentiment140_negative_bigram_score",
    "sentiment140_positive_bigram_words",
    "sentiment140_negative_bigram_words",
];

pub const SENTI_WORDNET_FIELDS: [&str; 4] = [
    "senti_wordnet_positive_score",
    "senti_wordnet_negative_score",
    "senti_wordnet_positive_words",
    "senti_wordnet_negative_words",
];

pub const BING_LIU_FIELDS: [&str; 2] = [
    "bing_liu_sentiment_lexicon_positive_count",
    "bing_liu_sentiment_lexicon_negative_count",
];

pub const NRC_EXPANDED_FIELDS: [&str; NUM_EMOTIONS] = [
    "nrc_expanded_anger",
    "nrc_expanded_anticipation",
    "nrc_expanded_disgust",
    "nrc_expanded_fear",
    "nrc_expanded_joy",
    "nrc_expanded_negative",
    "nrc_expanded_positive",
    "nrc_expanded_sadness",
    "nrc_expanded_surprise",
    "nrc_expanded_trust",
];

pub const NEGATING_WORDS_FIELDS: [&str; 1] = ["num_of_negating_words"];

pub const FEATURE_COUNT: usize = 53;

impl Lexicon {
    /// Names of the features this lexicon contributes, in output order.
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            Lexicon::NrcHashtagEmotion => &NRC_HASHTAG_EMOTION_FIELDS,
            Lexicon::NrcAffectIntensity => &NRC_AFFECT_INTENSITY_FIELDS,
            Lexicon::NrcHashtagSentimentUnigrams => &NRC_HASHTAG_SENTIMENT_UNIGRAM_FIELDS,
            Lexicon::NrcHashtagSentimentBigrams => &NRC_HASHTAG_SENTIMENT_BIGRAM_FIELDS,
            Lexicon::Sentiment140Unigrams => &SENTIMENT140_UNIGRAM_FIELDS,
            Lexicon::Sentiment140Bigrams => &SENTIMENT140_BIGRAM_FIELDS,
            Lexicon::SentiWordNet => &SENTI_WORDNET_FIELDS,
            Lexicon::BingLiu => &BING_LIU_FIELDS,
            Lexicon::NrcExpanded => &NRC_EXPANDED_FIELDS,
            Lexicon::NegatingWords => &NEGATING_WORDS_FIELDS,
        }
    }

    pub fn arity(self) -> usize {
        self.field_names().len()
    }

    /// Whether this lexicon is keyed by bigrams rather than single tokens.
    pub fn uses_bigrams(self) -> bool {
        matches!(
            self,
            Lexicon::NrcHashtagSentimentBigrams | Lexicon::Sentiment140Bigrams
        )
    }
}

/// Stateless feature extractor over a borrowed [`LexiconStore`].
#[derive(Debug, Clone, Copy)]
pub struct Featurizer<'a> {
    store: &'a LexiconStore,
}

impl<'a> Featurizer<'a> {
    pub fn new(store: &'a LexiconStore) -> Featurizer<'a> {
        Featurizer { store }
    }

    pub fn feature_names() -> Vec<&'static str> {
        Lexicon::ALL
            .into_iter()
            .flat_map(|lexicon| lexicon.field_names().iter().copied())
            .collect_vec()
    }

    /// Runs one lexicon's scorer. `bigrams` must be derived from `tokens`.
    pub fn score<S: AsRef<str>>(
        &self,
        lexicon: Lexicon,
        tokens: &[S],
        bigrams: &[String],
    ) -> PartialFeatureMap {
        let store = self.store;
        match lexicon {
            Lexicon::NrcHashtagEmotion => {
                vector_sum(&NRC_HASHTAG_EMOTION_FIELDS, tokens, store.nrc_hashtag_emotion())
            }
            Lexicon::NrcAffectIntensity => {
                vector_sum(&NRC_AFFECT_INTENSITY_FIELDS, tokens, store.nrc_affect_intensity())
            }
            Lexicon::NrcHashtagSentimentUnigrams => polarity_split(
                &NRC_HASHTAG_SENTIMENT_UNIGRAM_FIELDS,
                tokens,
                store.nrc_hashtag_sentiment_unigrams(),
            ),
            Lexicon::NrcHashtagSentimentBigrams => polarity_split(
                &NRC_HASHTAG_SENTIMENT_BIGRAM_FIELDS,
                bigrams,
                store.nrc_hashtag_sentiment_bigrams(),
            ),
            Lexicon::Sentiment140Unigrams => {
                polarity_split(&SENTIMENT140_UNIGRAM_FIELDS, tokens, store.sentiment140_unigrams())
            }
            Lexicon::Sentiment140Bigrams => {
                polarity_split(&SENTIMENT140_BIGRAM_FIELDS, bigrams, store.sentiment140_bigrams())
            }
            Lexicon::SentiWordNet => {
                polarity_split(&SENTI_WORDNET_FIELDS, tokens, store.senti_wordnet())
            }
            Lexicon::BingLiu => label_count(&BING_LIU_FIELDS, tokens, store.bing_liu()),
            Lexicon::NrcExpanded => vector_sum(&NRC_EXPANDED_FIELDS, tokens, store.nrc_expanded()),
            Lexicon::NegatingWords => {
                presence_count(NEGATING_WORDS_FIELDS[0], tokens, store.negating_words())
            }
        }
    }

    fn partial_maps<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<PartialFeatureMap> {
        let bigrams = bigrams(tokens);
        Lexicon::ALL
            .into_iter()
            .map(|lexicon| self.score(lexicon, tokens, &bigrams))
            .collect_vec()
    }

    /// Feature vector for one token sequence. Always [`FEATURE_COUNT`] long.
    pub fn featurize<S: AsRef<str>>(&self, tokens: &[S]) -> FeatureVector {
        let mut features = FeatureVector::with_capacity(FEATURE_COUNT);
        for partial in self.partial_maps(tokens) {
            features.extend(partial.values());
        }
        features
    }

    /// Same values as [`featurize`](Self::featurize), paired with their names.
    pub fn featurize_named<S: AsRef<str>>(&self, tokens: &[S]) -> NamedFeatures {
        self.partial_maps(tokens)
            .iter()
            .flat_map(|partial| partial.iter())
            .map(|(name, value)| (name.to_owned(), value))
            .collect_vec()
    }

    /// Featurizes `documents` on up to `num_threads` worker threads sharing the store.
    /// Results are returned in input order.
    pub fn featurize_batch<S>(&self, documents: &[Vec<S>], num_threads: usize) -> Vec<FeatureVector>
    where
        S: AsRef<str> + Sync,
    {
        debug!(documents = documents.len(), num_threads, "featurizing batch");
        multi_thread_process_list(documents, num_threads, |chunk: &[Vec<S>]| {
            chunk
                .iter()
                .map(|tokens| self.featurize(tokens.as_slice()))
                .collect_vec()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{LexiconTables, ScalarTable, VectorTable};
    use crate::types::EMOTION_NAMES;

    #[test]
    fn schema_adds_up_to_feature_count() {
        let total: usize = Lexicon::ALL.into_iter().map(Lexicon::arity).sum();
        assert_eq!(total, FEATURE_COUNT);
        assert_eq!(Featurizer::feature_names().len(), FEATURE_COUNT);
    }

    #[test]
    fn feature_names_are_unique() {
        let names = Featurizer::feature_names();
        assert_eq!(names.iter().unique().count(), names.len());
    }

    #[test]
    fn vector_fields_follow_emotion_order() {
        for fields in [
            &NRC_HASHTAG_EMOTION_FIELDS,
            &NRC_AFFECT_INTENSITY_FIELDS,
            &NRC_EXPANDED_FIELDS,
        ] {
            for (field, emotion) in fields.iter().zip(EMOTION_NAMES) {
                assert!(field.ends_with(&format!("_{}", emotion)), "{field}");
            }
        }
    }

    #[test]
    fn only_bigram_lexicons_use_bigrams() {
        let bigram_lexicons = Lexicon::ALL
            .into_iter()
            .filter(|lexicon| lexicon.uses_bigrams())
            .collect_vec();
        assert_eq!(
            bigram_lexicons,
            vec![Lexicon::NrcHashtagSentimentBigrams, Lexicon::Sentiment140Bigrams]
        );
    }

    #[test]
    fn each_group_lands_at_its_offset() {
        let store = LexiconStore::new(LexiconTables {
            nrc_affect_intensity: VectorTable::from_rows(
                Lexicon::NrcAffectIntensity,
                vec![("rage", vec![0.9, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])],
            )
            .unwrap(),
            sentiment140_bigrams: ScalarTable::from_rows(
                Lexicon::Sentiment140Bigrams,
                vec![("so rage", -0.5)],
            )
            .unwrap(),
            ..Default::default()
        });
        let features = Featurizer::new(&store).featurize(&["so", "rage"]);
        let names = Featurizer::feature_names();

        let anger = names.iter().position(|n| *n == "nrc_affect_intensity_anger").unwrap();
        assert_eq!(anger, 10);
        assert_eq!(features[anger], 0.9);

        let negative = names
            .iter()
            .position(|n| *n == "sentiment140_negative_bigram_score")
            .unwrap();
        assert_eq!(negative, 33);
        assert_eq!(features[negative], -0.5);
        assert_eq!(features.iter().filter(|v| **v != 0.0).count(), 3);
    }
}
