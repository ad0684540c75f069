use std::fmt;

use tracing::warn;

pub mod config;
pub mod file;

use crate::error::{ConfigurationError, Result};
use crate::types::{EmotionVector, LabelMap, ScalarMap, VectorMap, WordList, NUM_EMOTIONS};

/// The ten lexicons, listed in the order their features appear in a feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lexicon {
    NrcHashtagEmotion,
    NrcAffectIntensity,
    NrcHashtagSentimentUnigrams,
    NrcHashtagSentimentBigrams,
    Sentiment140Unigrams,
    Sentiment140Bigrams,
    SentiWordNet,
    BingLiu,
    NrcExpanded,
    NegatingWords,
}

impl Lexicon {
    pub const ALL: [Lexicon; 10] = [
        Lexicon::NrcHashtagEmotion,
        Lexicon::NrcAffectIntensity,
        Lexicon::NrcHashtagSentimentUnigrams,
        Lexicon::NrcHashtagSentimentBigrams,
        Lexicon::Sentiment140Unigrams,
        Lexicon::Sentiment140Bigrams,
        Lexicon::SentiWordNet,
        Lexicon::BingLiu,
        Lexicon::NrcExpanded,
        Lexicon::NegatingWords,
    ];

    /// Key used for this lexicon in config files and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Lexicon::NrcHashtagEmotion => "nrc_hashtag_emotion",
            Lexicon::NrcAffectIntensity => "nrc_affect_intensity",
            Lexicon::NrcHashtagSentimentUnigrams => "nrc_hashtag_sentiment_unigrams",
            Lexicon::NrcHashtagSentimentBigrams => "nrc_hashtag_sentiment_bigrams",
            Lexicon::Sentiment140Unigrams => "sentiment140_unigrams",
            Lexicon::Sentiment140Bigrams => "sentiment140_bigrams",
            Lexicon::SentiWordNet => "senti_wordnet",
            Lexicon::BingLiu => "bing_liu",
            Lexicon::NrcExpanded => "nrc_expanded",
            Lexicon::NegatingWords => "negating_words",
        }
    }

    pub fn from_name(name: &str) -> Option<Lexicon> {
        Lexicon::ALL.into_iter().find(|lexicon| lexicon.name() == name)
    }

    /// File name of the published lexicon, relative to the data directory.
    pub fn default_file(self) -> &'static str {
        match self {
            Lexicon::NrcHashtagEmotion => "NRC-Hashtag-Emotion-Lexicon-v0.2.txt",
            Lexicon::NrcAffectIntensity => "nrc_affect_intensity.txt",
            Lexicon::NrcHashtagSentimentUnigrams => {
                "NRC-Hashtag-Sentiment-Lexicon-v0.1/unigrams-pmilexicon.txt"
            }
            Lexicon::NrcHashtagSentimentBigrams => {
                "NRC-Hashtag-Sentiment-Lexicon-v0.1/bigrams-pmilexicon.txt"
            }
            Lexicon::Sentiment140Unigrams => "Sentiment140-Lexicon-v0.1/unigrams-pmilexicon.txt",
            Lexicon::Sentiment140Bigrams => "Sentiment140-Lexicon-v0.1/bigrams-pmilexicon.txt",
            Lexicon::SentiWordNet => "SentiWordNet_3.0.0.txt",
            Lexicon::BingLiu => "BingLiu.txt",
            Lexicon::NrcExpanded => "w2v-dp-BCC-Lex.txt",
            Lexicon::NegatingWords => "NegatingWordList.txt",
        }
    }
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Word to 10-dimension emotion vector.
#[derive(Debug, Clone, Default)]
pub struct VectorTable {
    entries: VectorMap,
}

impl VectorTable {
    /// Builds the table, rejecting any row that does not have exactly ten dimensions.
    pub fn from_rows<I, K>(lexicon: Lexicon, rows: I) -> Result<VectorTable>
    where
        I: IntoIterator<Item = (K, Vec<f32>)>,
        K: Into<String>,
    {
        let mut entries = VectorMap::new();
        for (key, values) in rows {
            let key = key.into();
            let vector: EmotionVector = match values.as_slice().try_into() {
                Ok(vector) => vector,
                Err(_) => {
                    return Err(ConfigurationError::DimensionMismatch {
                        lexicon: lexicon.to_string(),
                        key,
                        found: values.len(),
                        expected: NUM_EMOTIONS,
                    })
                }
            };
            if vector.iter().any(|v| !v.is_finite()) {
                return Err(ConfigurationError::NonFiniteScore {
                    lexicon: lexicon.to_string(),
                    key,
                });
            }
            if entries.contains_key(&key) {
                warn!(%lexicon, %key, "duplicate entry replaced");
            }
            entries.insert(key, vector);
        }
        Ok(VectorTable { entries })
    }

    pub fn get(&self, key: &str) -> Option<&EmotionVector> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Word or bigram to polarity score. The sign carries the polarity.
#[derive(Debug, Clone, Default)]
pub struct ScalarTable {
    entries: ScalarMap,
}

impl ScalarTable {
    pub fn from_rows<I, K>(lexicon: Lexicon, rows: I) -> Result<ScalarTable>
    where
        I: IntoIterator<Item = (K, f32)>,
        K: Into<String>,
    {
        let mut entries = ScalarMap::new();
        for (key, score) in rows {
            let key = key.into();
            if !score.is_finite() {
                return Err(ConfigurationError::NonFiniteScore {
                    lexicon: lexicon.to_string(),
                    key,
                });
            }
            if entries.contains_key(&key) {
                warn!(%lexicon, %key, "duplicate entry replaced");
            }
            entries.insert(key, score);
        }
        Ok(ScalarTable { entries })
    }

    pub fn get(&self, key: &str) -> Option<f32> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Word to categorical label.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    entries: LabelMap,
}

impl LabelTable {
    pub fn from_rows<I, K, V>(rows: I) -> LabelTable
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = rows
            .into_iter()
            .map(|(key, label)| (key.into(), label.into()))
            .collect();
        LabelTable { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: WordList,
}

impl WordSet {
    pub fn from_words<I, K>(words: I) -> WordSet
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        WordSet {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Raw material for a [`LexiconStore`]. Tables left at their default are simply empty,
/// which is how tests inject only the lexicons they care about.
#[derive(Debug, Clone, Default)]
pub struct LexiconTables {
    pub nrc_hashtag_emotion: VectorTable,
    pub nrc_affect_intensity: VectorTable,
    pub nrc_hashtag_sentiment_unigrams: ScalarTable,
    pub nrc_hashtag_sentiment_bigrams: ScalarTable,
    pub sentiment140_unigrams: ScalarTable,
    pub sentiment140_bigrams: ScalarTable,
    pub senti_wordnet: ScalarTable,
    pub bing_liu: LabelTable,
    pub nrc_expanded: VectorTable,
    pub negating_words: WordSet,
}

/// Immutable set of validated lexicons. Build once, then share by reference.
#[derive(Debug, Clone, Default)]
pub struct LexiconStore {
    tables: LexiconTables,
}

impl LexiconStore {
    pub fn new(tables: LexiconTables) -> LexiconStore {
        LexiconStore { tables }
    }

    pub fn nrc_hashtag_emotion(&self) -> &VectorTable {
        &self.tables.nrc_hashtag_emotion
    }

    pub fn nrc_affect_intensity(&self) -> &VectorTable {
        &self.tables.nrc_affect_intensity
    }

    pub fn nrc_hashtag_sentiment_unigrams(&self) -> &ScalarTable {
        &self.tables.nrc_hashtag_sentiment_unigrams
    }

    pub fn nrc_hashtag_sentiment_bigrams(&self) -> &ScalarTable {
        &self.tables.nrc_hashtag_sentiment_bigrams
    }

    pub fn sentiment140_unigrams(&self) -> &ScalarTable {
        &self.tables.sentiment140_unigrams
    }

    pub fn sentiment140_bigrams(&self) -> &ScalarTable {
        &self.tables.sentiment140_bigrams
    }

    pub fn senti_wordnet(&self) -> &ScalarTable {
        &self.tables.senti_wordnet
    }

    pub fn bing_liu(&self) -> &LabelTable {
        &self.tables.bing_liu
    }

    pub fn nrc_expanded(&self) -> &VectorTable {
        &self.tables.nrc_expanded
    }

    pub fn negating_words(&self) -> &WordSet {
        &self.tables.negating_words
    }

    /// Number of entries held for `lexicon`.
    pub fn entry_count(&self, lexicon: Lexicon) -> usize {
        match lexicon {
            Lexicon::NrcHashtagEmotion => self.tables.nrc_hashtag_emotion.len(),
            Lexicon::NrcAffectIntensity => self.tables.nrc_affect_intensity.len(),
            Lexicon::NrcHashtagSentimentUnigrams => self.tables.nrc_hashtag_sentiment_unigrams.len(),
            Lexicon::NrcHashtagSentimentBigrams => self.tables.nrc_hashtag_sentiment_bigrams.len(),
            Lexicon::Sentiment140Unigrams => self.tables.sentiment140_unigrams.len(),
            Lexicon::Sentiment140Bigrams => self.tables.sentiment140_bigrams.len(),
            Lexicon::SentiWordNet => self.tables.senti_wordnet.len(),
            Lexicon::BingLiu => self.tables.bing_liu.len(),
            Lexicon::NrcExpanded => self.tables.nrc_expanded.len(),
            Lexicon::NegatingWords => self.tables.negating_words.len(),
        }
    }
}
