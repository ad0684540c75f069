//! Lexicon-based affect and sentiment features for short, pre-tokenized texts.
//!
//! A [`LexiconStore`] holds ten validated lexicons; a [`Featurizer`] borrows it and turns
//! a token sequence into a fixed-length vector of [`FEATURE_COUNT`] floats.
//!
//! ```no_run
//! use lexicon_features::{Featurizer, LexiconConfig, LexiconStore};
//!
//! let store = LexiconStore::load(&LexiconConfig::default())?;
//! let features = Featurizer::new(&store).featurize(&["not", "happy", "#fail"]);
//! assert_eq!(features.len(), lexicon_features::FEATURE_COUNT);
//! # Ok::<(), lexicon_features::ConfigurationError>(())
//! ```

pub mod bigram;
pub mod error;
pub mod featurizer;
pub mod lexicon;
pub mod scorer;
pub mod types;
pub mod util;

pub use bigram::bigrams;
pub use error::{ConfigurationError, Result};
pub use featurizer::{Featurizer, FEATURE_COUNT};
pub use lexicon::config::LexiconConfig;
pub use lexicon::{LabelTable, Lexicon, LexiconStore, LexiconTables, ScalarTable, VectorTable, WordSet};
pub use scorer::PartialFeatureMap;
