//! Loading a full lexicon directory from disk.

use std::fs;
use std::path::Path;

use lexicon_features::{
    ConfigurationError, Featurizer, Lexicon, LexiconConfig, LexiconStore, FEATURE_COUNT,
};

const EMOTION_HEADER: &str =
    "word\tanger\tanticipation\tdisgust\tfear\tjoy\tnegative\tpositive\tsadness\tsurprise\ttrust\n";

fn write(config: &LexiconConfig, lexicon: Lexicon, contents: &str) {
    let path = config.path(lexicon);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn write_all(dir: &Path) -> LexiconConfig {
    let config = LexiconConfig::with_data_dir(dir);
    write(
        &config,
        Lexicon::NrcHashtagEmotion,
        &format!("{EMOTION_HEADER}#angry\t1\t0\t0.5\t0\t0\t1\t0\t0\t0\t0\n"),
    );
    write(
        &config,
        Lexicon::NrcAffectIntensity,
        &format!("{EMOTION_HEADER}happy\t0\t0\t0\t0\t0.75\t0\t0.5\t0\t0\t0\n"),
    );
    write(&config, Lexicon::NrcHashtagSentimentUnigrams, "happy\t1.5\t30\t2\n#angry\t-2\t1\t40\n");
    write(&config, Lexicon::NrcHashtagSentimentBigrams, "not happy\t-1.75\t1\t9\n");
    write(&config, Lexicon::Sentiment140Unigrams, "happy\t0.5\t30\t2\n");
    write(&config, Lexicon::Sentiment140Bigrams, "so happy\t2.25\t30\t2\n");
    write(
        &config,
        Lexicon::SentiWordNet,
        "# POS\tID\tPosScore\tNegScore\tSynsetTerms\tGloss\n\
         a\t01148283\t0.75\t0\thappy#1 glad#2\tenjoying well-being\n\
         a\t01049352\t0.5\t0\thappy#2\tmarked by good fortune\n",
    );
    write(&config, Lexicon::BingLiu, "happy\tpositive\nangry\tnegative\n");
    write(
        &config,
        Lexicon::NrcExpanded,
        &format!("{EMOTION_HEADER}happy\t0\t0.25\t0\t0\t0.5\t0\t0.5\t0\t0\t0.25\n"),
    );
    write(&config, Lexicon::NegatingWords, "not\nnever\n\n");
    config
}

#[test]
fn loads_every_lexicon_and_featurizes() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_all(dir.path());
    let store = LexiconStore::load(&config).unwrap();

    assert_eq!(store.entry_count(Lexicon::NrcHashtagEmotion), 1);
    assert_eq!(store.entry_count(Lexicon::SentiWordNet), 2);
    assert_eq!(store.entry_count(Lexicon::NegatingWords), 2);
    assert_eq!(store.senti_wordnet().get("happy"), Some(0.75 + 0.25));

    let named = Featurizer::new(&store).featurize_named(&["not", "happy", "#angry"]);
    assert_eq!(named.len(), FEATURE_COUNT);
    let get = |name: &str| named.iter().find(|(n, _)| n == name).map(|(_, v)| *v).unwrap();
    assert_eq!(get("nrc_hashtag_emotion_anger"), 1.0);
    assert_eq!(get("nrc_hashtag_sentiment_negative_unigram_score"), -2.0);
    assert_eq!(get("nrc_hashtag_sentiment_negative_bigram_score"), -1.75);
    assert_eq!(get("senti_wordnet_positive_score"), 1.0);
    assert_eq!(get("bing_liu_sentiment_lexicon_positive_count"), 1.0);
    assert_eq!(get("num_of_negating_words"), 1.0);
}

#[test]
fn nine_dimension_row_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_all(dir.path());
    write(
        &config,
        Lexicon::NrcAffectIntensity,
        &format!("{EMOTION_HEADER}happy\t0\t0\t0\t0\t0.75\t0\t0.5\t0\t0\n"),
    );
    match LexiconStore::load(&config) {
        Err(ConfigurationError::DimensionMismatch { lexicon, key, found, .. }) => {
            assert_eq!(lexicon, "nrc_affect_intensity");
            assert_eq!(key, "happy");
            assert_eq!(found, 9);
        }
        other => panic!("expected a dimension mismatch, got {other:?}"),
    }
}

#[test]
fn missing_lexicon_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_all(dir.path());
    fs::remove_file(config.path(Lexicon::BingLiu)).unwrap();
    assert!(matches!(
        LexiconStore::load(&config),
        Err(ConfigurationError::Io { .. })
    ));
}

#[test]
fn config_file_overrides_paths() {
    let dir = tempfile::tempdir().unwrap();
    write_all(dir.path());
    let moved = dir.path().join("negations.txt");
    fs::write(&moved, "no\n").unwrap();
    let config_path = dir.path().join("lexicons.json");
    fs::write(
        &config_path,
        format!(
            r#"{{ "data_dir": "{}", "paths": {{ "negating_words": "negations.txt" }} }}"#,
            dir.path().display()
        ),
    )
    .unwrap();

    let config = LexiconConfig::read_config(&config_path).unwrap();
    let store = LexiconStore::load(&config).unwrap();
    assert!(store.negating_words().contains("no"));
    assert!(!store.negating_words().contains("not"));
}
