use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use regex::Regex;
use tracing::{debug, info};

use crate::error::{ConfigurationError, Result};
use crate::lexicon::config::LexiconConfig;
use crate::lexicon::*;
use crate::types::ScalarMap;

// All lexicon files are tab separated with no quoting. Tokens such as `"cool` or
// `#happy` are literal keys, so neither quotes nor `#` may be treated specially.
fn open_tsv(path: &Path, has_headers: bool) -> Result<Reader<File>> {
    let file = File::open(path).map_err(|source| ConfigurationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(has_headers)
        .flexible(true)
        .quoting(false)
        .from_reader(file))
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn parse_score(lexicon: Lexicon, record: &StringRecord, field: &str) -> Result<f32> {
    field
        .trim()
        .parse::<f32>()
        .map_err(|_| ConfigurationError::Malformed {
            lexicon: lexicon.to_string(),
            line: line_of(record),
            reason: format!("invalid score `{}`", field),
        })
}

fn key_of<'r>(lexicon: Lexicon, record: &'r StringRecord) -> Result<&'r str> {
    match record.get(0) {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(ConfigurationError::Malformed {
            lexicon: lexicon.to_string(),
            line: line_of(record),
            reason: "missing key".to_owned(),
        }),
    }
}

/// `word<TAB>v1 ... v10` with a header row.
pub fn read_vector_table(lexicon: Lexicon, path: &Path) -> Result<VectorTable> {
    let mut rdr = open_tsv(path, true)?;
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let key = key_of(lexicon, &record)?;
        let values = record
            .iter()
            .skip(1)
            .map(|field| parse_score(lexicon, &record, field))
            .collect::<Result<Vec<f32>>>()?;
        rows.push((key.to_owned(), values));
    }
    VectorTable::from_rows(lexicon, rows)
}

/// `key<TAB>score[<TAB>...]`; only the first score column is used.
pub fn read_scalar_table(lexicon: Lexicon, path: &Path) -> Result<ScalarTable> {
    let mut rdr = open_tsv(path, false)?;
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let key = key_of(lexicon, &record)?;
        let field = record.get(1).ok_or_else(|| ConfigurationError::Malformed {
            lexicon: lexicon.to_string(),
            line: line_of(&record),
            reason: "missing score column".to_owned(),
        })?;
        rows.push((key.to_owned(), parse_score(lexicon, &record, field)?));
    }
    ScalarTable::from_rows(lexicon, rows)
}

/// SentiWordNet 3.0: `POS<TAB>ID<TAB>PosScore<TAB>NegScore<TAB>word#rank word#rank ...`.
///
/// A word's score is the sum over every synset it appears in of
/// `(PosScore - NegScore) / rank`, so more common senses weigh more.
pub fn read_senti_wordnet(path: &Path) -> Result<ScalarTable> {
    let lexicon = Lexicon::SentiWordNet;
    let term_regex = Regex::new(r"^(?P<word>.+)#(?P<rank>\d+)$").map_err(|e| {
        ConfigurationError::InvalidConfig(format!("senti_wordnet term pattern: {}", e))
    })?;

    let mut rdr = open_tsv(path, false)?;
    let mut scores = ScalarMap::new();
    for result in rdr.records() {
        let record = result?;
        // header and footer comments, possibly indented
        if record.get(0).is_some_and(|first| first.trim_start().starts_with('#')) {
            continue;
        }
        if record.iter().all(|field| field.trim().is_empty()) {
            debug!(line = line_of(&record), "skipping blank senti_wordnet row");
            continue;
        }
        let (pos, neg, terms) = match (record.get(2), record.get(3), record.get(4)) {
            (Some(pos), Some(neg), Some(terms)) => (pos, neg, terms),
            _ => {
                return Err(ConfigurationError::Malformed {
                    lexicon: lexicon.to_string(),
                    line: line_of(&record),
                    reason: format!("expected at least 5 columns, found {}", record.len()),
                })
            }
        };
        let score = parse_score(lexicon, &record, pos)? - parse_score(lexicon, &record, neg)?;

        for term in terms.split(' ').filter(|t| !t.is_empty()) {
            let captures = term_regex.captures(term).ok_or_else(|| ConfigurationError::Malformed {
                lexicon: lexicon.to_string(),
                line: line_of(&record),
                reason: format!("term `{}` is not of the form word#rank", term),
            })?;
            let rank = captures["rank"].parse::<u32>().ok().filter(|r| *r > 0).ok_or_else(|| {
                ConfigurationError::Malformed {
                    lexicon: lexicon.to_string(),
                    line: line_of(&record),
                    reason: format!("term `{}` has an invalid rank", term),
                }
            })?;
            *scores.entry(captures["word"].to_owned()).or_insert(0.0) += score / rank as f32;
        }
    }
    ScalarTable::from_rows(lexicon, scores)
}

/// `word<TAB>label`.
pub fn read_label_table(lexicon: Lexicon, path: &Path) -> Result<LabelTable> {
    let mut rdr = open_tsv(path, false)?;
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let key = key_of(lexicon, &record)?;
        let label = record.get(1).ok_or_else(|| ConfigurationError::Malformed {
            lexicon: lexicon.to_string(),
            line: line_of(&record),
            reason: "missing label column".to_owned(),
        })?;
        rows.push((key.to_owned(), label.trim().to_owned()));
    }
    Ok(LabelTable::from_rows(rows))
}

/// One word per line. Blank lines are ignored.
pub fn read_word_set(path: &Path) -> Result<WordSet> {
    let io_err = |source| ConfigurationError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for ln in reader.lines() {
        let line = ln.map_err(io_err)?;
        if line.trim().is_empty() {
            continue;
        }
        words.push(line);
    }
    Ok(WordSet::from_words(words))
}

impl LexiconStore {
    /// Reads and validates every lexicon named by `config`. Any malformed file aborts the load.
    pub fn load(config: &LexiconConfig) -> Result<LexiconStore> {
        info!(data_dir = %config.data_dir.display(), "loading affect/sentiment lexicons");
        let vector = |lexicon| read_vector_table(lexicon, &config.path(lexicon));
        let scalar = |lexicon| read_scalar_table(lexicon, &config.path(lexicon));

        let tables = LexiconTables {
            nrc_hashtag_emotion: vector(Lexicon::NrcHashtagEmotion)?,
            nrc_affect_intensity: vector(Lexicon::NrcAffectIntensity)?,
            nrc_hashtag_sentiment_unigrams: scalar(Lexicon::NrcHashtagSentimentUnigrams)?,
            nrc_hashtag_sentiment_bigrams: scalar(Lexicon::NrcHashtagSentimentBigrams)?,
            sentiment140_unigrams: scalar(Lexicon::Sentiment140Unigrams)?,
            sentiment140_bigrams: scalar(Lexicon::Sentiment140Bigrams)?,
            senti_wordnet: read_senti_wordnet(&config.path(Lexicon::SentiWordNet))?,
            bing_liu: read_label_table(Lexicon::BingLiu, &config.path(Lexicon::BingLiu))?,
            nrc_expanded: vector(Lexicon::NrcExpanded)?,
            negating_words: read_word_set(&config.path(Lexicon::NegatingWords))?,
        };
        let store = LexiconStore::new(tables);

        for lexicon in Lexicon::ALL {
            info!(%lexicon, entries = store.entry_count(lexicon), "lexicon loaded");
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn vector_table_skips_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "emotion.txt",
            "word\tanger\tanticipation\tdisgust\tfear\tjoy\tnegative\tpositive\tsadness\tsurprise\ttrust\n\
             #happy\t0\t0.5\t0\t0\t1\t0\t1\t0\t0.25\t0.5\n",
        );
        let table = read_vector_table(Lexicon::NrcHashtagEmotion, &path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("#happy").unwrap()[4], 1.0);
        assert!(table.get("word").is_none());
    }

    #[test]
    fn vector_table_rejects_nine_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "emotion.txt",
            "header\n#sad\t1\t0\t0\t0\t0\t1\t0\t1\t0\n",
        );
        let err = read_vector_table(Lexicon::NrcExpanded, &path).unwrap_err();
        assert!(matches!(err, ConfigurationError::DimensionMismatch { found: 9, .. }));
    }

    #[test]
    fn scalar_table_uses_second_column_and_keeps_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "unigrams.txt",
            "good\t1.25\t120\t4\n\"bad\t-0.75\t3\t88\nnot good\t-1.5\t1\t9\n",
        );
        let table = read_scalar_table(Lexicon::Sentiment140Unigrams, &path).unwrap();
        assert_eq!(table.get("good"), Some(1.25));
        assert_eq!(table.get("\"bad"), Some(-0.75));
        assert_eq!(table.get("not good"), Some(-1.5));
    }

    #[test]
    fn scalar_table_reports_bad_score_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "unigrams.txt", "good\t1.0\nbad\tlots\n");
        match read_scalar_table(Lexicon::Sentiment140Unigrams, &path).unwrap_err() {
            ConfigurationError::Malformed { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("lots"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn senti_wordnet_weights_by_rank_and_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "swn.txt",
            "# SentiWordNet header\n\
             a\t00001\t0.5\t0\tgood#1 fine#2\tgloss\n\
             a\t00002\t0\t0.25\tgood#2\tgloss\n\
             n\t00003\t0\t0.5\tbad#1\tgloss\n",
        );
        let table = read_senti_wordnet(&path).unwrap();
        assert_eq!(table.get("good"), Some(0.5 - 0.125));
        assert_eq!(table.get("fine"), Some(0.25));
        assert_eq!(table.get("bad"), Some(-0.5));
    }

    #[test]
    fn senti_wordnet_skips_indented_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "swn.txt",
            "  # indented comment\n\
             a\t1\t0.5\t0\tgood#1\tgloss\n\
             \t\t\t\t\n\
             \u{20}   # trailing note\n",
        );
        let table = read_senti_wordnet(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("good"), Some(0.5));
    }

    #[test]
    fn senti_wordnet_rejects_rank_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "swn.txt", "a\t1\t0.5\t0\tgood#0\tgloss\n");
        assert!(read_senti_wordnet(&path).is_err());
    }

    #[test]
    fn word_set_ignores_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "neg.txt", "not\n\n   \nnever\ncan't\n\t\n");
        let words = read_word_set(&path).unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.contains("can't"));
        assert!(!words.contains(""));
        assert!(!words.contains("   "));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_word_set(Path::new("/nonexistent/neg.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/neg.txt"));
    }
}
