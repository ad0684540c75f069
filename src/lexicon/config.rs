use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use json::{parse, JsonValue};

use crate::error::{ConfigurationError, Result};
use crate::lexicon::Lexicon;

/*
Config file structure:
every key is optional, missing keys fall back to the published file names
relative paths are resolved against data_dir
{
    data_dir: "./data/lexicons",
    paths: {
        nrc_hashtag_emotion: "NRC-Hashtag-Emotion-Lexicon-v0.2.txt",
        senti_wordnet: "/opt/lexicons/SentiWordNet_3.0.0.txt",
        ...
    }
}
*/

pub const DEFAULT_DATA_DIR: &str = "./data/lexicons";

fn get_json_string(obj: &JsonValue, section: &str, key: &str) -> Result<Option<String>> {
    if !obj.has_key(key) {
        return Ok(None);
    }
    match obj[key].as_str() {
        Some(s) => Ok(Some(s.to_owned())),
        None => Err(ConfigurationError::InvalidConfig(format!(
            "{}.{} must be a string",
            section, key
        ))),
    }
}

#[derive(Debug, Clone)]
pub struct LexiconConfig {
    pub data_dir: PathBuf,
    paths: HashMap<Lexicon, PathBuf>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        LexiconConfig::with_data_dir(DEFAULT_DATA_DIR)
    }
}

impl LexiconConfig {
    /// Published file names under `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> LexiconConfig {
        let paths = Lexicon::ALL
            .into_iter()
            .map(|lexicon| (lexicon, PathBuf::from(lexicon.default_file())))
            .collect();
        LexiconConfig {
            data_dir: data_dir.into(),
            paths,
        }
    }

    pub fn set_path(&mut self, lexicon: Lexicon, path: impl Into<PathBuf>) {
        self.paths.insert(lexicon, path.into());
    }

    /// Location of `lexicon` on disk; relative paths are joined onto `data_dir`.
    pub fn path(&self, lexicon: Lexicon) -> PathBuf {
        let file = self
            .paths
            .get(&lexicon)
            .map(PathBuf::as_path)
            .unwrap_or_else(|| Path::new(lexicon.default_file()));
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir.join(file)
        }
    }

    pub fn from_json(obj: &JsonValue) -> Result<LexiconConfig> {
        if !obj.is_object() {
            return Err(ConfigurationError::InvalidConfig(
                "top level must be an object".to_owned(),
            ));
        }
        let mut config = match get_json_string(obj, "config", "data_dir")? {
            Some(dir) => LexiconConfig::with_data_dir(dir),
            None => LexiconConfig::default(),
        };

        let paths_s = "paths";
        if obj.has_key(paths_s) {
            let paths = &obj[paths_s];
            if !paths.is_object() {
                return Err(ConfigurationError::InvalidConfig(
                    "paths must be an object".to_owned(),
                ));
            }
            for (key, _) in paths.entries() {
                let lexicon = Lexicon::from_name(key).ok_or_else(|| {
                    ConfigurationError::InvalidConfig(format!("unknown lexicon `{}`", key))
                })?;
                if let Some(path) = get_json_string(paths, paths_s, key)? {
                    config.set_path(lexicon, path);
                }
            }
        }

        Ok(config)
    }

    pub fn read_config(file_name: impl AsRef<Path>) -> Result<LexiconConfig> {
        let file_name = file_name.as_ref();
        let file_contents = fs::read_to_string(file_name).map_err(|source| ConfigurationError::Io {
            path: file_name.to_path_buf(),
            source,
        })?;
        if file_contents.trim().is_empty() {
            return Err(ConfigurationError::InvalidConfig(format!(
                "{} is empty",
                file_name.display()
            )));
        }
        let json_data = parse(&file_contents).map_err(|e| {
            ConfigurationError::InvalidConfig(format!("{}: {}", file_name.display(), e))
        })?;
        LexiconConfig::from_json(&json_data)
    }
}
