use crate::highscores::HighScores;
use crate::options::Options;
use crate::util::{LoadError, SaveError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Default options when no options file is present
    pub(crate) options: Options,

    /// Settings about data files
    pub(crate) files: FileConfig,
}

impl Config {
    /// Where the configuration file lives by default
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("viper").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from `path`.  With `allow_missing`, a file that
    /// does not exist yields the default configuration; any other read or
    /// parse problem is an error.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        match fs_err::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if allow_missing && e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Config::default())
            }
            Err(e) => Err(ConfigError::Read(e)),
        }
    }

    /// The file gameplay options live in: the configured override, or the
    /// platform default.  `None` when neither can be determined.
    fn options_file(&self) -> Option<PathBuf> {
        self.files.options_file.clone().or_else(Options::default_path)
    }

    /// Likewise for the high-scores file
    fn scores_file(&self) -> Option<PathBuf> {
        self.files.scores_file.clone().or_else(HighScores::default_path)
    }

    /// Load gameplay options from their file, falling back to the
    /// configuration's own defaults when the file does not exist or options
    /// persistence is switched off
    pub(crate) fn load_options(&self) -> Result<Options, LoadError> {
        if !self.files.save_options {
            return Ok(self.options);
        }
        let Some(path) = self.options_file() else {
            return Err(LoadError::no_path("options"));
        };
        Ok(Options::load(&path)?.unwrap_or(self.options))
    }

    /// Write gameplay options to their file.  A no-op when options
    /// persistence is switched off.
    pub(crate) fn save_options(&self, options: Options) -> Result<(), SaveError> {
        if !self.files.save_options {
            return Ok(());
        }
        let Some(path) = self.options_file() else {
            return Err(SaveError::no_path("options"));
        };
        options.save(&path)
    }

    /// Load the high-score table.  Missing file or scores persistence
    /// switched off both yield an empty table.
    pub(crate) fn load_scores(&self) -> Result<HighScores, LoadError> {
        if !self.files.save_scores {
            return Ok(HighScores::default());
        }
        let Some(path) = self.scores_file() else {
            return Err(LoadError::no_path("high scores"));
        };
        HighScores::load(&path)
    }

    /// Write the high-score table.  A no-op when scores persistence is
    /// switched off.
    pub(crate) fn save_scores(&self, scores: &HighScores) -> Result<(), SaveError> {
        if !self.files.save_scores {
            return Ok(());
        }
        let Some(path) = self.scores_file() else {
            return Err(SaveError::no_path("high scores"));
        };
        scores.save(&path)
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which gameplay options should be stored
    pub(crate) options_file: Option<PathBuf>,

    /// Whether to load & save gameplay options in a file
    pub(crate) save_options: bool,

    /// Path at which high scores should be stored
    pub(crate) scores_file: Option<PathBuf>,

    /// Whether to load & save high scores in a file
    pub(crate) save_scores: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            options_file: None,
            save_options: true,
            scores_file: None,
            save_scores: true,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
