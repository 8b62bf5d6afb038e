use crate::util::{LoadError, SaveError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Name that every session's score is recorded under
const PLAYER: &str = "player";

/// Best scores, keyed by player name
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct HighScores(HashMap<String, u32>);

impl HighScores {
    /// Return the default filepath at which high scores are stored
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("viper").join("scores.json"))
    }

    /// Read high scores from a file on disk.  A missing file is an empty
    /// table, not an error.
    pub(crate) fn load(path: &Path) -> Result<HighScores, LoadError> {
        let src = match fs_err::read(path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HighScores::default()),
            Err(e) => return Err(LoadError::read("high scores", e)),
        };
        serde_json::from_slice(&src).map_err(|e| LoadError::parse_json("high scores", e))
    }

    /// Write the high scores to a file on disk, creating parent directories
    /// as needed
    pub(crate) fn save(&self, path: &Path) -> Result<(), SaveError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(|e| SaveError::mkdir("high scores", e))?;
        }
        let mut src = serde_json::to_string(self)
            .map_err(|e| SaveError::serialize_json("high scores", e))?;
        src.push('\n');
        fs_err::write(path, &src).map_err(|e| SaveError::write("high scores", e))
    }

    /// Return the best score recorded for the player
    pub(crate) fn get(&self) -> u32 {
        self.0.get(PLAYER).copied().unwrap_or(0)
    }

    /// Record `score` if it beats the stored best.  Returns whether anything
    /// changed.
    pub(crate) fn record(&mut self, score: u32) -> bool {
        if score > self.get() {
            self.0.insert(PLAYER.to_owned(), score);
            true
        } else {
            false
        }
    }
}
