use crate::util::{LoadError, SaveError};
use enum_dispatch::enum_dispatch;
use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Gameplay options chosen on the main menu
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Options {
    pub(crate) difficulty: Difficulty,
    pub(crate) obstacles: bool,
    pub(crate) walls: bool,
}

impl Options {
    /// Where the options file lives by default
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::config_local_dir().map(|p| p.join("viper").join("options.toml"))
    }

    /// Read options from a file on disk.  Returns `Ok(None)` if the file
    /// does not exist.
    pub(crate) fn load(path: &Path) -> Result<Option<Options>, LoadError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(LoadError::read("options", e)),
        };
        toml::from_str(&content)
            .map(Some)
            .map_err(|e| LoadError::parse_toml("options", e))
    }

    /// Write the options to a file on disk, creating parent directories as
    /// needed
    pub(crate) fn save(&self, path: &Path) -> Result<(), SaveError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(|e| SaveError::mkdir("options", e))?;
        }
        let src = toml::to_string(self).map_err(|e| SaveError::serialize_toml("options", e))?;
        fs_err::write(path, src).map_err(|e| SaveError::write("options", e))
    }

    pub(crate) fn get(&self, key: OptKey) -> OptValue {
        match key {
            OptKey::Difficulty => self.difficulty.into(),
            OptKey::Obstacles => self.obstacles.into(),
            OptKey::Walls => self.walls.into(),
        }
    }

    /// Store a menu value back into the matching field.  Handing a value of
    /// the wrong shape to a key is a bug in the caller.
    pub(crate) fn set(&mut self, key: OptKey, value: OptValue) {
        match (key, value) {
            (OptKey::Difficulty, OptValue::Difficulty(d)) => self.difficulty = d,
            (OptKey::Obstacles, OptValue::Bool(b)) => self.obstacles = b,
            (OptKey::Walls, OptValue::Bool(b)) => self.walls = b,
            (key, value) => {
                unreachable!("Options::set({key:?}, ..) called with mismatched value {value:?}")
            }
        }
    }
}

impl Default for Options {
    fn default() -> Options {
        Options {
            difficulty: Difficulty::default(),
            obstacles: false,
            walls: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum OptKey {
    Difficulty,
    Obstacles,
    Walls,
}

impl OptKey {
    pub(crate) const DISPLAY_WIDTH: u16 = 10;

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            OptKey::Difficulty => "Difficulty",
            OptKey::Obstacles => "Obstacles",
            OptKey::Walls => "Walls",
        }
    }
}

impl fmt::Display for OptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[enum_dispatch]
pub(crate) trait Adjustable {
    fn toggle(&mut self);
    fn increase(&mut self);
    fn decrease(&mut self);
    fn can_increase(&self) -> bool;
    fn can_decrease(&self) -> bool;
}

#[enum_dispatch(Adjustable)] // This also gives us From for the variant types
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum OptValue {
    Bool(bool),
    Difficulty,
}

impl OptValue {
    pub(crate) const DISPLAY_WIDTH: u16 = 10;
}

// This is needed for EnumMap to be convenient to construct.
impl Default for OptValue {
    fn default() -> OptValue {
        OptValue::Bool(false)
    }
}

impl fmt::Display for OptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            OptValue::Bool(on) => {
                write!(f, "   [{mark}]    ", mark = if on { '✓' } else { ' ' })
            }
            OptValue::Difficulty(diff) => write!(f, "◀ {diff:6} ▶"),
        }
    }
}

impl Adjustable for bool {
    fn toggle(&mut self) {
        *self = !*self;
    }

    fn increase(&mut self) {
        *self = true;
    }

    fn decrease(&mut self) {
        *self = false;
    }

    fn can_increase(&self) -> bool {
        !*self
    }

    fn can_decrease(&self) -> bool {
        *self
    }
}

/// How punishing a session is.  Difficulty only affects how many cells the
/// snake grows by per food eaten.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Cells the snake grows by per food eaten
    pub(crate) fn growth(self) -> usize {
        match self {
            Difficulty::Easy | Difficulty::Normal => 1,
            Difficulty::Hard => 2,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Adjustable for Difficulty {
    fn toggle(&mut self) {
        self.increase();
    }

    fn increase(&mut self) {
        *self = match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        };
    }

    fn decrease(&mut self) {
        *self = match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Normal => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Normal,
        };
    }

    // The difficulty row cycles, so both arrows always work.
    fn can_increase(&self) -> bool {
        true
    }

    fn can_decrease(&self) -> bool {
        true
    }
}
