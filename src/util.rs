use crate::config::Config;
use crate::consts;
use crate::highscores::HighScores;
use crate::options::Options;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};
use thiserror::Error;

/// State shared by every screen and handed along on screen transitions
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Globals {
    pub(crate) config: Config,
    pub(crate) options: Options,
    pub(crate) scores: HighScores,
}

/// Return the centered [`consts::DISPLAY_SIZE`] portion of `buffer_area`, in
/// which everything is drawn
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a `Rect` of the given size centered within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Navigation helpers for `Enum` types used as menu rows
pub(crate) trait EnumExt: Enum {
    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize() + 1;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }

    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }
}

impl<T: Enum> EnumExt for T {}

/// Error returned when a data file could not be read
#[derive(Debug, Error)]
#[error("Failed to load {what}")]
pub(crate) struct LoadError {
    what: &'static str,
    #[source]
    source: LoadErrorSource,
}

impl LoadError {
    pub(crate) fn no_path(what: &'static str) -> LoadError {
        LoadError {
            what,
            source: LoadErrorSource::NoPath,
        }
    }

    pub(crate) fn read(what: &'static str, e: std::io::Error) -> LoadError {
        LoadError {
            what,
            source: LoadErrorSource::Read(e),
        }
    }

    pub(crate) fn parse_toml(what: &'static str, e: toml::de::Error) -> LoadError {
        LoadError {
            what,
            source: LoadErrorSource::ParseToml(e),
        }
    }

    pub(crate) fn parse_json(what: &'static str, e: serde_json::Error) -> LoadError {
        LoadError {
            what,
            source: LoadErrorSource::ParseJson(e),
        }
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to determine a file path to load from")]
    NoPath,
    #[error("failed to read the file")]
    Read(#[source] std::io::Error),
    #[error("failed to parse the file")]
    ParseToml(#[source] toml::de::Error),
    #[error("failed to parse the file")]
    ParseJson(#[source] serde_json::Error),
}

/// Error returned when a data file could not be written
#[derive(Debug, Error)]
#[error("Failed to save {what}")]
pub(crate) struct SaveError {
    what: &'static str,
    #[source]
    source: SaveErrorSource,
}

impl SaveError {
    pub(crate) fn no_path(what: &'static str) -> SaveError {
        SaveError {
            what,
            source: SaveErrorSource::NoPath,
        }
    }

    pub(crate) fn mkdir(what: &'static str, e: std::io::Error) -> SaveError {
        SaveError {
            what,
            source: SaveErrorSource::Mkdir(e),
        }
    }

    pub(crate) fn serialize_toml(what: &'static str, e: toml::ser::Error) -> SaveError {
        SaveError {
            what,
            source: SaveErrorSource::SerializeToml(e),
        }
    }

    pub(crate) fn serialize_json(what: &'static str, e: serde_json::Error) -> SaveError {
        SaveError {
            what,
            source: SaveErrorSource::SerializeJson(e),
        }
    }

    pub(crate) fn write(what: &'static str, e: std::io::Error) -> SaveError {
        SaveError {
            what,
            source: SaveErrorSource::Write(e),
        }
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to determine a file path to save to")]
    NoPath,
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize the data")]
    SerializeToml(#[source] toml::ser::Error),
    #[error("failed to serialize the data")]
    SerializeJson(#[source] serde_json::Error),
    #[error("failed to write the file")]
    Write(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(78, 22), Rect::new(1, 1, 78, 22))]
    #[case(Rect::new(0, 0, 80, 24), Size::new(19, 6), Rect::new(31, 9, 19, 6))]
    #[case(Rect::new(0, 0, 80, 21), Size::new(55, 14), Rect::new(13, 4, 55, 14))]
    #[case(Rect::new(10, 5, 20, 10), Size::new(20, 10), Rect::new(10, 5, 20, 10))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }

    mod enum_ext {
        use super::*;

        #[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
        enum Tri {
            A,
            B,
            C,
        }

        #[test]
        fn extremes() {
            assert_eq!(Tri::min(), Tri::A);
            assert_eq!(Tri::max(), Tri::C);
        }

        #[test]
        fn stepping() {
            assert_eq!(Tri::A.next(), Some(Tri::B));
            assert_eq!(Tri::C.next(), None);
            assert_eq!(Tri::A.prev(), None);
            assert_eq!(Tri::B.prev(), Some(Tri::A));
        }

        #[test]
        fn iteration() {
            assert_eq!(Tri::iter().collect::<Vec<_>>(), [Tri::A, Tri::B, Tri::C]);
        }
    }
}
