use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    Hindi,
    English,
}

impl Language {
    /// Every language, in tab order.
    pub const ALL: [Self; 2] = [Self::Hindi, Self::English];

    /// Parses a tab key such as `hindi` or `English`.
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();

        Self::ALL
            .into_iter()
            .find(|language| language.key().eq_ignore_ascii_case(key))
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Hindi => "hindi",
            Self::English => "english",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hindi => "Hindi",
            Self::English => "English",
        })
    }
}
