use crate::Language;
use crate::error::ValidationError;
use crate::progress::Progress;

use serde::{Deserialize, Serialize};
use std::fmt;

/// An audio collection made of chapters, such as an audiobook or a poetry reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub language: Language,
    pub status: Status,
    pub total_chapters: u32,
    pub published_chapters: u32,
    /// Free-form display text, e.g. `4h 30m`.
    pub total_duration: String,
}

impl Series {
    pub fn progress(&self) -> Progress {
        Progress::new(self.published_chapters, self.total_chapters)
    }

    pub fn is_published(&self) -> bool {
        self.status == Status::Published
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(pub(crate) u32);

impl Id {
    pub fn get(self) -> u32 {
        self.0
    }

    pub(crate) fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u32> for Id {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Published,
    Draft,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
        })
    }
}

/// The fields of the "Add Series" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct New {
    pub title: String,
    pub description: String,
    pub language: Language,
    pub status: Status,
    pub total_chapters: u32,
    pub published_chapters: u32,
    pub total_duration: String,
}

impl New {
    pub fn validate(self, id: Id) -> Result<Series, ValidationError> {
        let title = self.title.trim();
        let total_duration = self.total_duration.trim();

        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        if total_duration.is_empty() {
            return Err(ValidationError::EmptyDuration);
        }

        if self.published_chapters > self.total_chapters {
            return Err(ValidationError::TooManyPublished {
                published: self.published_chapters,
                total: self.total_chapters,
            });
        }

        Ok(Series {
            id,
            title: title.to_owned(),
            description: self.description.trim().to_owned(),
            language: self.language,
            status: self.status,
            total_chapters: self.total_chapters,
            published_chapters: self.published_chapters,
            total_duration: total_duration.to_owned(),
        })
    }
}
