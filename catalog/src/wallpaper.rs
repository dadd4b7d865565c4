use crate::error::ValidationError;

use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallpaper {
    pub id: Id,
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "u64::is_zero")]
    pub downloads: u64,
    /// Location of the image. Never fetched here.
    pub url: String,
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Nature,
    Urban,
    Abstract,
    Space,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Nature, Self::Urban, Self::Abstract, Self::Space];

    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();

        Self::ALL
            .into_iter()
            .find(|category| category.to_string().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nature => "Nature",
            Self::Urban => "Urban",
            Self::Abstract => "Abstract",
            Self::Space => "Space",
        })
    }
}

/// A gallery filter: everything, or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// `All` followed by every category, in display order.
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Only(Category::Nature),
        Self::Only(Category::Urban),
        Self::Only(Category::Abstract),
        Self::Only(Category::Space),
    ];

    pub fn parse(key: &str) -> Option<Self> {
        if key.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }

        Category::parse(key).map(Self::Only)
    }

    pub fn matches(self, wallpaper: &Wallpaper) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => wallpaper.category == category,
        }
    }
}

impl From<Category> for Filter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(category) => category.fmt(f),
        }
    }
}

/// The fields of the "Add Wallpaper" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct New {
    pub title: String,
    pub category: Category,
    pub featured: bool,
    pub url: String,
}

impl New {
    pub fn validate(self, id: Id) -> Result<Wallpaper, ValidationError> {
        let title = self.title.trim();
        let url = self.url.trim();

        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        if url.is_empty() {
            return Err(ValidationError::EmptyUrl);
        }

        Ok(Wallpaper {
            id,
            title: title.to_owned(),
            category: self.category,
            featured: self.featured,
            downloads: 0,
            url: url.to_owned(),
        })
    }
}
