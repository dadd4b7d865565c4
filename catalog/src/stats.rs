//! Aggregates shown in tab labels and summary cards.
use crate::series::Status;
use crate::wallpaper::Filter;
use crate::{Language, Series, Store, Wallpaper};

use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of series per language. Every language is present.
pub fn count_by_language(store: &Store) -> BTreeMap<Language, usize> {
    Language::ALL
        .into_iter()
        .map(|language| {
            let count = store
                .series()
                .iter()
                .filter(|series| series.language == language)
                .count();

            (language, count)
        })
        .collect()
}

/// Number of wallpapers per filter, including [`Filter::All`].
pub fn count_by_category(store: &Store) -> BTreeMap<Filter, usize> {
    Filter::ALL
        .into_iter()
        .map(|filter| {
            let count = store
                .wallpapers()
                .iter()
                .filter(|wallpaper| filter.matches(wallpaper))
                .count();

            (filter, count)
        })
        .collect()
}

pub fn count_by_status(series: &[Series], status: Status) -> usize {
    series.iter().filter(|series| series.status == status).count()
}

pub fn featured_count(wallpapers: &[Wallpaper]) -> usize {
    wallpapers
        .iter()
        .filter(|wallpaper| wallpaper.featured)
        .count()
}

pub fn total_downloads(wallpapers: &[Wallpaper]) -> u64 {
    wallpapers
        .iter()
        .map(|wallpaper| wallpaper.downloads)
        .fold(0, u64::saturating_add)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default, skip_serializing_if = "usize::is_zero")]
    pub featured: usize,
    #[serde(default, skip_serializing_if = "u64::is_zero")]
    pub downloads: u64,
}

impl Summary {
    pub fn of(wallpapers: &[Wallpaper]) -> Self {
        Self {
            featured: featured_count(wallpapers),
            downloads: total_downloads(wallpapers),
        }
    }
}
