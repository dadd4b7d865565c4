use crate::error::{Error, ValidationError};
use crate::selection::Selection;
use crate::series;
use crate::stats::Summary;
use crate::wallpaper::{self, Filter};
use crate::{Language, Map, Series, Wallpaper};

use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// The seed collections behind the dashboard.
///
/// Both collections are fixed once built; cloning is cheap.
#[derive(Clone)]
pub struct Store {
    series: Map<series::Id, Series>,
    wallpapers: Map<wallpaper::Id, Wallpaper>,
}

impl Store {
    pub fn new(
        series: impl Into<Arc<[Series]>>,
        wallpapers: impl Into<Arc<[Wallpaper]>>,
    ) -> Result<Self, Error> {
        let series = Map::new(series, |series| series.id).map_err(Error::DuplicateSeries)?;
        let wallpapers = Map::new(wallpapers, |wallpaper| wallpaper.id)
            .map_err(Error::DuplicateWallpaper)?;

        for series in series.values() {
            if series.published_chapters > series.total_chapters {
                log::warn!(
                    "Series {id} has {published} chapters published out of {total}",
                    id = series.id,
                    published = series.published_chapters,
                    total = series.total_chapters,
                );
            }
        }

        log::info!(
            "Loaded catalog with {} series and {} wallpapers",
            series.len(),
            wallpapers.len()
        );

        Ok(Self { series, wallpapers })
    }

    /// Loads the seed data bundled with the crate.
    pub async fn load() -> Result<Self, anywho::Error> {
        use tokio::task;

        task::spawn_blocking(|| {
            parse(
                include_str!("../data/series.ron"),
                include_str!("../data/wallpapers.ron"),
            )
        })
        .await?
    }

    /// Loads `series.ron` and `wallpapers.ron` from the given directory.
    pub async fn load_from(data: impl AsRef<Path>) -> Result<Self, anywho::Error> {
        use tokio::fs;
        use tokio::task;

        let data = data.as_ref();

        let series = fs::read_to_string(data.join("series.ron")).await?;
        let wallpapers = fs::read_to_string(data.join("wallpapers.ron")).await?;

        task::spawn_blocking(move || parse(&series, &wallpapers)).await?
    }

    pub fn series(&self) -> &[Series] {
        self.series.values()
    }

    pub fn wallpapers(&self) -> &[Wallpaper] {
        self.wallpapers.values()
    }

    pub fn series_by_id(&self, id: series::Id) -> Option<&Series> {
        self.series.get(&id)
    }

    pub fn wallpaper_by_id(&self, id: wallpaper::Id) -> Option<&Wallpaper> {
        self.wallpapers.get(&id)
    }

    pub fn select_series(&self, language: Language) -> Selection<Series> {
        let matches: Vec<_> = self
            .series
            .values()
            .iter()
            .filter(|series| series.language == language)
            .cloned()
            .collect();

        Selection::new(matches)
    }

    /// Like [`Store::select_series`], but an unknown key selects nothing.
    pub fn select_series_by_key(&self, key: &str) -> Selection<Series> {
        match Language::parse(key) {
            Some(language) => self.select_series(language),
            None => {
                log::debug!("Unknown language: {key}");

                Selection::default()
            }
        }
    }

    pub fn select_wallpapers(&self, filter: Filter) -> Selection<Wallpaper> {
        match filter {
            Filter::All => Selection::new(self.wallpapers.shared()),
            Filter::Only(_) => {
                let matches: Vec<_> = self
                    .wallpapers
                    .values()
                    .iter()
                    .filter(|wallpaper| filter.matches(wallpaper))
                    .cloned()
                    .collect();

                Selection::new(matches)
            }
        }
    }

    /// Like [`Store::select_wallpapers`], but an unknown key selects nothing.
    pub fn select_wallpapers_by_key(&self, key: &str) -> Selection<Wallpaper> {
        match Filter::parse(key) {
            Some(filter) => self.select_wallpapers(filter),
            None => {
                log::debug!("Unknown category: {key}");

                Selection::default()
            }
        }
    }

    pub fn series_tab(&self, language: Language) -> Tab {
        Tab {
            language,
            series: self.select_series(language),
        }
    }

    pub fn wallpaper_gallery(&self, filter: Filter) -> Gallery {
        Gallery {
            filter,
            wallpapers: self.select_wallpapers(filter),
            summary: Summary::of(self.wallpapers()),
        }
    }

    /// Validates a new series and assigns it the next free id.
    ///
    /// The store itself is left untouched.
    pub fn create_series(&self, new: series::New) -> Result<Series, ValidationError> {
        let id = match self.series.last_key() {
            Some(last) => last.next().ok_or(ValidationError::IdsExhausted)?,
            None => series::Id(1),
        };

        let series = new.validate(id)?;
        log::debug!("Created series {id} ({title})", title = series.title);

        Ok(series)
    }

    /// Validates a new wallpaper and assigns it the next free id.
    ///
    /// The store itself is left untouched.
    pub fn create_wallpaper(&self, new: wallpaper::New) -> Result<Wallpaper, ValidationError> {
        let id = match self.wallpapers.last_key() {
            Some(last) => last.next().ok_or(ValidationError::IdsExhausted)?,
            None => wallpaper::Id(1),
        };

        let wallpaper = new.validate(id)?;
        log::debug!("Created wallpaper {id} ({title})", title = wallpaper.title);

        Ok(wallpaper)
    }
}

fn parse(series: &str, wallpapers: &str) -> Result<Store, anywho::Error> {
    let series: Vec<Series> = ron::from_str(series)?;
    let wallpapers: Vec<Wallpaper> = ron::from_str(wallpapers)?;

    Ok(Store::new(series, wallpapers)?)
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("series", &self.series.len())
            .field("wallpapers", &self.wallpapers.len())
            .finish()
    }
}

/// The series shown under a language tab.
#[derive(Debug, Clone)]
pub struct Tab {
    pub language: Language,
    pub series: Selection<Series>,
}

impl Tab {
    pub fn count(&self) -> usize {
        self.series.len()
    }
}

/// The wallpapers shown for a filter, with summary figures over the whole gallery.
#[derive(Debug, Clone)]
pub struct Gallery {
    pub filter: Filter,
    pub wallpapers: Selection<Wallpaper>,
    pub summary: Summary,
}

impl Gallery {
    pub fn count(&self) -> usize {
        self.wallpapers.len()
    }
}
