use crate::series;
use crate::wallpaper;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("duplicate series id: {0}")]
    DuplicateSeries(series::Id),
    #[error("duplicate wallpaper id: {0}")]
    DuplicateWallpaper(wallpaper::Id),
}

/// Rejected input from one of the "Add" dialogs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title is empty")]
    EmptyTitle,
    #[error("image url is empty")]
    EmptyUrl,
    #[error("total duration is empty")]
    EmptyDuration,
    #[error("{published} chapters published, but only {total} in total")]
    TooManyPublished { published: u32, total: u32 },
    #[error("no ids left to assign")]
    IdsExhausted,
}
