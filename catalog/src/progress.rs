//! Chapter publishing progress.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Published chapters out of a total.
///
/// Displays as the ratio `published/total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub published: u32,
    pub total: u32,
}

impl Progress {
    pub fn new(published: u32, total: u32) -> Self {
        Self { published, total }
    }

    pub fn percent(self) -> u8 {
        percent(self.published, self.total)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.published, self.total)
    }
}

/// Returns `published / total` as a percentage in `0..=100`, rounding halves up.
///
/// An empty total yields `0`. Overshooting totals are clamped to `100`.
pub fn percent(published: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }

    let total = u64::from(total);
    let published = u64::from(published).min(total);

    // floor((100p / t) + 1/2) without leaving integers
    let percent = (published * 200 + total) / (total * 2);

    u8::try_from(percent).unwrap_or(100)
}
