mod error;
mod map;
mod selection;

pub mod language;
pub mod progress;
pub mod series;
pub mod stats;
pub mod store;
pub mod wallpaper;

pub use error::{Error, ValidationError};
pub use language::Language;
pub use map::Map;
pub use progress::Progress;
pub use selection::Selection;
pub use series::Series;
pub use stats::Summary;
pub use store::{Gallery, Store, Tab};
pub use wallpaper::Wallpaper;
