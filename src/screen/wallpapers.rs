use crate::screen::tab;

use catalog::stats;
use catalog::wallpaper::Filter;
use catalog::{Store, Wallpaper};

use std::fmt::Write;

pub struct Wallpapers {
    filter: Filter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    FilterSelected(Filter),
}

impl Wallpapers {
    pub fn new() -> Self {
        Self {
            filter: Filter::All,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::FilterSelected(filter) => {
                self.filter = filter;
            }
        }
    }

    pub fn view(&self, store: &Store) -> String {
        let counts = stats::count_by_category(store);
        let gallery = store.wallpaper_gallery(self.filter);

        let filters = Filter::ALL
            .into_iter()
            .map(|filter| {
                let count = counts.get(&filter).copied().unwrap_or_default();

                tab(&format!("{filter} ({count})"), filter == self.filter)
            })
            .collect::<Vec<_>>()
            .join(" ");

        let mut view = format!(
            "Wallpapers\nTotal: {total} | Featured: {featured} | Downloads: {downloads}\n{filters}\n",
            total = store.wallpapers().len(),
            featured = gallery.summary.featured,
            downloads = gallery.summary.downloads,
        );

        if gallery.wallpapers.is_empty() {
            let _ = writeln!(view, "\nNo wallpapers in {}.", self.filter);
        }

        for wallpaper in &gallery.wallpapers {
            let _ = write!(view, "\n{}", card(wallpaper));
        }

        view
    }
}

fn card(wallpaper: &Wallpaper) -> String {
    format!(
        "#{id} {title} [{category}]{featured}\n    {downloads} downloads | {url}\n",
        id = wallpaper.id,
        title = wallpaper.title,
        category = wallpaper.category,
        featured = if wallpaper.featured { " *featured*" } else { "" },
        downloads = wallpaper.downloads,
        url = wallpaper.url,
    )
}
