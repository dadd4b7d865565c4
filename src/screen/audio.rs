use crate::screen::tab;

use catalog::stats;
use catalog::{Language, Series, Store};

use std::fmt::Write;

pub struct Audio {
    language: Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    TabSelected(Language),
}

impl Audio {
    pub fn new() -> Self {
        Self {
            language: Language::Hindi,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::TabSelected(language) => {
                self.language = language;
            }
        }
    }

    pub fn view(&self, store: &Store) -> String {
        let counts = stats::count_by_language(store);

        let tabs = Language::ALL
            .into_iter()
            .map(|language| {
                let count = counts.get(&language).copied().unwrap_or_default();

                tab(&format!("{language} ({count})"), language == self.language)
            })
            .collect::<Vec<_>>()
            .join(" ");

        let selected = store.series_tab(self.language);
        let mut view = format!("Audio Content\n{tabs}\n");

        if selected.series.is_empty() {
            let _ = writeln!(view, "\nNo {} series yet.", self.language);
        }

        for series in &selected.series {
            let _ = write!(view, "\n{}", card(series));
        }

        view
    }
}

fn card(series: &Series) -> String {
    let progress = series.progress();

    format!(
        "#{id} {title} [{status}]\n    {description}\n    \
         {progress} chapters ({percent}%) | {duration}\n",
        id = series.id,
        title = series.title,
        status = series.status,
        description = series.description,
        percent = progress.percent(),
        duration = series.total_duration,
    )
}
