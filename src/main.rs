mod screen;

use crate::screen::Screen;
use crate::screen::{audio, wallpapers};

use catalog::wallpaper::Filter;
use catalog::{Language, Store};

use std::env;
use std::io::{self, BufRead, Write};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anywho::Error> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let store = match env::var_os("CATALOG_DATA") {
        Some(data) => Store::load_from(data).await?,
        None => Store::load().await?,
    };

    let mut dashboard = Dashboard::new(store);
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{}", dashboard.view())?;

    for line in io::stdin().lock().lines() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        let Some(message) = Message::parse(&line) else {
            log::warn!("Unknown command: {line}");
            continue;
        };

        if let Action::Quit = dashboard.update(message) {
            break;
        }

        writeln!(stdout, "{}", dashboard.view())?;
    }

    Ok(())
}

struct Dashboard {
    store: Store,
    screen: Screen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Message {
    OpenAudio,
    OpenWallpapers,
    Audio(audio::Message),
    Wallpapers(wallpapers::Message),
    Quit,
}

enum Action {
    None,
    Quit,
}

impl Message {
    fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let command = words.next()?;
        let argument = words.next();

        Some(match (command, argument) {
            ("audio", None) => Message::OpenAudio,
            ("wallpapers", None) => Message::OpenWallpapers,
            ("tab", Some(key)) => {
                Message::Audio(audio::Message::TabSelected(Language::parse(key)?))
            }
            ("category", Some(key)) => {
                Message::Wallpapers(wallpapers::Message::FilterSelected(Filter::parse(key)?))
            }
            ("quit" | "exit", None) => Message::Quit,
            _ => return None,
        })
    }
}

impl Dashboard {
    fn new(store: Store) -> Self {
        Self {
            store,
            screen: Screen::Audio(screen::Audio::new()),
        }
    }

    fn update(&mut self, message: Message) -> Action {
        match message {
            Message::OpenAudio => {
                self.screen = Screen::Audio(screen::Audio::new());
            }
            Message::OpenWallpapers => {
                self.screen = Screen::Wallpapers(screen::Wallpapers::new());
            }
            Message::Audio(message) => {
                let Screen::Audio(audio) = &mut self.screen else {
                    log::debug!("Ignoring {message:?} outside of the audio screen");
                    return Action::None;
                };

                audio.update(message);
            }
            Message::Wallpapers(message) => {
                let Screen::Wallpapers(wallpapers) = &mut self.screen else {
                    log::debug!("Ignoring {message:?} outside of the wallpapers screen");
                    return Action::None;
                };

                wallpapers.update(message);
            }
            Message::Quit => return Action::Quit,
        }

        Action::None
    }

    fn view(&self) -> String {
        let navbar = [
            ("Audio", matches!(self.screen, Screen::Audio(_))),
            ("Wallpapers", matches!(self.screen, Screen::Wallpapers(_))),
        ]
        .into_iter()
        .map(|(label, is_active)| screen::tab(label, is_active))
        .collect::<Vec<_>>()
        .join(" ");

        let screen = match &self.screen {
            Screen::Audio(audio) => audio.view(&self.store),
            Screen::Wallpapers(wallpapers) => wallpapers.view(&self.store),
        };

        format!("{navbar}\n\n{screen}")
    }
}
