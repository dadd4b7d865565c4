pub mod audio;
pub mod wallpapers;

pub use audio::Audio;
pub use wallpapers::Wallpapers;

pub enum Screen {
    Audio(Audio),
    Wallpapers(Wallpapers),
}

/// Renders a tab button, bracketed when active.
pub fn tab(label: &str, is_active: bool) -> String {
    if is_active {
        format!("[{label}]")
    } else {
        format!(" {label} ")
    }
}
