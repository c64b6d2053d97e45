//! Theme Controller
//!
//! Light/dark theme applied as a class on `document.documentElement`.
//! Initial value comes from localStorage, falling back to the OS
//! `prefers-color-scheme`; an explicit toggle persists the choice.

use leptos::prelude::*;

const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeController {
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeController {
    pub fn theme(&self) -> ReadSignal<Theme> {
        self.theme
    }

    pub fn toggle(&self) {
        self.set_theme.update(|t| *t = t.flipped());
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn initial_theme() -> Theme {
    if let Some(saved) = local_storage()
        .and_then(|s| s.get_item(THEME_KEY).ok().flatten())
        .as_deref()
        .and_then(Theme::parse)
    {
        return saved;
    }
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false);
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Install the theme controller into context and keep the document class
/// and persisted preference in sync with the current theme.
pub fn provide_theme() -> ThemeController {
    let (theme, set_theme) = signal(initial_theme());

    Effect::new(move |_| {
        let current = theme.get();
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = root.class_list();
            let _ = classes.remove_2("light", "dark");
            let _ = classes.add_1(current.as_str());
        }
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_KEY, current.as_str());
        }
    });

    let controller = ThemeController { theme, set_theme };
    provide_context(controller);
    controller
}

/// Get the theme controller from context.
pub fn use_theme() -> ThemeController {
    expect_context::<ThemeController>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_known_values() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
    }

    #[test]
    fn toggle_flips_between_the_two_themes() {
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Dark.flipped(), Theme::Light);
    }
}
