#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::store::KeyValueStore;

pub const STORAGE_KEY: &str = "theme";

/// Marker class on the document root; the stylesheet keys everything off it.
const ROOT_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// An explicit preference wins; only the exact stored value "dark" counts.
/// Without one, the OS color scheme decides.
pub fn resolve(stored: Option<&str>, os_dark: bool) -> Theme {
    match stored {
        Some("dark") => Theme::Dark,
        Some(_) => Theme::Light,
        None if os_dark => Theme::Dark,
        None => Theme::Light,
    }
}

pub fn os_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|q| q.matches())
        .unwrap_or(false)
}

pub fn load(store: &impl KeyValueStore) -> Theme {
    resolve(store.get(STORAGE_KEY).as_deref(), os_prefers_dark())
}

/// Sets or removes the `dark` class on the document root. Idempotent; no-op
/// when no document is present.
pub fn apply(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let result = match theme {
        Theme::Dark => root.class_list().add_1(ROOT_CLASS),
        Theme::Light => root.class_list().remove_1(ROOT_CLASS),
    };
    if let Err(e) = result {
        tracing::warn!("failed to update root theme class: {e:?}");
    }
}

#[component]
pub fn ThemeToggle(mut theme: Signal<Theme>) -> Element {
    rsx! {
        button {
            id: "theme-toggle",
            class: "p-2 rounded-full hover:bg-gray-100 dark:hover:bg-gray-800",
            onclick: move |_| {
                let next = theme.read().flipped();
                apply(next);
                crate::store::LocalStore.set(STORAGE_KEY, next.as_str());
                theme.set(next);
            },
            if *theme.read() == Theme::Dark { "\u{263e}" } else { "\u{2600}" }
        }
    }
}
