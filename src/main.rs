#![allow(non_snake_case)]

use dioxus::prelude::*;
use tracing::Level;
use wasm_bindgen::prelude::*;

mod bookmarks;
mod settings;
mod store;
mod surah;
mod theme;
mod toast;

use bookmarks::{AddOutcome, Bookmark, BookmarkList};
use settings::Settings;
use store::{KeyValueStore, LocalStore};
use toast::Toaster;

fn main() {
    console_error_panic_hook::set_once();

    dioxus_logger::init(Level::INFO).expect("logger failed to init");

    launch(App);
}

fn add_bookmark(mut bookmarks: Signal<BookmarkList>, toaster: Toaster, bookmark: Bookmark) {
    let name = bookmark.surah_name.clone();
    let verse = bookmark.verse;
    let outcome = bookmarks.write().add(bookmark);
    match outcome {
        AddOutcome::Duplicate => toaster.show("Verse already bookmarked"),
        AddOutcome::Added => {
            LocalStore.set(bookmarks::STORAGE_KEY, &bookmarks.read().to_json());
            toaster.show(format!("Saved Surah {name}:{verse}"));
        }
    }
}

fn remove_bookmark(mut bookmarks: Signal<BookmarkList>, index: usize) {
    let removed = bookmarks.write().remove(index);
    if removed.is_some() {
        LocalStore.set(bookmarks::STORAGE_KEY, &bookmarks.read().to_json());
    }
}

/// Numbers arriving over the page bridge must be non-negative integers;
/// anything else is malformed.
fn as_u32(n: f64) -> Option<u32> {
    (n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n)).then(|| n as u32)
}

/// Installs `window.bookmarksPanel` and `window.settingsModal` so
/// server-rendered verse markup keeps its onclick contract
/// (`bookmarksPanel.add(name, ayah, surahId)` etc.).
fn install_page_bridge(
    bookmarks: Signal<BookmarkList>,
    toaster: Toaster,
    mut drawer_open: Signal<bool>,
    mut modal_open: Signal<bool>,
) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let panel = js_sys::Object::new();
    let add = Closure::<dyn FnMut(JsValue, JsValue, JsValue)>::new(
        move |name: JsValue, verse: JsValue, surah: JsValue| {
            let (Some(surah_name), Some(verse), Some(surah_id)) = (
                name.as_string(),
                verse.as_f64().and_then(as_u32),
                surah.as_f64().and_then(as_u32),
            ) else {
                tracing::warn!("bookmarksPanel.add called with malformed arguments");
                return;
            };
            add_bookmark(
                bookmarks,
                toaster,
                Bookmark {
                    surah_name,
                    verse,
                    surah_id,
                },
            );
        },
    );
    let toggle_drawer = Closure::<dyn FnMut()>::new(move || {
        let open = !*drawer_open.peek();
        drawer_open.set(open);
    });
    js_sys::Reflect::set(&panel, &JsValue::from_str("add"), add.as_ref()).unwrap();
    js_sys::Reflect::set(&panel, &JsValue::from_str("toggle"), toggle_drawer.as_ref()).unwrap();
    js_sys::Reflect::set(&window, &JsValue::from_str("bookmarksPanel"), &panel).unwrap();
    add.forget();
    toggle_drawer.forget();

    let modal = js_sys::Object::new();
    let toggle_modal = Closure::<dyn FnMut()>::new(move || {
        let open = !*modal_open.peek();
        modal_open.set(open);
    });
    js_sys::Reflect::set(&modal, &JsValue::from_str("toggle"), toggle_modal.as_ref()).unwrap();
    js_sys::Reflect::set(&window, &JsValue::from_str("settingsModal"), &modal).unwrap();
    toggle_modal.forget();

    tracing::info!("page bridge installed");
}

#[component]
fn App() -> Element {
    let theme = use_signal(|| {
        let theme = theme::load(&LocalStore);
        theme::apply(theme);
        theme
    });
    let settings = use_signal(|| Settings::load(&LocalStore));
    let bookmarks = use_signal(|| BookmarkList::load(&LocalStore));
    let mut drawer_open = use_signal(|| false);
    let mut modal_open = use_signal(|| false);
    let toaster = toast::use_toaster();
    let surahs = use_signal(surah::list_from_window);

    // Runs after every render in which a setting changed, and once on mount,
    // so marked elements anywhere in the document stay in sync.
    use_effect(move || settings.read().apply());

    use_effect(move || install_page_bridge(bookmarks, toaster, drawer_open, modal_open));

    let count = bookmarks.read().len();
    let badge_hidden = if count == 0 { " hidden" } else { "" };

    rsx! {
        div { class: "min-h-screen bg-gray-50 dark:bg-gray-950 text-gray-900 dark:text-gray-100",
            nav { class: "flex items-center justify-between px-4 h-14 bg-white dark:bg-gray-900 shadow-sm",
                a { class: "font-bold text-lg", href: "/", "Mushaf" }
                div { class: "flex items-center gap-1",
                    theme::ThemeToggle { theme }
                    button {
                        class: "relative p-2 rounded-full hover:bg-gray-100 dark:hover:bg-gray-800",
                        onclick: move |_| {
                            let open = !*drawer_open.peek();
                            drawer_open.set(open);
                        },
                        "\u{1f516}"
                        span {
                            id: "nav-bookmark-count",
                            class: "absolute -top-1 -right-1 bg-red-500 text-white text-xs rounded-full px-1.5{badge_hidden}",
                            "{count}"
                        }
                    }
                    button {
                        class: "p-2 rounded-full hover:bg-gray-100 dark:hover:bg-gray-800",
                        onclick: move |_| {
                            let open = !*modal_open.peek();
                            modal_open.set(open);
                        },
                        "\u{2699}"
                    }
                }
            }
            main { class: "max-w-5xl mx-auto p-4",
                {surahs.read().as_ref().map(|list| rsx! {
                    surah::SurahGrid { surahs: list.clone() }
                })}
            }
            bookmarks::BookmarksDrawer {
                bookmarks,
                open: drawer_open,
                onremove: move |i| remove_bookmark(bookmarks, i),
            }
            settings::SettingsModal { settings, open: modal_open }
            toast::Toast { toaster }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::as_u32;

    #[test]
    fn bridge_numbers_must_be_non_negative_integers() {
        assert_eq!(as_u32(5.0), Some(5));
        assert_eq!(as_u32(0.0), Some(0));
        assert_eq!(as_u32(-1.0), None);
        assert_eq!(as_u32(1.5), None);
        assert_eq!(as_u32(f64::NAN), None);
        assert_eq!(as_u32(f64::from(u32::MAX) + 1.0), None);
    }
}
