#![allow(non_snake_case)]

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{KeyValueStore, LocalStore};

const ARABIC_SIZE_KEY: &str = "arabicSize";
const TRANSLATION_SIZE_KEY: &str = "translationSize";
const SHOW_ENGLISH_KEY: &str = "showEnglish";
const SHOW_URDU_KEY: &str = "showUrdu";

const DEFAULT_ARABIC_SIZE: u32 = 36;
const DEFAULT_TRANSLATION_SIZE: u32 = 18;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontKind {
    Arabic,
    Translation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    English,
    Urdu,
}

/// Reading preferences. Each field persists under its own storage key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub arabic_size: u32,
    pub translation_size: u32,
    pub show_english: bool,
    pub show_urdu: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arabic_size: DEFAULT_ARABIC_SIZE,
            translation_size: DEFAULT_TRANSLATION_SIZE,
            show_english: true,
            show_urdu: true,
        }
    }
}

fn load_size(store: &impl KeyValueStore, key: &str, default: u32) -> u32 {
    store
        .get(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// Historical convention: anything but the literal string "false" means true.
fn load_flag(store: &impl KeyValueStore, key: &str) -> bool {
    store.get(key).as_deref() != Some("false")
}

impl Settings {
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            arabic_size: load_size(store, ARABIC_SIZE_KEY, DEFAULT_ARABIC_SIZE),
            translation_size: load_size(store, TRANSLATION_SIZE_KEY, DEFAULT_TRANSLATION_SIZE),
            show_english: load_flag(store, SHOW_ENGLISH_KEY),
            show_urdu: load_flag(store, SHOW_URDU_KEY),
        }
    }

    pub fn set_font_size(&mut self, kind: FontKind, px: u32, store: &impl KeyValueStore) {
        let key = match kind {
            FontKind::Arabic => {
                self.arabic_size = px;
                ARABIC_SIZE_KEY
            }
            FontKind::Translation => {
                self.translation_size = px;
                TRANSLATION_SIZE_KEY
            }
        };
        store.set(key, &px.to_string());
    }

    pub fn set_translation(&mut self, language: Language, enabled: bool, store: &impl KeyValueStore) {
        let key = match language {
            Language::English => {
                self.show_english = enabled;
                SHOW_ENGLISH_KEY
            }
            Language::Urdu => {
                self.show_urdu = enabled;
                SHOW_URDU_KEY
            }
        };
        store.set(key, if enabled { "true" } else { "false" });
    }

    /// The document rewrites `apply` will perform, independent of any
    /// document. Pure function of the current values.
    fn plan(&self) -> [StyleChange; 4] {
        [
            StyleChange::FontSize {
                selector: ".arabic-content",
                value: format!("{}px", self.arabic_size),
            },
            StyleChange::FontSize {
                selector: ".translation-content",
                value: format!("{}px", self.translation_size),
            },
            StyleChange::Visibility {
                selector: ".translation-english",
                hidden: !self.show_english,
            },
            StyleChange::Visibility {
                selector: ".translation-urdu",
                hidden: !self.show_urdu,
            },
        ]
    }

    /// Rewrites every marked element in the document to match the current
    /// values. No diffing; applying the same settings twice lands on the
    /// same attribute state. Silent no-op without a document.
    pub fn apply(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        for change in self.plan() {
            match change {
                StyleChange::FontSize { selector, value } => {
                    set_font_size(&document, selector, &value);
                }
                StyleChange::Visibility { selector, hidden } => {
                    set_hidden(&document, selector, hidden);
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum StyleChange {
    FontSize { selector: &'static str, value: String },
    Visibility { selector: &'static str, hidden: bool },
}

fn set_font_size(document: &web_sys::Document, selector: &str, value: &str) {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        let _ = el.style().set_property("font-size", value);
    }
}

fn set_hidden(document: &web_sys::Document, selector: &str, hidden: bool) {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let result = if hidden {
            el.class_list().add_1("hidden")
        } else {
            el.class_list().remove_1("hidden")
        };
        if let Err(e) = result {
            tracing::warn!("failed to toggle visibility on {selector}: {e:?}");
        }
    }
}

/// Settings dialog. Visibility is a single `hidden` class flip; sliders and
/// checkboxes write through to storage and the document on every input.
#[component]
pub fn SettingsModal(mut settings: Signal<Settings>, mut open: Signal<bool>) -> Element {
    let hidden = if *open.read() { "" } else { " hidden" };
    let update_size = move |kind: FontKind| {
        move |e: Event<FormData>| {
            if let Ok(px) = e.data.value().parse() {
                settings.write().set_font_size(kind, px, &LocalStore);
            }
        }
    };
    let update_translation = move |language: Language| {
        move |e: Event<FormData>| {
            let enabled = e.data.value() == "true";
            settings.write().set_translation(language, enabled, &LocalStore);
        }
    };
    rsx! {
        div {
            id: "settings-modal",
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50{hidden}",
            onclick: move |_| open.set(false),
            div {
                class: "bg-white dark:bg-gray-900 rounded-xl p-6 w-96 space-y-4",
                onclick: move |e| e.stop_propagation(),
                h2 { class: "font-bold text-lg", "Reading Settings" }
                label { class: "block",
                    span { class: "text-sm", "Arabic size: {settings.read().arabic_size}px" }
                    input {
                        r#type: "range",
                        class: "w-full",
                        min: "24",
                        max: "60",
                        value: "{settings.read().arabic_size}",
                        oninput: update_size(FontKind::Arabic),
                    }
                }
                label { class: "block",
                    span { class: "text-sm", "Translation size: {settings.read().translation_size}px" }
                    input {
                        r#type: "range",
                        class: "w-full",
                        min: "12",
                        max: "32",
                        value: "{settings.read().translation_size}",
                        oninput: update_size(FontKind::Translation),
                    }
                }
                label { class: "flex items-center gap-2",
                    input {
                        r#type: "checkbox",
                        checked: settings.read().show_english,
                        onchange: update_translation(Language::English),
                    }
                    "English translation"
                }
                label { class: "flex items-center gap-2",
                    input {
                        r#type: "checkbox",
                        checked: settings.read().show_urdu,
                        onchange: update_translation(Language::Urdu),
                    }
                    "Urdu translation"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::MemStore;

    #[test]
    fn empty_store_yields_defaults() {
        let settings = Settings::load(&MemStore::new());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.arabic_size, 36);
        assert_eq!(settings.translation_size, 18);
    }

    #[test]
    fn stored_values_are_loaded() {
        let store = MemStore::with(&[
            ("arabicSize", "48"),
            ("translationSize", "20"),
            ("showEnglish", "false"),
            ("showUrdu", "true"),
        ]);
        let settings = Settings::load(&store);
        assert_eq!(settings.arabic_size, 48);
        assert_eq!(settings.translation_size, 20);
        assert!(!settings.show_english);
        assert!(settings.show_urdu);
    }

    #[test]
    fn unparseable_size_falls_back_to_default() {
        let store = MemStore::with(&[("arabicSize", "huge")]);
        assert_eq!(Settings::load(&store).arabic_size, 36);
    }

    #[test]
    fn only_the_literal_false_string_disables_a_translation() {
        let store = MemStore::with(&[("showEnglish", "0"), ("showUrdu", "FALSE")]);
        let settings = Settings::load(&store);
        assert!(settings.show_english);
        assert!(settings.show_urdu);
    }

    #[test]
    fn apply_targets_the_configured_pixel_sizes() {
        let mut settings = Settings::default();
        settings.set_font_size(FontKind::Arabic, 42, &MemStore::new());
        let plan = settings.plan();
        assert!(plan.contains(&StyleChange::FontSize {
            selector: ".arabic-content",
            value: "42px".to_string(),
        }));
        assert!(plan.contains(&StyleChange::FontSize {
            selector: ".translation-content",
            value: "18px".to_string(),
        }));
    }

    #[test]
    fn apply_maps_visibility_flags_to_the_hidden_class() {
        let mut settings = Settings::default();
        settings.set_translation(Language::English, false, &MemStore::new());
        let plan = settings.plan();
        assert!(plan.contains(&StyleChange::Visibility {
            selector: ".translation-english",
            hidden: true,
        }));
        assert!(plan.contains(&StyleChange::Visibility {
            selector: ".translation-urdu",
            hidden: false,
        }));
    }

    #[test]
    fn applying_unchanged_settings_is_idempotent() {
        let settings = Settings {
            arabic_size: 40,
            translation_size: 20,
            show_english: false,
            show_urdu: true,
        };
        assert_eq!(settings.plan(), settings.plan());
    }

    #[test]
    fn font_size_survives_a_reload() {
        let store = MemStore::new();
        let mut settings = Settings::load(&store);
        settings.set_font_size(FontKind::Arabic, 42, &store);
        assert_eq!(settings.arabic_size, 42);

        let reloaded = Settings::load(&store);
        assert_eq!(reloaded.arabic_size, 42);
        assert_eq!(reloaded.translation_size, 18);
    }

    #[test]
    fn translation_toggle_persists_both_ways() {
        let store = MemStore::new();
        let mut settings = Settings::load(&store);
        settings.set_translation(Language::Urdu, false, &store);
        assert_eq!(store.get("showUrdu").as_deref(), Some("false"));
        assert!(!Settings::load(&store).show_urdu);

        settings.set_translation(Language::Urdu, true, &store);
        assert!(Settings::load(&store).show_urdu);
    }
}
